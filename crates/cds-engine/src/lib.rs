//! Clinical decision and resource allocation engines.
//!
//! Four engines share one design property: every decision is reproducible
//! (same inputs, same outputs) and traces to an enumerable rule. The
//! symptom, imaging, and consultation engines are pure functions over
//! immutable tables; bed allocation is the single stateful engine and
//! guards its inventory with a lock.

pub mod beds;
pub mod consult;
pub mod imaging;
pub mod triage;

pub use beds::BedInventory;
pub use consult::run_consultation;
pub use imaging::{
    ClassifierBackend, ClassifierUnavailable, FixedClassifier, ImageConditionClassifier,
    ImageFinding, UnavailableClassifier, finding_from_seed,
};
pub use triage::{
    SymptomAssessment, SymptomMatch, SymptomRuleEngine, URGENT_SCORE_THRESHOLD,
};
