#![deny(unsafe_code)]

pub mod catalog;
pub mod hash;
pub mod symptoms;

pub use catalog::{CONDITION_CATALOG, condition_at, condition_count};
pub use hash::{content_digest, content_digest_hex};
pub use symptoms::{SYMPTOM_RULES, SymptomRule, symptom_rules};
