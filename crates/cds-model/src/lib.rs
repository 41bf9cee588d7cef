pub mod bed;
pub mod enums;
pub mod error;
pub mod patient;
pub mod report;

pub use bed::{AllocationOutcome, Bed, BedRef, CensusRow, WardCensus};
pub use enums::{AgeFlag, RuleSeverity, TriageLevel, Ward};
pub use error::{ModelError, Result};
pub use patient::PatientProfile;
pub use report::{ConsultationReport, TreatmentReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_outcome_serializes() {
        let outcome = AllocationOutcome::Assigned {
            bed: BedRef {
                number: "B-16".to_string(),
                ward: Ward::Icu,
            },
        };
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        assert!(json.contains("\"reason\":\"assigned\""));
        let round: AllocationOutcome = serde_json::from_str(&json).expect("deserialize outcome");
        assert_eq!(round, outcome);
    }

    #[test]
    fn no_capacity_serializes_as_reason() {
        let json = serde_json::to_string(&AllocationOutcome::NoCapacity).expect("serialize");
        assert_eq!(json, "{\"reason\":\"no_capacity\"}");
    }
}
