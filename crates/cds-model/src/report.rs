//! Structured outputs handed back to the service layer.

use serde::{Deserialize, Serialize};

use crate::enums::AgeFlag;
use crate::patient::PatientProfile;

/// Structured treatment recommendation for one detected condition.
///
/// Built by the protocol generator; the rendering layer assembles the
/// sections into the final markdown-flavored text. Warnings keep their
/// accumulation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentReport {
    pub condition: String,
    pub profile: PatientProfile,
    pub protocol: String,
    pub follow_up: Option<String>,
    pub warnings: Vec<String>,
    pub flags: Vec<AgeFlag>,
}

impl TreatmentReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_flag(&self, flag: AgeFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// Combined image-consultation result: detected condition, confidence
/// label, and the rendered treatment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationReport {
    pub condition: String,
    pub confidence: String,
    pub plan: String,
}
