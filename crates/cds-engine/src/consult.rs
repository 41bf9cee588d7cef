//! Image consultation: classification composed with protocol generation.

use cds_model::{ConsultationReport, PatientProfile};
use cds_protocol::{generate, render_report};

use crate::imaging::{ClassifierBackend, ImageConditionClassifier};

/// Classify an image and expand the detected condition into a treatment
/// plan for the given patient.
///
/// Sentinel findings (model unavailable, undecodable image) carry their
/// sentinel label into the generic referral branch, so a consultation
/// always yields a renderable report.
pub fn run_consultation<B: ClassifierBackend>(
    classifier: &ImageConditionClassifier<B>,
    image_bytes: &[u8],
    profile: &PatientProfile,
) -> ConsultationReport {
    let finding = classifier.classify(image_bytes);
    let condition = finding.condition_label();
    let report = generate(condition, profile);
    ConsultationReport {
        condition: condition.to_string(),
        confidence: finding.confidence_label(),
        plan: render_report(&report),
    }
}
