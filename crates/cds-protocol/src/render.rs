//! Report assembly.
//!
//! Sections are conditional: follow-up and warnings are omitted entirely
//! when absent rather than rendered as empty headers, and warnings keep
//! their accumulation order.

use std::fmt::Write as _;

use cds_model::{AgeFlag, TreatmentReport};

/// Render a treatment report as markdown-flavored text.
pub fn render_report(report: &TreatmentReport) -> String {
    let mut out = String::new();
    out.push_str("### Clinical Decision Report\n");
    let _ = writeln!(
        out,
        "**Patient Profile:** {}yrs | {}kg | Allergies: {}",
        report.profile.age,
        report.profile.weight_kg,
        report.profile.allergy_summary()
    );
    let _ = writeln!(out, "**Detected Condition:** {}", report.condition);
    out.push_str("---\n");
    out.push_str("#### Treatment Protocol:\n");
    out.push_str(&report.protocol);
    out.push_str("\n\n");

    if let Some(follow_up) = &report.follow_up {
        let _ = writeln!(out, "#### Follow-up Plan:\n- {follow_up}");
        out.push('\n');
    }

    if report.has_warnings() {
        out.push_str("#### Safety Alerts:\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "- {warning}");
        }
    }

    if report.has_flag(AgeFlag::Pediatric) {
        out.push_str("- Pediatric dosage adjustments applied.\n");
    }
    if report.has_flag(AgeFlag::Geriatric) {
        out.push_str("- Geriatric precautions: Renal function monitoring advised.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cds_model::PatientProfile;

    use crate::builders::generate;

    #[test]
    fn test_empty_sections_are_omitted() {
        // Soft tissue has neither follow-up nor warnings.
        let report = generate("Soft Tissue Injury", &PatientProfile::new(30, 70.0));
        let text = render_report(&report);
        assert!(!text.contains("Follow-up Plan"));
        assert!(!text.contains("Safety Alerts"));
        assert!(text.contains("R.I.C.E. Protocol"));
    }

    #[test]
    fn test_geriatric_line_present_for_elderly() {
        let report = generate("Hernia", &PatientProfile::new(70, 60.0));
        let text = render_report(&report);
        assert!(text.contains("Geriatric precautions"));
        assert!(!text.contains("Pediatric dosage"));
    }
}
