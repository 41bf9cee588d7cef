//! Condition-name to protocol-branch dispatch.
//!
//! Catalog names deliberately share substrings ("Lung Opacity" and
//! "Infiltration" both route to the bacterial-pneumonia branch, "Viral
//! Pneumonia" must win over the bacterial branch), so dispatch is an
//! ordered table where the first matching row wins. Rows must keep this
//! exact precedence.

/// Protocol branch selected for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolTag {
    NoTreatment,
    ViralPneumonia,
    BacterialPneumonia,
    Covid,
    Tuberculosis,
    PleuralEffusion,
    Pneumothorax,
    HeartFailure,
    Orthopedic,
    SoftTissue,
    Hernia,
    Fibrosis,
    Oncology,
    GeneralReferral,
}

/// Precedence-ordered dispatch rows: any listed needle selects the tag.
const DISPATCH: &[(&[&str], ProtocolTag)] = &[
    (&["no abnormalities", "normal"], ProtocolTag::NoTreatment),
    (&["viral pneumonia"], ProtocolTag::ViralPneumonia),
    (
        &["bacterial pneumonia", "infiltration", "lung opacity"],
        ProtocolTag::BacterialPneumonia,
    ),
    (&["covid"], ProtocolTag::Covid),
    (&["tuberculosis"], ProtocolTag::Tuberculosis),
    (
        &["pleural effusion", "atelectasis"],
        ProtocolTag::PleuralEffusion,
    ),
    (&["pneumothorax"], ProtocolTag::Pneumothorax),
    (&["cardiomegaly"], ProtocolTag::HeartFailure),
    (&["fracture", "dislocation"], ProtocolTag::Orthopedic),
    (&["soft tissue"], ProtocolTag::SoftTissue),
    (&["hernia"], ProtocolTag::Hernia),
    (&["fibrosis"], ProtocolTag::Fibrosis),
    (&["tumor", "malignant"], ProtocolTag::Oncology),
];

impl ProtocolTag {
    /// Select the branch for a condition name; unrecognized names fall
    /// through to the generic referral branch, so selection is total.
    pub fn for_condition(condition: &str) -> ProtocolTag {
        let lowered = condition.to_lowercase();
        for (needles, tag) in DISPATCH {
            if needles.iter().any(|needle| lowered.contains(needle)) {
                return *tag;
            }
        }
        ProtocolTag::GeneralReferral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        // Viral is ranked ahead of the bacterial branch even though both
        // names contain "pneumonia".
        assert_eq!(
            ProtocolTag::for_condition("Viral Pneumonia"),
            ProtocolTag::ViralPneumonia
        );
        assert_eq!(
            ProtocolTag::for_condition("Bacterial Pneumonia"),
            ProtocolTag::BacterialPneumonia
        );
    }

    #[test]
    fn test_overlapping_names_share_a_branch() {
        assert_eq!(
            ProtocolTag::for_condition("Lung Opacity"),
            ProtocolTag::BacterialPneumonia
        );
        assert_eq!(
            ProtocolTag::for_condition("Infiltration"),
            ProtocolTag::BacterialPneumonia
        );
        assert_eq!(
            ProtocolTag::for_condition("Atelectasis"),
            ProtocolTag::PleuralEffusion
        );
    }

    #[test]
    fn test_fracture_variants_route_to_orthopedic() {
        assert_eq!(
            ProtocolTag::for_condition("Fracture - Hairline"),
            ProtocolTag::Orthopedic
        );
        assert_eq!(
            ProtocolTag::for_condition("Fracture - Compound"),
            ProtocolTag::Orthopedic
        );
        assert_eq!(
            ProtocolTag::for_condition("Dislocation"),
            ProtocolTag::Orthopedic
        );
    }

    #[test]
    fn test_unrecognized_names_fall_through() {
        assert_eq!(
            ProtocolTag::for_condition("Analysis Failed"),
            ProtocolTag::GeneralReferral
        );
        assert_eq!(
            ProtocolTag::for_condition("AI Model Unavailable"),
            ProtocolTag::GeneralReferral
        );
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        assert_eq!(
            ProtocolTag::for_condition("MALIGNANT TUMOR SUSPECTED"),
            ProtocolTag::Oncology
        );
    }
}
