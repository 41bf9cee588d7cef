//! The symptom keyword rule base.
//!
//! Each rule maps a free-text keyword to an indication, a recommended
//! action, and a severity. Matching is lower-cased substring containment,
//! so "headaches" matches the "headache" rule. The declaration order below
//! is the iteration order of the rule engine and therefore part of the
//! reproducibility contract: rendered advisories list matches in this
//! order, never alphabetically.

use serde::Serialize;

use cds_model::RuleSeverity;

/// One symptom keyword rule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SymptomRule {
    pub keyword: &'static str,
    pub indication: &'static str,
    pub action: &'static str,
    pub severity: RuleSeverity,
}

/// The rule base, in fixed declaration order. Keywords are unique.
pub const SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        keyword: "headache",
        indication: "Tension Headache or Migraine",
        action: "Rest in a dark room, hydration, OTC analgesics (Ibuprofen/Paracetamol).",
        severity: RuleSeverity::Low,
    },
    SymptomRule {
        keyword: "fever",
        indication: "Viral/Bacterial Infection",
        action: "Monitor temperature. Paracetamol every 6 hours. Seek help if > 39\u{b0}C.",
        severity: RuleSeverity::Medium,
    },
    SymptomRule {
        keyword: "cough",
        indication: "Upper Respiratory Infection",
        action: "Honey and warm water, cough suppressant. Chest X-ray if persistent > 2 weeks.",
        severity: RuleSeverity::Low,
    },
    SymptomRule {
        keyword: "chest pain",
        indication: "Potential Cardiac or Pulmonary Issue",
        action: "IMMEDIATE medical attention required. ECG and Enzyme tests needed.",
        severity: RuleSeverity::Critical,
    },
    SymptomRule {
        keyword: "stomach",
        indication: "Gastritis or Indigestion",
        action: "Antacids, light diet (BRAT diet). Hydration.",
        severity: RuleSeverity::Low,
    },
    SymptomRule {
        keyword: "rash",
        indication: "Allergic Reaction or Dermatitis",
        action: "Antihistamines, topical hydrocortisone. Avoid irritants.",
        severity: RuleSeverity::Low,
    },
    SymptomRule {
        keyword: "fatigue",
        indication: "Anemia, Thyroid issue, or Viral Fatigue",
        action: "Blood test (CBC/TSH). Balanced diet, sleep schedule adjustment.",
        severity: RuleSeverity::Low,
    },
    SymptomRule {
        keyword: "dizziness",
        indication: "Vertigo, Dehydration, or hypotension",
        action: "Sit down immediately. Drink water/electrolytes. check BP.",
        severity: RuleSeverity::Medium,
    },
];

/// The rule base in declaration order.
pub fn symptom_rules() -> &'static [SymptomRule] {
    SYMPTOM_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_unique_and_lowercase() {
        let mut seen = std::collections::BTreeSet::new();
        for rule in SYMPTOM_RULES {
            assert_eq!(rule.keyword, rule.keyword.to_lowercase());
            assert!(seen.insert(rule.keyword), "duplicate keyword: {}", rule.keyword);
        }
    }

    #[test]
    fn test_declaration_order_is_stable() {
        let keywords: Vec<&str> = SYMPTOM_RULES.iter().map(|rule| rule.keyword).collect();
        assert_eq!(
            keywords,
            vec![
                "headache",
                "fever",
                "cough",
                "chest pain",
                "stomach",
                "rash",
                "fatigue",
                "dizziness",
            ]
        );
    }
}
