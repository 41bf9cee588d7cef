//! Symptom rule engine.
//!
//! Evaluates free-text symptom reports against the keyword rule base and
//! aggregates a severity score. Matching is lower-cased substring
//! containment in the rule base's declaration order; rendering follows the
//! same order so repeated evaluations of the same text produce identical
//! advisories.

use std::fmt::Write as _;

use serde::Serialize;

use cds_knowledge::{SymptomRule, symptom_rules};

/// Aggregate score above which the advisory carries an urgent-escalation
/// notice.
pub const URGENT_SCORE_THRESHOLD: u32 = 8;

/// One rule that matched the input text.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SymptomMatch {
    pub keyword: &'static str,
    pub rule: &'static SymptomRule,
}

/// Result of evaluating one symptom report.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomAssessment {
    pub matches: Vec<SymptomMatch>,
    /// Sum of matched rule weights (Critical 10, Medium 5, Low 1).
    pub score: u32,
}

/// Evaluates symptom text against the static rule base.
///
/// Pure: no shared state, never errors. Unmatched input is a valid outcome
/// rendered as the non-specific advisory.
#[derive(Debug)]
pub struct SymptomRuleEngine {
    rules: &'static [SymptomRule],
}

impl Default for SymptomRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomRuleEngine {
    pub fn new() -> Self {
        Self {
            rules: symptom_rules(),
        }
    }

    /// Engine over a custom rule slice (tests).
    pub fn with_rules(rules: &'static [SymptomRule]) -> Self {
        Self { rules }
    }

    pub fn evaluate(&self, text: &str) -> SymptomAssessment {
        let lowered = text.to_lowercase();
        let mut matches = Vec::new();
        let mut score = 0;
        for rule in self.rules {
            if lowered.contains(rule.keyword) {
                matches.push(SymptomMatch {
                    keyword: rule.keyword,
                    rule,
                });
                score += rule.severity.weight();
            }
        }
        SymptomAssessment { matches, score }
    }
}

impl SymptomAssessment {
    pub fn is_urgent(&self) -> bool {
        self.score > URGENT_SCORE_THRESHOLD
    }

    /// Render the advisory text.
    ///
    /// Indication bullets and action lines are two independent passes over
    /// the match set; action lines are not deduplicated even when two
    /// matched rules share an action.
    pub fn render_advisory(&self) -> String {
        if self.matches.is_empty() {
            return "**Analysis:** Symptoms are non-specific.\n\
                    **Recommendation:** Monitor for 24 hours. If symptoms worsen, \
                    consult a General Practitioner."
                .to_string();
        }

        let mut out = String::from("**Detected Potential Issues:**\n");
        for entry in &self.matches {
            let _ = writeln!(
                out,
                "- **{}**: {} ({})",
                title_case(entry.keyword),
                entry.rule.indication,
                entry.rule.severity
            );
        }

        out.push_str("\n**Recommended Action Plan:**\n");
        for (index, entry) in self.matches.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, entry.rule.action);
        }

        if self.is_urgent() {
            out.push_str("\n**URGENT:** Please visit the Emergency Room immediately.");
        }
        out
    }
}

fn title_case(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chest pain"), "Chest Pain");
        assert_eq!(title_case("fever"), "Fever");
    }

    #[test]
    fn test_substring_containment_matches_inflections() {
        let engine = SymptomRuleEngine::new();
        let assessment = engine.evaluate("recurring headaches for a week");
        assert_eq!(assessment.matches.len(), 1);
        assert_eq!(assessment.matches[0].keyword, "headache");
    }

    #[test]
    fn test_matches_keep_declaration_order() {
        let engine = SymptomRuleEngine::new();
        // "dizziness" precedes "fever" in the text but follows it in the
        // rule base; output order follows the rule base.
        let assessment = engine.evaluate("dizziness and a slight fever");
        let keywords: Vec<&str> = assessment
            .matches
            .iter()
            .map(|entry| entry.keyword)
            .collect();
        assert_eq!(keywords, vec!["fever", "dizziness"]);
    }
}
