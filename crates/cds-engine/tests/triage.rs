//! Integration tests for the symptom rule engine.

use cds_engine::SymptomRuleEngine;
use cds_model::RuleSeverity;

#[test]
fn test_headache_and_fever_report() {
    let engine = SymptomRuleEngine::new();
    let assessment = engine.evaluate("I have a bad headache and fever");

    assert_eq!(assessment.matches.len(), 2);
    assert_eq!(assessment.matches[0].keyword, "headache");
    assert_eq!(assessment.matches[0].rule.severity, RuleSeverity::Low);
    assert_eq!(assessment.matches[1].keyword, "fever");
    assert_eq!(assessment.matches[1].rule.severity, RuleSeverity::Medium);
    assert_eq!(assessment.score, 6);
    assert!(!assessment.is_urgent());

    let advisory = assessment.render_advisory();
    assert!(advisory.contains("Tension Headache or Migraine"));
    assert!(advisory.contains("Viral/Bacterial Infection"));
    assert!(advisory.contains("1. Rest in a dark room"));
    assert!(advisory.contains("2. Monitor temperature."));
    assert!(!advisory.contains("URGENT"));
}

#[test]
fn test_score_is_sum_of_match_weights() {
    let engine = SymptomRuleEngine::new();
    let assessment = engine.evaluate("chest pain, dizziness, cough and a rash");
    let expected: u32 = assessment
        .matches
        .iter()
        .map(|entry| entry.rule.severity.weight())
        .sum();
    assert_eq!(assessment.score, expected);
    assert_eq!(assessment.score, 10 + 5 + 1 + 1);
}

#[test]
fn test_urgent_banner_above_threshold() {
    let engine = SymptomRuleEngine::new();
    let assessment = engine.evaluate("severe chest pain and a fever");
    assert_eq!(assessment.score, 15);
    assert!(assessment.is_urgent());
    assert!(
        assessment
            .render_advisory()
            .contains("**URGENT:** Please visit the Emergency Room immediately.")
    );
}

#[test]
fn test_threshold_is_strictly_greater_than() {
    let engine = SymptomRuleEngine::new();
    // fever + dizziness = 5 + 5 = 10 > 8 urgent; fever + cough + headache +
    // rash = 5 + 1 + 1 + 1 = 8 is not.
    let at_threshold = engine.evaluate("fever, cough, headache, rash");
    assert_eq!(at_threshold.score, 8);
    assert!(!at_threshold.is_urgent());
}

#[test]
fn test_unmatched_text_yields_fixed_advisory() {
    let engine = SymptomRuleEngine::new();
    let assessment = engine.evaluate("my elbow itches a little");
    assert!(assessment.matches.is_empty());
    assert_eq!(assessment.score, 0);

    let advisory = assessment.render_advisory();
    assert!(advisory.contains("Symptoms are non-specific"));
    assert!(advisory.contains("Monitor for 24 hours"));
    assert!(!advisory.contains("Detected Potential Issues"));
}

#[test]
fn test_evaluation_is_reproducible() {
    let engine = SymptomRuleEngine::new();
    let text = "Fever, HEADACHE and stomach trouble";
    let first = engine.evaluate(text);
    let second = engine.evaluate(text);
    assert_eq!(first.score, second.score);
    assert_eq!(first.render_advisory(), second.render_advisory());
}

#[test]
fn test_assessment_serializes_for_machine_consumers() {
    let engine = SymptomRuleEngine::new();
    let assessment = engine.evaluate("fever");
    let json = serde_json::to_value(&assessment).expect("serialize assessment");
    assert_eq!(json["score"], 5);
    assert_eq!(json["matches"][0]["keyword"], "fever");
}
