//! Integration tests for the image condition classifier.

use std::io::Cursor;

use proptest::prelude::*;

use cds_engine::{
    FixedClassifier, ImageConditionClassifier, ImageFinding, UnavailableClassifier,
    finding_from_seed,
};
use cds_knowledge::CONDITION_CATALOG;

fn png_bytes(shade: u8) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(4, 4, image::Rgb([shade, 8, 220]));
    let mut bytes = Vec::new();
    pixels
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode test image");
    bytes
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = ImageConditionClassifier::new(FixedClassifier(7));
    let bytes = png_bytes(120);
    let first = classifier.classify(&bytes);
    let second = classifier.classify(&bytes);
    assert!(first.is_detected());
    assert_eq!(first, second);
}

#[test]
fn test_detected_condition_comes_from_the_catalog() {
    let classifier = ImageConditionClassifier::new(FixedClassifier(3));
    for shade in [0, 51, 102, 204, 255] {
        match classifier.classify(&png_bytes(shade)) {
            ImageFinding::Detected {
                condition,
                confidence,
            } => {
                assert!(CONDITION_CATALOG.contains(&condition));
                assert!((85.0..=99.9).contains(&confidence));
            }
            other => panic!("expected detection, got {other:?}"),
        }
    }
}

#[test]
fn test_undecodable_bytes_report_analysis_failed() {
    let classifier = ImageConditionClassifier::new(FixedClassifier(3));
    let finding = classifier.classify(b"definitely not an image");
    assert_eq!(finding, ImageFinding::DecodeFailed);
    assert_eq!(finding.condition_label(), "Analysis Failed");
    assert_eq!(finding.confidence_label(), "0%");
}

#[test]
fn test_missing_backend_reports_model_unavailable() {
    let classifier = ImageConditionClassifier::new(UnavailableClassifier);
    let finding = classifier.classify(&png_bytes(42));
    assert_eq!(finding, ImageFinding::ModelUnavailable);
    assert_eq!(finding.condition_label(), "AI Model Unavailable");
    assert_eq!(finding.confidence_label(), "0%");
}

#[test]
fn test_decode_failure_wins_over_unavailable_backend() {
    let classifier = ImageConditionClassifier::new(UnavailableClassifier);
    let finding = classifier.classify(b"garbage");
    assert_eq!(finding, ImageFinding::DecodeFailed);
}

proptest! {
    #[test]
    fn prop_seed_finding_stays_in_bounds(digest: u128, top_class: u32) {
        match finding_from_seed(digest, top_class) {
            ImageFinding::Detected { condition, confidence } => {
                prop_assert!(CONDITION_CATALOG.contains(&condition));
                prop_assert!((85.0..=99.9).contains(&confidence));
            }
            other => prop_assert!(false, "expected detection, got {other:?}"),
        }
    }

    #[test]
    fn prop_seed_finding_is_a_pure_function(digest: u128, top_class: u32) {
        prop_assert_eq!(
            finding_from_seed(digest, top_class),
            finding_from_seed(digest, top_class)
        );
    }

    #[test]
    fn prop_catalog_index_follows_the_fusion_formula(digest: u128, top_class: u32) {
        let expected_index =
            ((u128::from(top_class) + digest % 100) % CONDITION_CATALOG.len() as u128) as usize;
        match finding_from_seed(digest, top_class) {
            ImageFinding::Detected { condition, .. } => {
                prop_assert_eq!(condition, CONDITION_CATALOG[expected_index]);
            }
            other => prop_assert!(false, "expected detection, got {other:?}"),
        }
    }
}
