// Unit tests for the BMI classifier

use bmi_classifier::core::{
    bmi::{calculate_bmi, round_bmi},
    categories::{category_label, BmiCategory, UNKNOWN_LABEL},
    features::{gender_flag, FeatureVector},
};
use bmi_classifier::models::{ClassificationOutcome, ClassificationRequest, ErrorResponse, RequestError};
use bmi_classifier::services::{ModelArtifact, Predictor};
use serde_json::json;

#[test]
fn test_bmi_reference_table() {
    // (height cm, weight kg, reported bmi)
    let cases = [
        (140.0, 38.0, 19.39),
        (155.5, 52.7, 21.79),
        (170.0, 70.0, 24.22),
        (182.3, 96.4, 29.01),
        (201.0, 150.0, 37.13),
        (150.0, 45.0, 20.0),
        (160.0, 51.2, 20.0),
        (180.0, 81.0, 25.0),
        (165.0, 80.0, 29.38),
        // exact ties round to even
        (200.0, 80.5, 20.12),
        (120.0, 33.3, 23.12),
        (200.0, 81.5, 20.38),
    ];
    for (height, weight, expected) in cases {
        assert_eq!(round_bmi(calculate_bmi(height, weight)), expected, "{height}cm {weight}kg");
    }
}

#[test]
fn test_reference_bmi() {
    assert_eq!(round_bmi(calculate_bmi(170.0, 70.0)), 24.22);
}

#[test]
fn test_gender_flag_only_for_male() {
    assert_eq!(gender_flag("mAlE"), 1.0);
    for other in ["female", "Female", "males", "man", "x"] {
        assert_eq!(gender_flag(other), 0.0, "{other}");
    }
}

#[test]
fn test_feature_vector_excludes_bmi() {
    let features = FeatureVector::from_request(&ClassificationRequest::new(180.0, 90.0, 45, "female"));
    assert_eq!(features.as_slice(), &[180.0, 90.0, 45.0, 0.0]);
}

#[test]
fn test_unknown_category_codes() {
    for code in [-3, 4, 5, 42] {
        assert_eq!(category_label(code), UNKNOWN_LABEL);
        assert_eq!(BmiCategory::from_code(code), None);
    }
}

#[test]
fn test_result_serialization_shape() {
    let outcome = ClassificationOutcome::Failed(ErrorResponse::new("Failed to load BMI classifier model"));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({"error": "Failed to load BMI classifier model"})
    );
}

#[test]
fn test_request_requires_all_fields() {
    assert_eq!(ClassificationRequest::from_json(&json!({})), Err(RequestError::MissingFields));
}

#[test]
fn test_forest_artifact_end_to_end() {
    let artifact = ModelArtifact::from_slice(
        br#"{"kind": "random_forest", "trees": [
            {"nodes": [{"feature": 1, "threshold": 80, "left": 1, "right": 2}, {"class": 1}, {"class": 2}]},
            {"nodes": [{"feature": 0, "threshold": 160, "left": 1, "right": 2}, {"class": 2}, {"class": 1}]},
            {"nodes": [{"class": 1}]}
        ]}"#,
    )
    .unwrap();

    assert_eq!(artifact.kind(), "random_forest");
    // votes: 1, 1, 1
    assert_eq!(artifact.predict(&FeatureVector::new(175.0, 70.0, 30, "male")).unwrap(), 1);
    // votes: 2, 2, 1
    assert_eq!(artifact.predict(&FeatureVector::new(155.0, 90.0, 30, "male")).unwrap(), 2);
}
