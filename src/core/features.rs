use crate::models::ClassificationRequest;

/// Number of columns in a model input row
pub const FEATURE_COUNT: usize = 4;

/// Column order of [`FeatureVector`]
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["height", "weight", "age", "gender"];

/// Fixed-shape model input: `[height_cm, weight_kg, age, gender_flag]`
///
/// BMI is deliberately absent; the model sees the raw measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(height_cm: f64, weight_kg: f64, age: i64, gender: &str) -> Self {
        Self([height_cm, weight_kg, age as f64, gender_flag(gender)])
    }

    pub fn from_request(request: &ClassificationRequest) -> Self {
        Self::new(request.height, request.weight, request.age, &request.gender)
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// 1.0 when gender is "male" in any casing, 0.0 for every other value
pub fn gender_flag(gender: &str) -> f64 {
    if gender.to_lowercase() == "male" {
        1.0
    } else {
        0.0
    }
}
