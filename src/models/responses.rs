use crate::core::recommendations::Recommendations;
use serde::{Deserialize, Serialize};

/// Successful classification, keys in output order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub bmi: f64,
    pub category: String,
    pub category_code: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: i64,
    pub gender: String,
}

/// Error response, a single `error` key and nothing else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// What `classify` hands back: a result or an error-shaped object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassificationOutcome {
    Classified(ClassificationResult),
    Failed(ErrorResponse),
}

impl ClassificationOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        ClassificationOutcome::Failed(ErrorResponse::new(error))
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            ClassificationOutcome::Classified(result) => Some(result),
            ClassificationOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ClassificationOutcome::Classified(_) => None,
            ClassificationOutcome::Failed(response) => Some(&response.error),
        }
    }
}

/// How a [`BmiAnalysis`] arrived at its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    AiClassifier,
    StandardCalculation,
}

/// Classification enriched with health recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiAnalysis {
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub recommendations: Recommendations,
    pub method: AnalysisMethod,
}
