use crate::core::{
    bmi::{calculate_bmi, round_bmi_half_up},
    categories::BmiCategory,
    classifier::Classifier,
    recommendations::recommendations_for,
};
use crate::models::{AnalysisMethod, BmiAnalysis, ClassificationOutcome, ClassificationRequest, ClassificationResult};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid height or weight values")]
    InvalidMeasurements,
}

/// Full BMI analysis: model classification with a threshold fallback, plus
/// recommendations for the resulting category
pub fn analyze(classifier: &Classifier, request: &ClassificationRequest) -> Result<BmiAnalysis, AnalysisError> {
    if !(request.height > 0.0 && request.weight > 0.0) || !calculate_bmi(request.height, request.weight).is_finite() {
        return Err(AnalysisError::InvalidMeasurements);
    }

    match classifier.classify(request) {
        ClassificationOutcome::Classified(result) => {
            let recommendations = recommendations_for(BmiCategory::from_code(result.category_code));
            Ok(BmiAnalysis {
                result,
                recommendations,
                method: AnalysisMethod::AiClassifier,
            })
        }
        ClassificationOutcome::Failed(response) => {
            tracing::info!("Model classification unavailable ({}), using standard calculation", response.error);
            Ok(standard_analysis(request))
        }
    }
}

/// Threshold-based analysis that needs no model
pub fn standard_analysis(request: &ClassificationRequest) -> BmiAnalysis {
    let bmi = round_bmi_half_up(calculate_bmi(request.height, request.weight));
    let category = BmiCategory::from_bmi(bmi);

    BmiAnalysis {
        result: ClassificationResult {
            bmi,
            category: category.label().to_string(),
            category_code: category.code(),
            height_cm: request.height,
            weight_kg: request.weight,
            age: request.age,
            gender: request.gender.clone(),
        },
        recommendations: recommendations_for(Some(category)),
        method: AnalysisMethod::StandardCalculation,
    }
}
