use crate::config::ModelSettings;
use crate::core::{
    bmi::{calculate_bmi, round_bmi},
    categories::category_label,
    features::FeatureVector,
};
use crate::models::{ClassificationOutcome, ClassificationRequest, ClassificationResult};
use crate::services::{load_model, CachedModelLoader, FileModelLoader, ModelLoader};

pub const MODEL_LOAD_FAILED: &str = "Failed to load BMI classifier model";

/// Classifier invoker
///
/// # Pipeline
/// 1. Load the model through the configured loader
/// 2. Compute BMI from height and weight
/// 3. Build the `[height, weight, age, gender_flag]` feature row
/// 4. Predict a category code and map it to a label
///
/// Failures never escape: they come back as [`ClassificationOutcome::Failed`].
pub struct Classifier {
    loader: Box<dyn ModelLoader>,
}

impl Classifier {
    pub fn new(loader: impl ModelLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
        }
    }

    /// Reload-per-call by default, cached when `settings.cache` is set
    pub fn from_settings(settings: &ModelSettings) -> Self {
        let file = FileModelLoader::new(&settings.path);
        if settings.cache {
            Self::new(CachedModelLoader::new(file, settings.cache_capacity))
        } else {
            Self::new(file)
        }
    }

    pub fn classify(&self, request: &ClassificationRequest) -> ClassificationOutcome {
        let Some(model) = load_model(self.loader.as_ref()) else {
            return ClassificationOutcome::failed(MODEL_LOAD_FAILED);
        };

        let bmi = calculate_bmi(request.height, request.weight);
        if !bmi.is_finite() {
            return ClassificationOutcome::failed(format!(
                "Classification error: BMI is not finite for height {} cm and weight {} kg",
                request.height, request.weight
            ));
        }
        let features = FeatureVector::from_request(request);

        let category_code = match model.predict(&features) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!("{} model failed to predict: {}", model.kind(), e);
                return ClassificationOutcome::failed(format!("Classification error: {}", e));
            }
        };

        tracing::debug!("Predicted category code {} for bmi {:.2}", category_code, bmi);

        ClassificationOutcome::Classified(ClassificationResult {
            bmi: round_bmi(bmi),
            category: category_label(category_code).to_string(),
            category_code,
            height_cm: request.height,
            weight_kg: request.weight,
            age: request.age,
            gender: request.gender.clone(),
        })
    }
}
