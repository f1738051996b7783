// Core classification exports
pub mod analysis;
pub mod bmi;
pub mod categories;
pub mod classifier;
pub mod features;
pub mod recommendations;

pub use analysis::{analyze, standard_analysis, AnalysisError};
pub use bmi::{calculate_bmi, round_bmi, round_bmi_half_up};
pub use categories::{category_label, BmiCategory, UNKNOWN_LABEL};
pub use classifier::{Classifier, MODEL_LOAD_FAILED};
pub use features::{gender_flag, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use recommendations::{recommendations_for, Recommendations};
