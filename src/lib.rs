//! BMI Classifier - one-shot weight category classification
//!
//! Computes body-mass-index from height and weight, runs a pre-trained model
//! artifact over the raw measurements to predict a weight category, and
//! reports both as JSON.

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{analyze, calculate_bmi, category_label, BmiCategory, Classifier, FeatureVector};
pub use crate::models::{ClassificationOutcome, ClassificationRequest, ClassificationResult, ErrorResponse};
pub use crate::services::{load_model, FileModelLoader, ModelArtifact, ModelError, ModelLoader, Predictor};
