use crate::core::features::FeatureVector;
use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or running a model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// The single capability a trained model exposes: one feature row in,
/// one class code out
pub trait Predictor: Send + Sync + Debug {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError>;

    /// Artifact kind, for logging
    fn kind(&self) -> &'static str;
}
