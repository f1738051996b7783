use crate::services::artifact::ModelArtifact;
use crate::services::predictor::{ModelError, Predictor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type SharedPredictor = Arc<dyn Predictor>;

/// Source of a ready-to-use predictor
pub trait ModelLoader: Send + Sync {
    fn load(&self) -> Result<SharedPredictor, ModelError>;

    /// Where the artifact comes from; doubles as the cache key
    fn source(&self) -> &Path;
}

/// Reads and parses the artifact from disk on every call
#[derive(Debug, Clone)]
pub struct FileModelLoader {
    path: PathBuf,
}

impl FileModelLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModelLoader for FileModelLoader {
    fn load(&self) -> Result<SharedPredictor, ModelError> {
        let bytes = std::fs::read(&self.path).map_err(|source| ModelError::Io {
            path: self.path.clone(),
            source,
        })?;
        let artifact = ModelArtifact::from_slice(&bytes)?;

        tracing::debug!("Loaded {} model from {}", artifact.kind(), self.path.display());
        Ok(Arc::new(artifact))
    }

    fn source(&self) -> &Path {
        &self.path
    }
}

/// Keeps loaded predictors in memory, keyed by artifact path
///
/// Failed loads are not cached, so a missing file is retried next call.
pub struct CachedModelLoader<L> {
    inner: L,
    cache: moka::sync::Cache<PathBuf, SharedPredictor>,
}

impl<L: ModelLoader> CachedModelLoader<L> {
    pub fn new(inner: L, capacity: u64) -> Self {
        let cache = moka::sync::Cache::builder().max_capacity(capacity).build();
        Self { inner, cache }
    }

    /// Drop the cached predictor so the next load rereads the artifact
    pub fn invalidate(&self) {
        self.cache.invalidate(self.inner.source());
    }
}

impl<L: ModelLoader> ModelLoader for CachedModelLoader<L> {
    fn load(&self) -> Result<SharedPredictor, ModelError> {
        let key = self.inner.source().to_path_buf();
        if let Some(predictor) = self.cache.get(&key) {
            tracing::trace!("Model cache hit: {}", key.display());
            return Ok(predictor);
        }

        let predictor = self.inner.load()?;
        self.cache.insert(key, Arc::clone(&predictor));
        Ok(predictor)
    }

    fn source(&self) -> &Path {
        self.inner.source()
    }
}

/// Load the model, logging failures and returning `None` instead of an error
pub fn load_model(loader: &dyn ModelLoader) -> Option<SharedPredictor> {
    match loader.load() {
        Ok(predictor) => Some(predictor),
        Err(e) => {
            tracing::error!("Error loading BMI classifier: {}", e);
            None
        }
    }
}
