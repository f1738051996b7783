// Model artifact loading and inference
pub mod artifact;
pub mod model_store;
pub mod predictor;

pub use artifact::{DecisionTree, LogisticRegression, ModelArtifact, RandomForest, StandardScaler, TreeNode};
pub use model_store::{load_model, CachedModelLoader, FileModelLoader, ModelLoader, SharedPredictor};
pub use predictor::{ModelError, Predictor};
