//! JSON model artifacts produced by the training pipeline.
//!
//! Three kinds are understood, selected by the `kind` tag:
//!
//! ```json
//! {"kind": "decision_tree", "nodes": [{"feature": 1, "threshold": 80.0, "left": 1, "right": 2}, {"class": 1}, {"class": 2}]}
//! {"kind": "random_forest", "trees": [{"nodes": [...]}, {"nodes": [...]}]}
//! {"kind": "logistic_regression", "classes": [0, 1, 2, 3], "coefficients": [[...], ...], "intercepts": [...]}
//! ```
//!
//! Artifacts are validated when parsed so prediction never indexes out of
//! bounds.

use crate::core::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use crate::services::predictor::{ModelError, Predictor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl ModelArtifact {
    /// Parse and validate an artifact from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelArtifact::DecisionTree(tree) => tree.validate(),
            ModelArtifact::RandomForest(forest) => forest.validate(),
            ModelArtifact::LogisticRegression(model) => model.validate(),
        }
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        match self {
            ModelArtifact::DecisionTree(tree) => tree.predict(features),
            ModelArtifact::RandomForest(forest) => forest.predict(features),
            ModelArtifact::LogisticRegression(model) => model.predict(features),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::DecisionTree(tree) => tree.kind(),
            ModelArtifact::RandomForest(forest) => forest.kind(),
            ModelArtifact::LogisticRegression(model) => model.kind(),
        }
    }
}

/// A node is either a split or a leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

/// Binary decision tree stored as a flat node list rooted at index 0
///
/// Traversal goes left when `x[feature] <= threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Children must point forward, which rules out cycles
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidArtifact("decision tree has no nodes".to_string()));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let TreeNode::Split { feature, threshold, left, right } = node else {
                continue;
            };

            let Some(name) = FEATURE_NAMES.get(*feature) else {
                return Err(ModelError::InvalidArtifact(format!(
                    "node {} splits on feature {} but only [{}] exist",
                    index,
                    feature,
                    FEATURE_NAMES.join(", ")
                )));
            };
            if threshold.is_nan() {
                return Err(ModelError::InvalidArtifact(format!(
                    "node {} splits on {} with a NaN threshold",
                    index, name
                )));
            }
            for child in [*left, *right] {
                if child <= index || child >= self.nodes.len() {
                    return Err(ModelError::InvalidArtifact(format!(
                        "node {} has invalid child {}",
                        index, child
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Predictor for DecisionTree {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let mut index = 0;

        // A valid tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let value = features.get(*feature).ok_or_else(|| {
                        ModelError::Inference(format!("feature {} out of range", feature))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::Inference(format!("node {} does not exist", index)));
                }
            }
        }

        Err(ModelError::Inference("tree traversal did not reach a leaf".to_string()))
    }

    fn kind(&self) -> &'static str {
        "decision_tree"
    }
}

/// Majority vote over decision trees; ties go to the smallest class code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::InvalidArtifact("random forest has no trees".to_string()));
        }
        self.trees.iter().try_for_each(DecisionTree::validate)
    }
}

impl Predictor for RandomForest {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.predict(features)?).or_default() += 1;
        }

        let mut winner: Option<(i64, usize)> = None;
        for (class, count) in votes {
            if winner.map_or(true, |(_, best)| count > best) {
                winner = Some((class, count));
            }
        }

        winner
            .map(|(class, _)| class)
            .ok_or_else(|| ModelError::Inference("random forest cast no votes".to_string()))
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}

/// Per-feature standardization applied before the linear scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear classifier: one coefficient row per class, argmax of the scores
///
/// With a single row the model is binary and a positive score selects
/// `classes[1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub classes: Vec<i64>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), ModelError> {
        let rows = self.coefficients.len();
        if rows == 0 {
            return Err(ModelError::InvalidArtifact("logistic regression has no coefficients".to_string()));
        }
        if let Some(width) = self.coefficients.iter().map(Vec::len).find(|w| *w != FEATURE_COUNT) {
            return Err(ModelError::InvalidArtifact(format!(
                "coefficient row has {} entries, expected {} for [{}]",
                width,
                FEATURE_COUNT,
                FEATURE_NAMES.join(", ")
            )));
        }
        if self.intercepts.len() != rows {
            return Err(ModelError::InvalidArtifact(format!(
                "{} intercepts for {} coefficient rows",
                self.intercepts.len(),
                rows
            )));
        }

        let expected_classes = if rows == 1 { 2 } else { rows };
        if self.classes.len() != expected_classes {
            return Err(ModelError::InvalidArtifact(format!(
                "expected {} classes, found {}",
                expected_classes,
                self.classes.len()
            )));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != FEATURE_COUNT || scaler.scale.len() != FEATURE_COUNT {
                return Err(ModelError::InvalidArtifact(format!(
                    "scaler must have {} means and scales",
                    FEATURE_COUNT
                )));
            }
            if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                return Err(ModelError::InvalidArtifact("scaler scale must be finite and non-zero".to_string()));
            }
        }

        Ok(())
    }

    fn scores(&self, features: &FeatureVector) -> Vec<f64> {
        let inputs: Vec<f64> = match &self.scaler {
            Some(scaler) => features
                .as_slice()
                .iter()
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|(x, (mean, scale))| (x - mean) / scale)
                .collect(),
            None => features.as_slice().to_vec(),
        };

        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(&inputs).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect()
    }
}

impl Predictor for LogisticRegression {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let scores = self.scores(features);
        if scores.iter().any(|s| s.is_nan()) {
            return Err(ModelError::Inference("linear score is NaN".to_string()));
        }

        let index = if let [score] = scores.as_slice() {
            usize::from(*score > 0.0)
        } else {
            // first maximum wins
            scores
                .iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |(best, max), (i, s)| {
                    if *s > max { (i, *s) } else { (best, max) }
                })
                .0
        };

        self.classes
            .get(index)
            .copied()
            .ok_or_else(|| ModelError::Inference(format!("no class at index {}", index)))
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}
