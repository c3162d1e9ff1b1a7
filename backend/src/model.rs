//! Pre-trained classifier models
//!
//! The crop and fertilizer recommenders are opaque artifacts produced by
//! an external training pipeline and exported as JSON decision trees.
//! This module only loads and evaluates them; regenerating the artifacts
//! is out of scope.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// An opaque predict(feature-vector) -> label function.
///
/// The feature-vector column order and the categorical encoding scheme
/// are part of each model's contract and must match whatever produced
/// its training data.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> AppResult<String>;

    /// Number of features the model was trained on
    fn n_features(&self) -> usize;
}

/// A decision tree exported from the training pipeline.
///
/// Node 0 is the root. Split nodes send `features[feature] <= threshold`
/// left, otherwise right, matching the exporter's convention.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTreeModel {
    pub classes: Vec<String>,
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

impl DecisionTreeModel {
    /// Load a model artifact from disk
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("cannot read model {}: {}", path.display(), e))
        })?;
        let model: DecisionTreeModel = serde_json::from_str(&raw).map_err(|e| {
            AppError::Configuration(format!("malformed model {}: {}", path.display(), e))
        })?;
        model.check()?;
        Ok(model)
    }

    /// Validate internal node and class references once at load time so
    /// prediction can walk the tree without bounds surprises. Children
    /// must have strictly larger indices than their parent, which rules
    /// out cycles in a malformed artifact.
    fn check(&self) -> AppResult<()> {
        if self.nodes.is_empty() {
            return Err(AppError::Configuration("model has no nodes".to_string()));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= self.n_features {
                        return Err(AppError::Configuration(format!(
                            "split references feature {} but model has {}",
                            feature, self.n_features
                        )));
                    }
                    if *left >= self.nodes.len() || *right >= self.nodes.len() {
                        return Err(AppError::Configuration(
                            "split references a node out of range".to_string(),
                        ));
                    }
                    if *left <= idx || *right <= idx {
                        return Err(AppError::Configuration(format!(
                            "split at node {} references a non-descending child",
                            idx
                        )));
                    }
                }
                TreeNode::Leaf { class } => {
                    if *class >= self.classes.len() {
                        return Err(AppError::Configuration(
                            "leaf references a class out of range".to_string(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for DecisionTreeModel {
    fn predict(&self, features: &[f64]) -> AppResult<String> {
        if features.len() != self.n_features {
            return Err(AppError::InvalidInput(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        let mut idx = 0usize;
        // check() bounds every reference at load time and requires child
        // indices to strictly increase, so the walk always terminates.
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { class } => return Ok(self.classes[*class].clone()),
            }
        }
    }

    fn n_features(&self) -> usize {
        self.n_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_model() -> DecisionTreeModel {
        // One split on feature 1: <= 50 -> "Urea", else "DAP"
        serde_json::from_value(serde_json::json!({
            "classes": ["Urea", "DAP"],
            "n_features": 3,
            "nodes": [
                {"feature": 1, "threshold": 50.0, "left": 1, "right": 2},
                {"class": 0},
                {"class": 1}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn predicts_by_walking_splits() {
        let model = toy_model();
        assert_eq!(model.predict(&[0.0, 40.0, 0.0]).unwrap(), "Urea");
        assert_eq!(model.predict(&[0.0, 60.0, 0.0]).unwrap(), "DAP");
    }

    #[test]
    fn threshold_boundary_goes_left() {
        let model = toy_model();
        assert_eq!(model.predict(&[0.0, 50.0, 0.0]).unwrap(), "Urea");
    }

    #[test]
    fn wrong_arity_is_invalid_input() {
        let model = toy_model();
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn out_of_range_references_rejected_at_load() {
        let model: Result<DecisionTreeModel, _> = serde_json::from_value(serde_json::json!({
            "classes": ["A"],
            "n_features": 1,
            "nodes": [
                {"feature": 0, "threshold": 1.0, "left": 5, "right": 1},
                {"class": 0}
            ]
        }));
        let model = model.unwrap();
        assert!(model.check().is_err());
    }

    #[test]
    fn cyclic_references_rejected_at_load() {
        // Node 1 points back at the root; without the descending-child
        // rule predict() would walk this forever.
        let model: DecisionTreeModel = serde_json::from_value(serde_json::json!({
            "classes": ["A"],
            "n_features": 1,
            "nodes": [
                {"feature": 0, "threshold": 1.0, "left": 1, "right": 2},
                {"feature": 0, "threshold": 0.5, "left": 0, "right": 2},
                {"class": 0}
            ]
        }))
        .unwrap();
        assert!(model.check().is_err());
    }

    #[test]
    fn self_referencing_split_rejected_at_load() {
        let model: DecisionTreeModel = serde_json::from_value(serde_json::json!({
            "classes": ["A"],
            "n_features": 1,
            "nodes": [
                {"feature": 0, "threshold": 1.0, "left": 0, "right": 1},
                {"class": 0}
            ]
        }))
        .unwrap();
        assert!(model.check().is_err());
    }
}
