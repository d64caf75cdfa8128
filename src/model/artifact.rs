//! Model artifact wire format
//!
//! Fitted ensembles are exported by the training environment as a JSON
//! document; this module owns the serde schema and the structural checks
//! applied once at load time.
//!
//! The exporter contract:
//! - trees are stored as flat node arrays evaluated from index 0, with
//!   `x[feature] <= threshold` descending to `left`;
//! - nodes are written in preorder, so both children of a split always
//!   follow their parent and traversal cannot loop;
//! - a leaf carries one score per entry of `classes`;
//! - `stage_weights` is present for boosted ensembles only, one weight per
//!   tree.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    Invalid(String),

    #[error("feature vector has {got} values, model expects {want}")]
    FeatureCount { got: usize, want: usize },
}

/// Ensemble family of the exported model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Adaboost,
    RandomForest,
}

impl Algorithm {
    /// Wire token of the variant, reused in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Adaboost => "adaboost",
            Algorithm::RandomForest => "random_forest",
        }
    }
}

/// One node of an exported decision tree
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

/// Optional provenance block written by the exporter
#[derive(Debug, Clone, Deserialize)]
pub struct ModelMetadata {
    pub name: Option<String>,
    pub trained_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

/// Root of the artifact document
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    pub algorithm: Algorithm,
    pub n_features: usize,
    pub classes: Vec<i64>,
    pub trees: Vec<Tree>,
    #[serde(default)]
    pub stage_weights: Vec<f64>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl ClassifierArtifact {
    /// Check the structural invariants the exporter guarantees.
    ///
    /// A violated invariant means a broken or truncated export; the service
    /// refuses to start rather than serve garbage predictions.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_features == 0 {
            return Err(invalid("n_features must be at least 1"));
        }
        if self.classes.len() < 2 {
            return Err(invalid("a classifier needs at least two classes"));
        }
        if self.trees.is_empty() {
            return Err(invalid("ensemble has no trees"));
        }

        match self.algorithm {
            Algorithm::Adaboost => {
                if self.stage_weights.len() != self.trees.len() {
                    return Err(invalid(format!(
                        "adaboost expects {} stage weights, found {}",
                        self.trees.len(),
                        self.stage_weights.len()
                    )));
                }
                if let Some(w) = self.stage_weights.iter().find(|w| !w.is_finite()) {
                    return Err(invalid(format!("non-finite stage weight {}", w)));
                }
            }
            Algorithm::RandomForest => {
                if !self.stage_weights.is_empty() {
                    return Err(invalid("random forest takes no stage weights"));
                }
            }
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(invalid(format!("tree {} has no nodes", t)));
            }

            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= self.n_features {
                            return Err(invalid(format!(
                                "tree {} node {}: feature {} out of range",
                                t, i, feature
                            )));
                        }
                        if !threshold.is_finite() {
                            return Err(invalid(format!(
                                "tree {} node {}: non-finite threshold",
                                t, i
                            )));
                        }
                        for (side, child) in [("left", *left), ("right", *right)] {
                            if child >= tree.nodes.len() {
                                return Err(invalid(format!(
                                    "tree {} node {}: {} child {} out of range",
                                    t, i, side, child
                                )));
                            }
                            if child <= i {
                                return Err(invalid(format!(
                                    "tree {} node {}: {} child {} does not follow its parent",
                                    t, i, side, child
                                )));
                            }
                        }
                    }
                    TreeNode::Leaf { value } => {
                        if value.len() != self.classes.len() {
                            return Err(invalid(format!(
                                "tree {} node {}: leaf has {} scores for {} classes",
                                t,
                                i,
                                value.len(),
                                self.classes.len()
                            )));
                        }
                        if value.iter().any(|v| !v.is_finite()) {
                            return Err(invalid(format!(
                                "tree {} node {}: non-finite leaf score",
                                t, i
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ModelError {
    ModelError::Invalid(message.into())
}
