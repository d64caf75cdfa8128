//! Ensemble inference
//!
//! Evaluates a validated artifact: every tree is walked to a leaf, then the
//! per-tree results are combined (summed score vectors for a random forest,
//! stage-weighted votes for adaboost). The winning class index maps through
//! `classes` to the label the model was trained with.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::artifact::{Algorithm, ClassifierArtifact, ModelError, ModelMetadata, Tree, TreeNode};

/// A validated, ready-to-serve classifier.
///
/// Loaded once at process start and shared read-only across request
/// handlers; nothing here mutates after construction.
#[derive(Debug)]
pub struct Classifier {
    artifact: ClassifierArtifact,
    digest: Option<String>,
}

impl Classifier {
    /// Load and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let digest = format!("{:x}", Sha256::digest(&bytes));

        let artifact: ClassifierArtifact = serde_json::from_slice(&bytes)?;
        artifact.validate()?;

        Ok(Self {
            artifact,
            digest: Some(digest),
        })
    }

    /// Build a classifier from an already-deserialized artifact.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        Ok(Self {
            artifact,
            digest: None,
        })
    }

    /// Number of input features the model was trained on.
    pub fn n_features(&self) -> usize {
        self.artifact.n_features
    }

    pub fn algorithm(&self) -> Algorithm {
        self.artifact.algorithm
    }

    pub fn tree_count(&self) -> usize {
        self.artifact.trees.len()
    }

    /// SHA-256 of the artifact bytes, when loaded from disk.
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.artifact.metadata.as_ref()
    }

    /// Predict the class label for a single feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        if features.len() != self.artifact.n_features {
            return Err(ModelError::FeatureCount {
                got: features.len(),
                want: self.artifact.n_features,
            });
        }

        let mut scores = vec![0.0f64; self.artifact.classes.len()];
        match self.artifact.algorithm {
            Algorithm::RandomForest => {
                for tree in &self.artifact.trees {
                    let leaf = descend(tree, features);
                    for (score, value) in scores.iter_mut().zip(leaf) {
                        *score += value;
                    }
                }
            }
            Algorithm::Adaboost => {
                for (tree, weight) in self.artifact.trees.iter().zip(&self.artifact.stage_weights) {
                    let vote = argmax(descend(tree, features));
                    scores[vote] += weight;
                }
            }
        }

        Ok(self.artifact.classes[argmax(&scores)])
    }
}

/// Walk one tree to its leaf scores.
///
/// Safe to index freely: validation guarantees children are in bounds and
/// strictly increasing, and `predict` has already checked the vector length.
fn descend<'a>(tree: &'a Tree, features: &[f64]) -> &'a [f64] {
    let mut index = 0;
    loop {
        match &tree.nodes[index] {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                index = if features[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
            TreeNode::Leaf { value } => return value,
        }
    }
}

/// Index of the first maximum.
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = index;
        }
    }
    best
}
