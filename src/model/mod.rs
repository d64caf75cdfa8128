//! Classifier loading and inference
//!
//! Deserializes exported ensemble models and evaluates them. Nothing here
//! trains or mutates a model; artifacts are read once at startup and served
//! unchanged for the process lifetime.

pub mod artifact;
pub mod ensemble;

pub use artifact::{Algorithm, ClassifierArtifact, ModelError, ModelMetadata, Tree, TreeNode};
pub use ensemble::Classifier;
