//! Shared plumbing for the prediction services.
//!
//! Three near-identical deployment variants live under `src/bin/`; each
//! wires one [`profiles::ServiceProfile`] into the same axum server:
//!
//! ```text
//! ┌──────────┐  POST /predict  ┌────────────────────────────────────┐
//! │  client  │ ──────────────▶ │  extract fields   → Vec<f64>       │
//! └──────────┘                 │  Classifier       (Arc, read-only) │
//!      ◀──────────────────────── {"prediction": n, "<flag>": n != 0}│
//!                              └────────────────────────────────────┘
//! ```
//!
//! The model artifact is deserialized once at startup and never mutated;
//! request handlers share it read-only, so there is no locking anywhere.

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
pub mod profiles;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use server::AppState;
