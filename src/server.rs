//! Server assembly
//!
//! One startup path shared by every deployment variant: load and check the
//! model, resolve the port, build the router, serve.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::handlers;
use crate::model::Classifier;
use crate::profiles::ServiceProfile;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub profile: &'static ServiceProfile,
}

/// Create the router for one deployment profile
pub fn create_router(state: AppState) -> Router {
    let mut routes = Router::new().route("/predict", post(handlers::predict::run));

    if state.profile.health_route {
        routes = routes.route("/health", get(handlers::health::check));
    }

    // Browser frontends call these services cross-origin.
    routes
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Load the profile's model and serve until the process is killed.
pub async fn run(profile: &'static ServiceProfile) -> anyhow::Result<()> {
    tracing::info!("{} service starting...", profile.name);

    let classifier = Classifier::load(profile.artifact_path)
        .with_context(|| format!("loading model artifact {}", profile.artifact_path))?;

    // A model trained on a different layout would misread every request;
    // refuse to come up instead.
    if classifier.n_features() != profile.fields.len() {
        anyhow::bail!(
            "{} sends {} fields but {} expects {}",
            profile.name,
            profile.fields.len(),
            profile.artifact_path,
            classifier.n_features()
        );
    }

    tracing::info!(
        "Loaded {} ({}, {} trees)",
        profile.artifact_path,
        classifier.algorithm().as_str(),
        classifier.tree_count()
    );
    if let Some(digest) = classifier.digest() {
        tracing::info!("Model sha256: {}", digest);
    }
    if let Some(metadata) = classifier.metadata() {
        if let Some(name) = &metadata.name {
            tracing::info!("Model name: {}", name);
        }
        if let Some(trained_at) = &metadata.trained_at {
            tracing::info!("Model trained at: {}", trained_at.to_rfc3339());
        }
    }

    let config = ServiceConfig::from_env(profile);
    let state = AppState {
        classifier: Arc::new(classifier),
        profile,
    };
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 {} listening on http://{}", profile.name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
