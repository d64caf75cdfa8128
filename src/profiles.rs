//! Deployment profiles
//!
//! Single source of truth for the differences between the shipped services.
//! Routing, extraction, inference, and error mapping are shared; to stand up
//! a new variant, add a profile here and a thin binary under `src/bin/`.

use crate::features;

/// Compile-time description of one deployment variant.
#[derive(Debug)]
pub struct ServiceProfile {
    /// Service name, used in log lines.
    pub name: &'static str,

    /// Artifact file, resolved against the working directory.
    pub artifact_path: &'static str,

    /// Required request fields, in model input order.
    pub fields: &'static [&'static str],

    /// Key of the derived boolean in the prediction response.
    pub flag: &'static str,

    /// Whether `PORT` is consulted before falling back to `default_port`.
    pub port_from_env: bool,

    /// Listening port when `PORT` is unset, unparseable, or ignored.
    pub default_port: u16,

    /// Whether `GET /health` is routed.
    pub health_route: bool,

    /// Log each extracted feature vector at debug level.
    pub log_features: bool,
}

/// Churn service as run behind the local frontend: fixed port, no health
/// check, chatty about its inputs.
pub const CHURN: ServiceProfile = ServiceProfile {
    name: "churn",
    artifact_path: "adaboost_model.json",
    fields: features::CHURN_FIELDS,
    flag: "churn_probability",
    port_from_env: false,
    default_port: 5000,
    health_route: false,
    log_features: true,
};

/// Churn service packaged for container platforms: port comes from the
/// environment and the platform probes `/health`.
pub const CHURN_CLOUD: ServiceProfile = ServiceProfile {
    name: "churn-cloud",
    artifact_path: "adaboost_model.json",
    fields: features::CHURN_FIELDS,
    flag: "churn_probability",
    port_from_env: true,
    default_port: 8080,
    health_route: true,
    log_features: false,
};

/// Wine quality service.
pub const WINE_QUALITY: ServiceProfile = ServiceProfile {
    name: "wine-quality",
    artifact_path: "random_forest.json",
    fields: features::WINE_QUALITY_FIELDS,
    flag: "good_quality",
    port_from_env: true,
    default_port: 5000,
    health_route: true,
    log_features: false,
};
