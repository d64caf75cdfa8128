//! Configuration module

use std::env;

use crate::profiles::ServiceProfile;

/// Runtime configuration for one service instance.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listening port.
    pub port: u16,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Only profiles that opt in read `PORT`; the rest keep their fixed
    /// port no matter what the environment says.
    pub fn from_env(profile: &ServiceProfile) -> Self {
        let raw = if profile.port_from_env {
            env::var("PORT").ok()
        } else {
            None
        };

        Self {
            port: resolve_port(raw.as_deref(), profile),
        }
    }
}

fn resolve_port(raw: Option<&str>, profile: &ServiceProfile) -> u16 {
    raw.and_then(|p| p.parse().ok())
        .unwrap_or(profile.default_port)
}
