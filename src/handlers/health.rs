//! Health check handler

/// Liveness probe.
///
/// Deploy tooling matches on the literal body, so this stays plain text.
pub async fn check() -> &'static str {
    "Ok"
}
