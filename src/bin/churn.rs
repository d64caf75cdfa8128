//! Customer churn prediction service, as run behind the local frontend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prediction_api::{profiles, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prediction_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    server::run(&profiles::CHURN).await
}
