//! Customer churn prediction service, packaged for container platforms.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prediction_api::{profiles, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prediction_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    server::run(&profiles::CHURN_CLOUD).await
}
