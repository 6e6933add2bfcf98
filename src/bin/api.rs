//! `mindpal-api`: serves the three mock generation endpoints.

use mindpal::server::{ApiConfig, ApiState, ArtifactStore, router};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.api_key.is_none() {
        warn!("MINDPAL_API_KEY is not set; every generation request will fail with 400");
    }

    // Storage is best-effort: an unreachable database only disables inserts.
    let pool = match &config.database_url {
        Some(url) => match PgPoolOptions::new().max_connections(5).connect(url).await {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!(error = %err, "database unavailable; generated artifacts will not be persisted");
                None
            }
        },
        None => {
            info!("DATABASE_URL not set; generated artifacts will not be persisted");
            None
        }
    };

    let state = ApiState::new(config.api_key.clone(), ArtifactStore::new(pool));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("mindpal-api listening on {}", config.bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}
