use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking::api::router;
use booking::config::AppConfig;
use booking::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "booking=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env().inspect_err(|e| error!("configuration error: {}", e))?;
    info!(
        "session cap per booking: {:?}, dates rendered as {:?}",
        config.max_total_sessions,
        config.date_format.as_str()
    );

    let addr = config.addr;
    let app = router(AppState::new(config));

    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
