use anyhow::Context;

use pokertracker_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pokertracker_observability::init();

    let config = ApiConfig::from_env()?;
    let app = pokertracker_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        dealer_fee = %config.dealer_fee,
        origins = ?config.allowed_origins,
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
