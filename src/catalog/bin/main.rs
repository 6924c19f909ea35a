use std::net::SocketAddr;
use convene::core::controller::AppState;
use convene::core::domain::Configuration;
use convene::router::build_router;
use convene::utils::logs::setup_tracing;
use tracing::info;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!(branch = %config.branch_id, %addr, seeded = config.seed_catalog, "starting catalog");

    let app = build_router(AppState::new(config));

    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", err);
    }
}
