use clap::Parser;
use common::health::{self, Metrics};
use common::lifecycle;
use nrf::config::NrfConfig;
use nrf::http::{self as nrf_http, AppState};
use nrf::store::Store;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
struct Args {
    #[arg(long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config: NrfConfig = common::config::load(&args.config)?;
    common::logging::init(&config.common.observability.logging);

    let store = Arc::new(Store::new(Duration::from_secs(config.lease_ttl_secs)));
    let metrics = Metrics::new();

    let (shutdown_tx, shutdown_rx) = lifecycle::shutdown_channel();

    let sweeper = tokio::spawn(nrf::run_sweeper(
        store.clone(),
        Duration::from_secs(config.sweep_interval_secs),
        shutdown_rx.clone(),
    ));

    let app = nrf_http::router(AppState {
        store: store.clone(),
        metrics: metrics.clone(),
    })
    .merge(health::router("nrf", metrics.clone()));

    let addr = config.common.sbi.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "nrf listening");
    metrics.mark_ready();

    let mut shutdown_for_serve = shutdown_rx.clone();
    let serve_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_for_serve.changed().await;
            })
            .await
    });

    lifecycle::wait_for_shutdown_signal().await;
    tracing::info!("shutdown signal received, draining");
    let _ = shutdown_tx.send(true);

    serve_task.await??;
    let _ = sweeper.await;
    Ok(())
}
