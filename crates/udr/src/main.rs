use clap::Parser;
use common::health::{self, Metrics};
use common::ids::{NfInstanceId, NfType};
use common::lifecycle;
use common::registry::{NfProfile, RegistryClient};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use udr::config::UdrConfig;
use udr::http::{self as udr_http, AppState};
use udr::store::Store;

#[derive(Parser)]
struct Args {
    #[arg(long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config: UdrConfig = common::config::load(&args.config)?;
    common::logging::init(&config.common.observability.logging);

    let store = Arc::new(Store::new());
    if let Some(path) = &config.seed_subscribers_path {
        for entry in udr::config::load_seed(path)? {
            store.provision(entry.subscriber, entry.credential, entry.sm_subscriptions);
        }
        tracing::info!(path = %path, "seeded subscribers");
    }
    let metrics = Metrics::new();

    let (shutdown_tx, shutdown_rx) = lifecycle::shutdown_channel();

    let instance_id = lifecycle::resolve_instance_id(config.common.nf.instance_id.clone());
    let mut nrf_task = None;
    if let Some(nrf_cfg) = &config.common.nrf {
        let profile = NfProfile {
            nf_instance_id: instance_id.clone(),
            nf_type: NfType::Udr,
            status: common::registry::NfStatus::Registered,
            plmn: config.common.plmn.as_ref().map(|p| common::registry::PlmnId {
                mcc: p.mcc.clone(),
                mnc: p.mnc.clone(),
            }),
            ipv4_addresses: vec![config.common.sbi.bind_address.clone()],
            capacity: 100,
            priority: 1,
            snssai_list: vec![],
            dnn_list: vec![],
            info: serde_json::Value::Null,
        };
        let registry = Arc::new(RegistryClient::new(nrf_cfg.url.clone(), Duration::from_secs(5)));
        nrf_task = Some(tokio::spawn(lifecycle::run_nrf_registration(
            nrf_cfg.clone(),
            profile,
            registry,
            shutdown_rx.clone(),
        )));
    }

    let app = udr_http::router(AppState {
        store: store.clone(),
        metrics: metrics.clone(),
    })
    .merge(health::router("udr", metrics.clone()));

    let addr = config.common.sbi.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, instance_id = %instance_id, "udr listening");
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
    if let Some(task) = nrf_task {
        let _ = task.await;
    }
    Ok(())
}
