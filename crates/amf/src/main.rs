use amf::clients::ausf::AusfClient;
use amf::clients::smf::SmfClient;
use amf::clients::udm::UdmClient;
use amf::config::AmfConfig;
use amf::http::{self as amf_http, AppState};
use amf::store::UeStore;
use clap::Parser;
use common::health::{self, Metrics};
use common::ids::NfType;
use common::lifecycle;
use common::registry::{NfProfile, NfStatus, PlmnId, RegistryClient};
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
    let config: AmfConfig = common::config::load(&args.config)?;
    common::logging::init(&config.common.observability.logging);

    let nrf_cfg = config
        .common
        .nrf
        .clone()
        .ok_or_else(|| anyhow::anyhow!("amf requires nrf configuration to discover AUSF/UDM/SMF"))?;
    let registry = Arc::new(RegistryClient::new(nrf_cfg.url.clone(), Duration::from_secs(5)));
    let ausf = Arc::new(AusfClient::new(registry.clone(), Duration::from_secs(5)));
    let udm = Arc::new(UdmClient::new(registry.clone(), Duration::from_secs(5)));
    let smf = Arc::new(SmfClient::new(registry.clone(), Duration::from_secs(5)));
    let store = Arc::new(UeStore::new());
    let metrics = Metrics::new();

    let (shutdown_tx, shutdown_rx) = lifecycle::shutdown_channel();

    let instance_id = lifecycle::resolve_instance_id(config.common.nf.instance_id.clone());
    let identity = Arc::new(config.resolve_identity(instance_id.to_string())?);

    let profile = NfProfile {
        nf_instance_id: instance_id.clone(),
        nf_type: NfType::Amf,
        status: NfStatus::Registered,
        plmn: config.common.plmn.as_ref().map(|p| PlmnId {
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
    let nrf_task = tokio::spawn(lifecycle::run_nrf_registration(
        nrf_cfg,
        profile,
        registry,
        shutdown_rx.clone(),
    ));

    let app = amf_http::router(AppState {
        ausf,
        udm,
        smf,
        store,
        identity,
        metrics: metrics.clone(),
    })
    .merge(health::router("amf", metrics.clone()));

    let addr = config.common.sbi.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, instance_id = %instance_id, "amf listening");
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
    let _ = nrf_task.await;
    Ok(())
}
