use clap::Parser;
use common::health::{self, Metrics};
use common::ids::NfType;
use common::lifecycle;
use common::registry::{NfProfile, NfStatus, PlmnId, RegistryClient};
use smf::clients::udm::UdmClient;
use smf::config::SmfConfig;
use smf::http::{self as smf_http, AppState};
use smf::ipam::IpamRegistry;
use smf::pfcp_client::PfcpClient;
use smf::store::SessionStore;
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
    let config: SmfConfig = common::config::load(&args.config)?;
    common::logging::init(&config.common.observability.logging);

    let nrf_cfg = config
        .common
        .nrf
        .clone()
        .ok_or_else(|| anyhow::anyhow!("smf requires nrf configuration to discover UDM/UPF"))?;
    let registry = Arc::new(RegistryClient::new(nrf_cfg.url.clone(), Duration::from_secs(5)));
    let udm = Arc::new(UdmClient::new(registry.clone(), Duration::from_secs(5)));

    let local_node_id = config
        .common
        .sbi
        .bind_address
        .parse()
        .unwrap_or(std::net::Ipv4Addr::UNSPECIFIED);
    let pfcp = Arc::new(PfcpClient::new(local_node_id));
    let ipam = Arc::new(IpamRegistry::from_config(&config.ip_pools)?);
    let store = Arc::new(SessionStore::new());
    let metrics = Metrics::new();

    let (shutdown_tx, shutdown_rx) = lifecycle::shutdown_channel();

    let instance_id = lifecycle::resolve_instance_id(config.common.nf.instance_id.clone());

    let profile = NfProfile {
        nf_instance_id: instance_id.clone(),
        nf_type: NfType::Smf,
        status: NfStatus::Registered,
        plmn: config.common.plmn.as_ref().map(|p| PlmnId {
            mcc: p.mcc.clone(),
            mnc: p.mnc.clone(),
        }),
        ipv4_addresses: vec![config.common.sbi.bind_address.clone()],
        capacity: 100,
        priority: 1,
        snssai_list: vec![],
        dnn_list: config.dnn_list.clone(),
        info: serde_json::Value::Null,
    };
    let nrf_task = tokio::spawn(lifecycle::run_nrf_registration(
        nrf_cfg,
        profile,
        registry.clone(),
        shutdown_rx.clone(),
    ));

    let app = smf_http::router(AppState {
        store,
        udm,
        registry,
        pfcp,
        ipam,
        metrics: metrics.clone(),
    })
    .merge(health::router("smf", metrics.clone()));

    let addr = config.common.sbi.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, instance_id = %instance_id, "smf listening");
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
