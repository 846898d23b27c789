use clap::Parser;
use common::health::{self, Metrics};
use common::ids::NfType;
use common::lifecycle;
use common::registry::{NfProfile, NfStatus, PlmnId, RegistryClient};
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use upf::config::UpfConfig;
use upf::dataplane::SimulatedDataPlane;
use upf::http::{self as upf_http, AppState};
use upf::pfcp_server::PfcpServer;
use upf::store::SessionStore;

#[derive(Parser)]
struct Args {
    #[arg(long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config: UpfConfig = common::config::load(&args.config)?;
    common::logging::init(&config.common.observability.logging);

    let node_id: Ipv4Addr = config
        .pfcp
        .node_id
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid pfcp.nodeId {}: {e}", config.pfcp.node_id))?;
    let n3_address: Ipv4Addr = config
        .n3
        .local_address
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid n3.localAddress {}: {e}", config.n3.local_address))?;

    let store = Arc::new(SessionStore::new());
    let dataplane = Arc::new(SimulatedDataPlane::new());
    let pfcp_server = Arc::new(PfcpServer::new(store, dataplane, node_id, n3_address));
    let metrics = Metrics::new();

    let (shutdown_tx, shutdown_rx) = lifecycle::shutdown_channel();

    let pfcp_bind = format!("{}:{}", config.pfcp.bind_address, config.pfcp.port);
    let pfcp_socket = tokio::net::UdpSocket::bind(&pfcp_bind).await?;
    tracing::info!(addr = %pfcp_bind, "upf pfcp server listening");
    let pfcp_task = tokio::spawn(pfcp_server.clone().run(pfcp_socket, shutdown_rx.clone()));

    let sweep_task = tokio::spawn(upf::run_association_sweep(
        pfcp_server.clone(),
        Duration::from_secs(config.association_grace_secs),
        Duration::from_secs(10),
        shutdown_rx.clone(),
    ));

    let instance_id = lifecycle::resolve_instance_id(config.common.nf.instance_id.clone());
    let nrf_task = config.common.nrf.clone().map(|nrf_cfg| {
        let registry = Arc::new(RegistryClient::new(nrf_cfg.url.clone(), Duration::from_secs(5)));
        let profile = NfProfile {
            nf_instance_id: instance_id.clone(),
            nf_type: NfType::Upf,
            status: NfStatus::Registered,
            plmn: config.common.plmn.as_ref().map(|p| PlmnId {
                mcc: p.mcc.clone(),
                mnc: p.mnc.clone(),
            }),
            ipv4_addresses: vec![n3_address.to_string()],
            capacity: 100,
            priority: 1,
            snssai_list: vec![],
            dnn_list: config.dnn_list.clone(),
            info: serde_json::Value::Null,
        };
        tokio::spawn(lifecycle::run_nrf_registration(nrf_cfg, profile, registry, shutdown_rx.clone()))
    });

    let app = upf_http::router(AppState { metrics: metrics.clone() }).merge(health::router("upf", metrics.clone()));

    let addr = config.common.sbi.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, instance_id = %instance_id, "upf listening");
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
    let _ = pfcp_task.await;
    let _ = sweep_task.await;
    if let Some(task) = nrf_task {
        let _ = task.await;
    }
    Ok(())
}
