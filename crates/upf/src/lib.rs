//! The User-Plane Forwarder: a PFCP (N4) server plus a simulated GTP-U
//! data plane (§4.7). The SBI surface is limited to health/readiness —
//! UPF has no JSON API of its own, only the registry client that keeps
//! it discoverable.

pub mod config;
pub mod dataplane;
pub mod error;
pub mod http;
pub mod model;
pub mod pfcp_server;
pub mod store;

use pfcp_server::PfcpServer;
use std::sync::Arc;
use std::time::Duration;

/// Periodically marks sessions belonging to peers whose association has
/// gone stale as orphaned (§4.7 "UPF retains sessions but logs them as
/// orphaned"). Runs until `shutdown` fires, mirroring the registry's own
/// lease sweep.
pub async fn run_association_sweep(
    server: Arc<PfcpServer>,
    grace: Duration,
    interval: Duration,
    mut shutdown: tokio::sync::watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => server.sweep_stale_associations(grace),
            _ = shutdown.changed() => return,
        }
    }
}
