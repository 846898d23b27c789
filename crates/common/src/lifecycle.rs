//! Process lifecycle scaffold shared by every NF binary: SIGINT/SIGTERM
//! graceful drain, NRF self-registration with heartbeat renewal, and
//! deregistration on shutdown (§6.6, §4.1).

use crate::config::NrfConfig;
use crate::ids::NfInstanceId;
use crate::registry::{NfProfile, RegistryClient};
use crate::trace::TraceContext;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Runs the register-then-heartbeat loop against the NRF until `shutdown`
/// fires, then deregisters. Tolerates NRF being transiently unreachable
/// (§4.1: "peer NFs retry register/heartbeat with bounded exponential
/// backoff; registry unreachability is not fatal").
pub async fn run_nrf_registration(
    nrf: NrfConfig,
    profile: NfProfile,
    registry: Arc<RegistryClient>,
    mut shutdown: watch::Receiver<bool>,
) {
    if !nrf.enabled {
        return;
    }
    let instance_id = profile.nf_instance_id.clone();
    let mut backoff = Duration::from_millis(200);
    loop {
        match registry.register(&profile, &TraceContext::new_root()).await {
            Ok(resp) => {
                tracing::info!(instance_id = %instance_id, ttl = resp.heartbeat_timer_secs, "registered with NRF");
                backoff = Duration::from_millis(200);
                break;
            }
            Err(err) => {
                tracing::warn!(error = %err, next_retry = ?backoff, "NRF registration failed, retrying");
                tokio::select! {
                    _ = tokio::time::sleep(backoff) => {}
                    _ = shutdown.changed() => return,
                }
                backoff = (backoff * 2).min(Duration::from_secs(8));
            }
        }
    }

    let mut interval = tokio::time::interval(nrf.heartbeat_interval());
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(err) = registry.heartbeat(&instance_id, &TraceContext::new_root()).await {
                    tracing::warn!(error = %err, "NRF heartbeat failed");
                }
            }
            _ = shutdown.changed() => {
                let _ = registry.deregister(&instance_id, &TraceContext::new_root()).await;
                tracing::info!(instance_id = %instance_id, "deregistered from NRF");
                return;
            }
        }
    }
}

/// Waits for SIGINT/SIGTERM, then flips the shutdown watch so in-flight
/// tasks (the NRF loop, the SBI server's graceful shutdown future) unwind.
pub async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Builds a `(sender, receiver)` pair for signalling shutdown across tasks.
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// A bounded drain: gives in-flight requests `grace` to finish before the
/// process exits, matching §6.6's "drain in-flight with a bounded timeout".
pub async fn drain_with_grace<F>(in_flight: F, grace: Duration)
where
    F: std::future::Future<Output = ()>,
{
    if tokio::time::timeout(grace, in_flight).await.is_err() {
        tracing::warn!(?grace, "graceful drain timed out, forcing shutdown");
    }
}

/// Unique instance id, filled in from config if provided, otherwise random.
pub fn resolve_instance_id(configured: Option<String>) -> NfInstanceId {
    match configured {
        Some(id) => NfInstanceId(id),
        None => NfInstanceId::new_random(),
    }
}
