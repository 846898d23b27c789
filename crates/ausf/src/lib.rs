//! Authentication Server Function (AUSF): 5G-AKA challenge/response state
//! machine and anchor-key derivation, mediating between AMF and UDM (§4.4).

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

use std::sync::Arc;
use std::time::Duration;
use store::ContextStore;

/// Periodically drops expired, never-confirmed auth contexts (§3).
pub async fn run_sweeper(
    store: Arc<ContextStore>,
    interval: Duration,
    mut shutdown: tokio::sync::watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => store.sweep_expired(),
            _ = shutdown.changed() => return,
        }
    }
}
