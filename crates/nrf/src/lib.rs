//! The Network Repository Function: a dynamic directory of NF instances
//! with lease-based heartbeats and typed discovery (§4.1).

pub mod config;
pub mod error;
pub mod http;
pub mod store;

use std::sync::Arc;
use std::time::Duration;
use store::Store;

/// Spawns the background lease sweep (§4.1: "A background sweep at a
/// fixed interval ... marks profiles ... as SUSPENDED ... deleted").
/// Runs until `shutdown` fires.
pub async fn run_sweeper(store: Arc<Store>, interval: Duration, mut shutdown: tokio::sync::watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => store.sweep(),
            _ = shutdown.changed() => return,
        }
    }
}
