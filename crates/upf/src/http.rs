//! UPF's SBI surface (§6.1): health/readiness only. Every other interaction
//! — rule installation, usage reporting — rides PFCP over N4, not JSON.

use axum::Router;
use common::health::Metrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
}

pub fn router(_state: AppState) -> Router {
    Router::new()
}
