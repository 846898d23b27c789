//! `/health`, `/ready`, and a minimal Prometheus-text `/metrics` exposition
//! (§6.1). The TSDB/scrape pipeline itself is out of scope (§1); this is
//! just the per-NF exposition surface.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct Metrics {
    pub requests_total: AtomicU64,
    pub requests_failed: AtomicU64,
    ready: AtomicBool,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    pub fn record_request(&self, failed: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if failed {
            self.requests_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn render_prometheus(&self, nf_name: &str) -> String {
        format!(
            "# HELP core_requests_total Total SBI requests handled.\n\
             # TYPE core_requests_total counter\n\
             core_requests_total{{nf=\"{nf}\"}} {total}\n\
             # HELP core_requests_failed_total Failed SBI requests.\n\
             # TYPE core_requests_failed_total counter\n\
             core_requests_failed_total{{nf=\"{nf}\"}} {failed}\n",
            nf = nf_name,
            total = self.requests_total.load(Ordering::Relaxed),
            failed = self.requests_failed.load(Ordering::Relaxed),
        )
    }
}

/// Mounts `/health`, `/ready`, `/metrics` onto a router. `/metrics` is meant
/// to be served on the separate administrative port named in §6.1; callers
/// that want that separation run this router on its own listener.
pub fn router(nf_name: &'static str, metrics: Arc<Metrics>) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
        .route(
            "/ready",
            get({
                let metrics = metrics.clone();
                move || {
                    let metrics = metrics.clone();
                    async move {
                        let ready = metrics.ready.load(Ordering::SeqCst);
                        let status = if ready { "ready" } else { "not_ready" };
                        Json(json!({"status": status}))
                    }
                }
            }),
        )
        .route(
            "/metrics",
            get(move || {
                let metrics = metrics.clone();
                async move { metrics.render_prometheus(nf_name) }
            }),
        )
}
