//! `Nudr_DataRepository` HTTP handlers (§6.1).

use crate::error::UdrError;
use crate::model::{AuthCredential, SmSubscription, Subscriber};
use crate::store::Store;
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use common::error::ApiError;
use common::health::Metrics;
use common::ids::{Dnn, Supi};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub metrics: Arc<Metrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/nudr-dr/v1/subscription-data/:supi/subscriber-data", get(get_subscriber))
        .route(
            "/nudr-dr/v1/subscription-data/:supi/authentication-data/authentication-subscription",
            get(get_auth_subscription),
        )
        .route(
            "/nudr-dr/v1/subscription-data/:supi/authentication-data/authentication-subscription/sqn",
            patch(increment_sqn),
        )
        .route(
            "/nudr-dr/v1/subscription-data/:supi/authentication-data/authentication-subscription/sqn/resync",
            patch(resync_sqn),
        )
        .route(
            "/nudr-dr/v1/subscription-data/:supi/provisioned-data/sm-data",
            get(get_sm_data),
        )
        .with_state(state)
}

async fn get_subscriber(
    State(state): State<AppState>,
    Path(supi): Path<String>,
) -> Result<Json<Subscriber>, ApiError> {
    state.metrics.record_request(false);
    Ok(Json(state.store.get_subscriber(&Supi::new(supi))?))
}

async fn get_auth_subscription(
    State(state): State<AppState>,
    Path(supi): Path<String>,
) -> Result<Json<AuthCredential>, ApiError> {
    state.metrics.record_request(false);
    Ok(Json(state.store.get_auth_subscription(&Supi::new(supi))?))
}

#[derive(Debug, Deserialize)]
pub struct SqnIncrementRequest {
    #[serde(default = "default_delta")]
    pub delta: u64,
}

fn default_delta() -> u64 {
    1
}

#[derive(Debug, serde::Serialize)]
pub struct SqnIncrementResponse {
    pub sqn: u64,
}

async fn increment_sqn(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Json(req): Json<SqnIncrementRequest>,
) -> Result<Json<SqnIncrementResponse>, ApiError> {
    let sqn = state
        .store
        .increment_sqn(&Supi::new(supi), req.delta)
        .map_err(|e: UdrError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(Json(SqnIncrementResponse { sqn }))
}

#[derive(Debug, Deserialize)]
pub struct SqnResyncRequest {
    pub sqn_ms: u64,
}

async fn resync_sqn(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Json(req): Json<SqnResyncRequest>,
) -> Result<Json<SqnIncrementResponse>, ApiError> {
    let sqn = state
        .store
        .resync_sqn(&Supi::new(supi), req.sqn_ms)
        .map_err(|e: UdrError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(Json(SqnIncrementResponse { sqn }))
}

async fn get_sm_data(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<SmSubscription>>, ApiError> {
    let dnn = params.get("dnn").map(|d| Dnn::from(d.as_str()));
    state.metrics.record_request(false);
    Ok(Json(
        state.store.get_sm_subscriptions(&Supi::new(supi), dnn.as_ref())?,
    ))
}
