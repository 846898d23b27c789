//! `Nnrf_NFManagement`/`Nnrf_NFDiscovery` HTTP handlers (§6.1).

use crate::error::NrfError;
use crate::store::{DiscoverQuery, Store, UpsertOutcome};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, put};
use axum::{Json, Router};
use common::error::ApiError;
use common::health::Metrics;
use common::ids::{NfInstanceId, NfType};
use common::registry::{NfProfile, RegisterResponse};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub metrics: Arc<Metrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/nnrf-nfm/v1/nf-instances/:nf_instance_id", put(upsert))
        .route("/nnrf-nfm/v1/nf-instances/:nf_instance_id", delete(deregister))
        .route(
            "/nnrf-nfm/v1/nf-instances/:nf_instance_id/heartbeat",
            patch(heartbeat),
        )
        .route("/nnrf-disc/v1/nf-instances", get(discover))
        .with_state(state)
}

async fn upsert(
    State(state): State<AppState>,
    Path(nf_instance_id): Path<String>,
    Json(mut profile): Json<NfProfile>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    profile.nf_instance_id = NfInstanceId(nf_instance_id);
    let (outcome, _) = state.store.register(profile);
    state.metrics.record_request(false);
    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };
    Ok((
        status,
        Json(RegisterResponse {
            heartbeat_timer_secs: state.store.ttl().as_secs(),
        }),
    ))
}

async fn heartbeat(
    State(state): State<AppState>,
    Path(nf_instance_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .heartbeat(&NfInstanceId(nf_instance_id))
        .map_err(|e: NrfError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(StatusCode::NO_CONTENT)
}

async fn deregister(
    State(state): State<AppState>,
    Path(nf_instance_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .deregister(&NfInstanceId(nf_instance_id))
        .map_err(|e: NrfError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(StatusCode::NO_CONTENT)
}

async fn discover(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<NfProfile>> {
    let nf_type = params.get("target-nf-type").and_then(|s| parse_nf_type(s));
    let query = DiscoverQuery {
        nf_type,
        plmn_mcc: params.get("plmn-mcc").cloned(),
        plmn_mnc: params.get("plmn-mnc").cloned(),
        snssai_sst: params.get("snssai-sst").and_then(|s| s.parse().ok()),
        snssai_sd: params
            .get("snssai-sd")
            .and_then(|s| u32::from_str_radix(s, 16).ok()),
        dnn: params.get("dnn").cloned(),
    };
    state.metrics.record_request(false);
    Json(state.store.discover(&query))
}

fn parse_nf_type(s: &str) -> Option<NfType> {
    match s.to_uppercase().as_str() {
        "NRF" => Some(NfType::Nrf),
        "UDR" => Some(NfType::Udr),
        "UDM" => Some(NfType::Udm),
        "AUSF" => Some(NfType::Ausf),
        "AMF" => Some(NfType::Amf),
        "SMF" => Some(NfType::Smf),
        "UPF" => Some(NfType::Upf),
        _ => None,
    }
}
