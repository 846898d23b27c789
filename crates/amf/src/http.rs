//! `Namf_Authentication`, `Namf_Communication` HTTP handlers (§4.5, §6.1).
//! `CreatePDUSession`/`ReleasePDUSession` are exposed under
//! `namf-comm` too: the RAN/UE facade is this core's only caller of them
//! (§1, §9), and the spec names no separate public SBI service for them.

use crate::clients::ausf::AusfClient;
use crate::clients::smf::SmfClient;
use crate::clients::udm::UdmClient;
use crate::config::AmfIdentity;
use crate::error::AmfError;
use crate::model::{
    AuthenticateResponse, ConfirmAuthenticateRequest, ConfirmAuthenticateResponse, RegisterRequest,
    RegisterResponse, UeContextView,
};
use crate::procedures::{self, CreatePduSessionArgs};
use crate::store::UeStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use common::error::ApiError;
use common::health::Metrics;
use common::ids::{Dnn, PduSessionId, Supi};
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ausf: Arc<AusfClient>,
    pub udm: Arc<UdmClient>,
    pub smf: Arc<SmfClient>,
    pub store: Arc<UeStore>,
    pub identity: Arc<AmfIdentity>,
    pub metrics: Arc<Metrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/namf-auth/v1/authenticate", post(authenticate))
        .route(
            "/namf-auth/v1/authenticate/:auth_ctx_id/confirm",
            put(confirm_authenticate),
        )
        .route("/namf-reg/v1/register", post(register))
        .route("/namf-reg/v1/deregister", post(deregister))
        .route("/namf-comm/v1/ue-contexts/:supi", get(get_ue_context))
        .route(
            "/namf-comm/v1/ue-contexts/:supi/pdu-sessions",
            post(create_pdu_session),
        )
        .route(
            "/namf-comm/v1/ue-contexts/:supi/pdu-sessions/:pdu_session_id",
            delete(release_pdu_session),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct AuthenticateRequest {
    supi: String,
}

async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let supi = Supi::new(req.supi);
    let response = procedures::authenticate(
        &state.store,
        &state.ausf,
        &supi,
        &state.identity.serving_network_name,
        &trace,
    )
    .await
    .map_err(|e: AmfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;
    state.metrics.record_request(false);
    Ok(Json(response))
}

async fn confirm_authenticate(
    State(state): State<AppState>,
    Path(auth_ctx_id): Path<String>,
    Json(req): Json<ConfirmAuthenticateRequest>,
) -> Result<Json<ConfirmAuthenticateResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let (_, success) = procedures::confirm_authenticate(
        &state.store,
        &state.ausf,
        &auth_ctx_id,
        &req.res_star,
        &trace,
    )
    .await
    .map_err(|e: AmfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;
    state.metrics.record_request(false);
    Ok(Json(ConfirmAuthenticateResponse {
        result: if success {
            "AUTHENTICATION_SUCCESS"
        } else {
            "AUTHENTICATION_FAILURE"
        },
    }))
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let supi = Supi::new(req.supi);
    let (guami, tai, allowed_nssai, t3512) = procedures::register(
        &state.store,
        &state.udm,
        &state.identity,
        &supi,
        req.requested_nssai,
        &trace,
    )
    .await
    .map_err(|e: AmfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;
    state.metrics.record_request(false);
    Ok(Json(RegisterResponse {
        result: "SUCCESS",
        guami,
        tai,
        allowed_nssai,
        t3512,
    }))
}

#[derive(Debug, Deserialize)]
struct DeregisterRequest {
    supi: String,
    #[allow(dead_code)]
    cause: Option<String>,
}

async fn deregister(State(state): State<AppState>, Json(req): Json<DeregisterRequest>) -> Result<StatusCode, ApiError> {
    let trace = TraceContext::new_root();
    let supi = Supi::new(req.supi);
    procedures::deregister(&state.store, &state.udm, &state.smf, &supi, &trace)
        .await
        .map_err(|e: AmfError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(StatusCode::NO_CONTENT)
}

async fn get_ue_context(
    State(state): State<AppState>,
    Path(supi): Path<String>,
) -> Result<Json<UeContextView>, ApiError> {
    let ctx_lock = state
        .store
        .get(&Supi::new(supi.clone()))
        .ok_or_else(|| ApiError::from(AmfError::NoContext(supi)))?;
    let ctx = ctx_lock.lock().await;
    state.metrics.record_request(false);
    Ok(Json(UeContextView {
        supi: ctx.supi.to_string(),
        registration_state: ctx.registration_state,
        connection_state: ctx.connection_state,
        allowed_nssai: ctx.allowed_nssai.clone(),
        pdu_session_ids: ctx.pdu_sessions.keys().map(|id| id.0).collect(),
    }))
}

#[derive(Debug, Deserialize)]
struct CreatePduSessionRequest {
    #[serde(rename = "pduSessionId")]
    pdu_session_id: u8,
    dnn: String,
    #[serde(rename = "sNssai")]
    snssai: common::ids::Snssai,
    #[serde(rename = "pduSessionType", default = "default_pdu_session_type")]
    pdu_session_type: String,
    #[serde(rename = "gnbN3Address")]
    gnb_n3_address: String,
    #[serde(rename = "gnbTeidUplink")]
    gnb_teid_uplink: u32,
}

fn default_pdu_session_type() -> String {
    "IPV4".to_string()
}

#[derive(Debug, Serialize)]
struct CreatePduSessionResponse {
    result: String,
    #[serde(rename = "ueIpv4Address", skip_serializing_if = "Option::is_none")]
    ue_ipv4_address: Option<String>,
    #[serde(rename = "ueIpv6Address", skip_serializing_if = "Option::is_none")]
    ue_ipv6_address: Option<String>,
    #[serde(rename = "upfN3Address")]
    upf_n3_address: String,
    #[serde(rename = "upfTeidDownlink")]
    upf_teid_downlink: u32,
}

async fn create_pdu_session(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Json(req): Json<CreatePduSessionRequest>,
) -> Result<Json<CreatePduSessionResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let pdu_session_id = PduSessionId::new(req.pdu_session_id)
        .ok_or_else(|| ApiError::from(AmfError::PduSessionNotFound(req.pdu_session_id)))?;

    let response = procedures::create_pdu_session(
        &state.store,
        &state.smf,
        &Supi::new(supi),
        CreatePduSessionArgs {
            pdu_session_id,
            dnn: Dnn::from(req.dnn.as_str()),
            snssai: req.snssai,
            pdu_session_type: req.pdu_session_type,
            gnb_n3_address: req.gnb_n3_address,
            gnb_teid_uplink: req.gnb_teid_uplink,
        },
        &trace,
    )
    .await
    .map_err(|e: AmfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;

    state.metrics.record_request(false);
    Ok(Json(CreatePduSessionResponse {
        result: response.result,
        ue_ipv4_address: response.ue_ipv4_address,
        ue_ipv6_address: response.ue_ipv6_address,
        upf_n3_address: response.upf_n3_address,
        upf_teid_downlink: response.upf_teid_downlink,
    }))
}

async fn release_pdu_session(
    State(state): State<AppState>,
    Path((supi, pdu_session_id)): Path<(String, u8)>,
) -> Result<StatusCode, ApiError> {
    let trace = TraceContext::new_root();
    let pdu_session_id = PduSessionId::new(pdu_session_id)
        .ok_or_else(|| ApiError::from(AmfError::PduSessionNotFound(pdu_session_id)))?;
    procedures::release_pdu_session(&state.store, &state.smf, &Supi::new(supi), pdu_session_id, &trace)
        .await
        .map_err(|e: AmfError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(StatusCode::NO_CONTENT)
}
