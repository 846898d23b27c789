//! `Nsmf_PDUSession` HTTP handlers (§4.6, §6.1): the AMF is this core's only
//! caller, per the contract its own `clients::smf` module encodes.

use crate::clients::udm::UdmClient;
use crate::error::SmfError;
use crate::ipam::IpamRegistry;
use crate::model::parse_sm_context_ref;
use crate::pfcp_client::PfcpClient;
use crate::procedures::{self, CreateSmContextArgs};
use crate::store::SessionStore;
use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use common::error::ApiError;
use common::health::Metrics;
use common::ids::{Dnn, PduSessionId, Snssai, Supi};
use common::registry::RegistryClient;
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SessionStore>,
    pub udm: Arc<UdmClient>,
    pub registry: Arc<RegistryClient>,
    pub pfcp: Arc<PfcpClient>,
    pub ipam: Arc<IpamRegistry>,
    pub metrics: Arc<Metrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/nsmf-pdusession/v1/sm-contexts", post(create_sm_context))
        .route(
            "/nsmf-pdusession/v1/sm-contexts/:sm_context_ref/release",
            post(release_sm_context),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct CreateSmContextRequest {
    supi: String,
    #[serde(rename = "pduSessionId")]
    pdu_session_id: u8,
    dnn: String,
    #[serde(rename = "sNssai")]
    snssai: Snssai,
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
struct SessionAmbr {
    uplink: String,
    downlink: String,
}

#[derive(Debug, Serialize)]
struct QosFlow {
    qfi: u8,
    #[serde(rename = "fiveQi")]
    five_qi: u8,
}

#[derive(Debug, Serialize)]
struct CreateSmContextResponse {
    result: String,
    #[serde(rename = "smContextRef")]
    sm_context_ref: String,
    #[serde(rename = "ueIpv4Address", skip_serializing_if = "Option::is_none")]
    ue_ipv4_address: Option<String>,
    #[serde(rename = "ueIpv6Address", skip_serializing_if = "Option::is_none")]
    ue_ipv6_address: Option<String>,
    #[serde(rename = "upfN3Address")]
    upf_n3_address: String,
    #[serde(rename = "upfTeidDownlink")]
    upf_teid_downlink: u32,
    #[serde(rename = "sessionAmbr")]
    session_ambr: SessionAmbr,
    #[serde(rename = "qosFlows")]
    qos_flows: Vec<QosFlow>,
}

const DEFAULT_QFI: u8 = 1;

async fn create_sm_context(
    State(state): State<AppState>,
    Json(req): Json<CreateSmContextRequest>,
) -> Result<Json<CreateSmContextResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let supi = Supi::new(req.supi);
    let pdu_session_id = PduSessionId::new(req.pdu_session_id)
        .ok_or_else(|| ApiError::from(SmfError::Validation(format!("invalid pduSessionId {}", req.pdu_session_id))))?;
    let gnb_n3_address: Ipv4Addr = req
        .gnb_n3_address
        .parse()
        .map_err(|_| ApiError::from(SmfError::Validation("malformed gnbN3Address".to_string())))?;

    let outcome = procedures::create_sm_context(
        &state.store,
        &state.udm,
        &state.registry,
        &state.pfcp,
        &state.ipam,
        &supi,
        CreateSmContextArgs {
            pdu_session_id,
            dnn: Dnn::from(req.dnn.as_str()),
            snssai: req.snssai,
            pdu_session_type: req.pdu_session_type,
            gnb_n3_address,
            gnb_teid_uplink: req.gnb_teid_uplink,
        },
        &trace,
    )
    .await
    .map_err(|e: SmfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;

    state.metrics.record_request(false);
    Ok(Json(CreateSmContextResponse {
        result: "SUCCESS".to_string(),
        sm_context_ref: outcome.sm_context_ref,
        ue_ipv4_address: Some(outcome.ue_ipv4_address.to_string()),
        ue_ipv6_address: None,
        upf_n3_address: outcome.upf_n3_address.to_string(),
        upf_teid_downlink: outcome.upf_teid_downlink,
        session_ambr: SessionAmbr {
            uplink: outcome.session_ambr_uplink,
            downlink: outcome.session_ambr_downlink,
        },
        qos_flows: vec![QosFlow {
            qfi: DEFAULT_QFI,
            five_qi: outcome.default_5qi,
        }],
    }))
}

#[derive(Debug, Deserialize)]
struct ReleaseSmContextRequest {
    #[allow(dead_code)]
    cause: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReleaseSmContextResponse {
    result: String,
}

async fn release_sm_context(
    State(state): State<AppState>,
    Path(sm_context_ref): Path<String>,
    Json(_req): Json<ReleaseSmContextRequest>,
) -> Result<Json<ReleaseSmContextResponse>, ApiError> {
    let (supi, pdu_session_id) = parse_sm_context_ref(&sm_context_ref)
        .ok_or_else(|| ApiError::from(SmfError::SessionNotFound(0)))?;

    procedures::release_sm_context(&state.store, &state.pfcp, &state.ipam, &supi, pdu_session_id)
        .await
        .map_err(|e: SmfError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;

    state.metrics.record_request(false);
    Ok(Json(ReleaseSmContextResponse {
        result: "RELEASED".to_string(),
    }))
}

