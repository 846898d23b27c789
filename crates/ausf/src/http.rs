//! `Nausf_UEAuthentication` HTTP handlers (§4.4, §6.1).

use crate::auth;
use crate::client::UdmClient;
use crate::error::AusfError;
use crate::store::ContextStore;
use axum::extract::{Path, State};
use axum::routing::{post, put};
use axum::{Json, Router};
use common::error::ApiError;
use common::health::Metrics;
use common::ids::{AuthCtxId, Supi};
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub udm: Arc<UdmClient>,
    pub contexts: Arc<ContextStore>,
    pub metrics: Arc<Metrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/nausf-auth/v1/ue-authentications", post(initiate))
        .route(
            "/nausf-auth/v1/ue-authentications/:auth_ctx_id/5g-aka-confirmation",
            put(confirm),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ResyncInfoWire {
    rand: String,
    auts: String,
}

#[derive(Debug, Deserialize)]
struct UeAuthenticationRequest {
    #[serde(rename = "supiOrSuci")]
    supi_or_suci: String,
    #[serde(rename = "servingNetworkName")]
    serving_network_name: String,
    #[serde(rename = "resyncInfo", default)]
    resync_info: Option<ResyncInfoWire>,
}

#[derive(Debug, Serialize)]
struct FiveGAuthData {
    rand: String,
    autn: String,
    #[serde(rename = "hxresStar")]
    hxres_star: String,
}

#[derive(Debug, Serialize)]
struct UeAuthenticationResponse {
    #[serde(rename = "authType")]
    auth_type: &'static str,
    #[serde(rename = "5gAuthData")]
    auth_data: FiveGAuthData,
    #[serde(rename = "authCtxId")]
    auth_ctx_id: String,
}

async fn initiate(
    State(state): State<AppState>,
    Json(req): Json<UeAuthenticationRequest>,
) -> Result<Json<UeAuthenticationResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let supi = Supi::new(req.supi_or_suci);

    let challenge = match req.resync_info {
        Some(resync) => {
            auth::initiate_with_resync(
                &state.udm,
                &supi,
                &req.serving_network_name,
                resync.rand,
                resync.auts,
                &state.contexts,
                &trace,
            )
            .await
        }
        None => {
            auth::initiate(
                &state.udm,
                &supi,
                &req.serving_network_name,
                &state.contexts,
                &trace,
            )
            .await
        }
    }
    .map_err(|e: AusfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;

    state.metrics.record_request(false);
    Ok(Json(UeAuthenticationResponse {
        auth_type: challenge.auth_type,
        auth_data: FiveGAuthData {
            rand: challenge.rand,
            autn: challenge.autn,
            hxres_star: challenge.hxres_star,
        },
        auth_ctx_id: challenge.auth_ctx_id.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
struct ConfirmationRequest {
    #[serde(rename = "resStar")]
    res_star: String,
}

#[derive(Debug, Serialize)]
struct ConfirmationResponse {
    #[serde(rename = "authResult")]
    auth_result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    supi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kseaf: Option<String>,
}

async fn confirm(
    State(state): State<AppState>,
    Path(auth_ctx_id): Path<String>,
    Json(req): Json<ConfirmationRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let trace = TraceContext::new_root();
    let result = auth::confirm(
        &state.udm,
        &state.contexts,
        &AuthCtxId(auth_ctx_id),
        &req.res_star,
        &trace,
    )
    .await
    .map_err(|e: AusfError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;

    state.metrics.record_request(false);
    Ok(Json(ConfirmationResponse {
        auth_result: if result.success {
            "AUTHENTICATION_SUCCESS"
        } else {
            "AUTHENTICATION_FAILURE"
        },
        supi: result.success.then(|| result.supi.to_string()),
        kseaf: result.kseaf,
    }))
}
