//! `Nudm_UEAuthentication`, `Nudm_SDM`, `Nudm_UECM` HTTP handlers (§6.1).

use crate::auth;
use crate::client::UdrClient;
use crate::error::UdmError;
use crate::model::{AuthEvent, AuthVector, GenerateAuthDataRequest, UecmRegistration};
use crate::subscriber_data;
use crate::uecm::UecmStore;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use common::error::ApiError;
use common::health::Metrics;
use common::ids::{Dnn, Supi};
use common::trace::TraceContext;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub udr: Arc<UdrClient>,
    pub uecm: Arc<UecmStore>,
    pub metrics: Arc<Metrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/nudm-ueau/v1/supi/:supi/security-information/generate-auth-data",
            post(generate_auth_data),
        )
        .route("/nudm-ueau/v1/supi/:supi/auth-events", post(auth_event))
        .route("/nudm-sdm/v1/supi/:supi/am-data", get(am_data))
        .route("/nudm-sdm/v1/supi/:supi/sm-data", get(sm_data))
        .route(
            "/nudm-uecm/v1/supi/:supi/registrations/amf-3gpp-access",
            put(register_amf).get(get_amf_registration).delete(deregister_amf),
        )
        .with_state(state)
}

async fn generate_auth_data(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Json(req): Json<GenerateAuthDataRequest>,
) -> Result<Json<AuthVector>, ApiError> {
    let trace = TraceContext::new_root();
    let vector = auth::generate_auth_data(
        &state.udr,
        &Supi::new(supi),
        &req.serving_network_name,
        req.resync_info,
        &trace,
    )
    .await
    .map_err(|e: UdmError| {
        state.metrics.record_request(true);
        ApiError::from(e)
    })?;
    state.metrics.record_request(false);
    Ok(Json(vector))
}

async fn auth_event(State(state): State<AppState>, Json(event): Json<AuthEvent>) -> StatusCode {
    auth::confirm_auth(&event);
    state.metrics.record_request(false);
    StatusCode::NO_CONTENT
}

async fn am_data(
    State(state): State<AppState>,
    Path(supi): Path<String>,
) -> Result<Json<crate::model::AmData>, ApiError> {
    let trace = TraceContext::new_root();
    let data = subscriber_data::get_am_data(&state.udr, &Supi::new(supi), &trace)
        .await
        .map_err(|e: UdmError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(Json(data))
}

async fn sm_data(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<crate::model::SmDataEntry>>, ApiError> {
    let trace = TraceContext::new_root();
    let dnn = params.get("dnn").map(|d| Dnn::from(d.as_str()));
    let data = subscriber_data::get_sm_data(&state.udr, &Supi::new(supi), dnn.as_ref(), &trace)
        .await
        .map_err(|e: UdmError| {
            state.metrics.record_request(true);
            ApiError::from(e)
        })?;
    state.metrics.record_request(false);
    Ok(Json(data))
}

async fn register_amf(
    State(state): State<AppState>,
    Path(supi): Path<String>,
    Json(registration): Json<UecmRegistration>,
) -> StatusCode {
    let trace = TraceContext::new_root();
    state
        .uecm
        .register_amf(Supi::new(supi), registration, &trace)
        .await;
    state.metrics.record_request(false);
    StatusCode::NO_CONTENT
}

async fn get_amf_registration(
    State(state): State<AppState>,
    Path(supi): Path<String>,
) -> Result<Json<UecmRegistration>, ApiError> {
    state.metrics.record_request(false);
    state
        .uecm
        .get(&Supi::new(supi.clone()))
        .map(Json)
        .ok_or_else(|| ApiError::from(UdmError::SubscriberNotFound(supi)))
}

async fn deregister_amf(State(state): State<AppState>, Path(supi): Path<String>) -> StatusCode {
    state.uecm.deregister(&Supi::new(supi));
    state.metrics.record_request(false);
    StatusCode::NO_CONTENT
}
