//! The UE-facing operations of §4.5: Authenticate, ConfirmAuthenticate,
//! Register, Deregister, CreatePDUSession, ReleasePDUSession.

use crate::clients::ausf::AusfClient;
use crate::clients::smf::{CreateSmContextRequest, CreateSmContextResponse, SmfClient};
use crate::clients::udm::{RatType, UdmClient, UecmRegistration};
use crate::config::AmfIdentity;
use crate::error::AmfError;
use crate::model::{
    AuthenticateResponse, PduSessionRecord, PendingAuth, RegistrationState, SecurityContext,
    UeContext,
};
use crate::store::UeStore;
use common::ids::{Dnn, PduSessionId, Snssai, Supi};
use common::trace::TraceContext;
use std::time::{Duration, Instant};

/// §4.5 "requires prior successful authentication within a bounded window".
const AUTH_WINDOW: Duration = Duration::from_secs(60);

pub async fn authenticate(
    store: &UeStore,
    ausf: &AusfClient,
    supi: &Supi,
    serving_network_name: &str,
    trace: &TraceContext,
) -> Result<AuthenticateResponse, AmfError> {
    let ctx_lock = store.get_or_create(supi);
    let mut ctx = ctx_lock.lock().await;

    let response = ausf.initiate(supi, serving_network_name, trace).await?;
    ctx.pending_auth = Some(PendingAuth {
        auth_ctx_id: response.auth_ctx_id.clone(),
    });
    store.record_pending(response.auth_ctx_id.clone(), supi.clone());

    Ok(AuthenticateResponse {
        auth_ctx_id: response.auth_ctx_id,
        auth_type: response.auth_type,
        rand: response.auth_data.rand,
        autn: response.auth_data.autn,
    })
}

pub async fn confirm_authenticate(
    store: &UeStore,
    ausf: &AusfClient,
    auth_ctx_id: &str,
    res_star: &str,
    trace: &TraceContext,
) -> Result<(Supi, bool), AmfError> {
    let supi = store
        .resolve_pending(auth_ctx_id)
        .ok_or_else(|| AmfError::NoContext(auth_ctx_id.to_string()))?;
    let ctx_lock = store
        .get(&supi)
        .ok_or_else(|| AmfError::NoContext(supi.to_string()))?;
    let mut ctx = ctx_lock.lock().await;

    let pending = ctx
        .pending_auth
        .clone()
        .ok_or_else(|| AmfError::NotAuthenticated(supi.to_string()))?;
    if pending.auth_ctx_id != auth_ctx_id {
        return Err(AmfError::AuthContextMismatch {
            expected: pending.auth_ctx_id,
            actual: auth_ctx_id.to_string(),
        });
    }

    let response = ausf.confirm(auth_ctx_id, res_star, trace).await?;
    ctx.pending_auth = None;
    store.clear_pending(auth_ctx_id);

    if response.auth_result == "AUTHENTICATION_SUCCESS" {
        let kseaf_hex = response.kseaf.unwrap_or_default();
        let kseaf = hex_decode_32(&kseaf_hex);
        let kamf = milenage::kdf::derive_kamf(&kseaf, &supi, &[0x00, 0x00]);
        ctx.security_context = Some(SecurityContext { kseaf, kamf });
        ctx.last_authenticated_at = Some(Instant::now());
        Ok((supi, true))
    } else {
        ctx.security_context = None;
        Ok((supi, false))
    }
}

pub async fn register(
    store: &UeStore,
    udm: &UdmClient,
    identity: &AmfIdentity,
    supi: &Supi,
    requested_nssai: Vec<Snssai>,
    trace: &TraceContext,
) -> Result<(common::ids::Guami, common::ids::Tai, Vec<Snssai>, u32), AmfError> {
    let ctx_lock = store
        .get(supi)
        .ok_or_else(|| AmfError::NoContext(supi.to_string()))?;
    let mut ctx = ctx_lock.lock().await;

    let authenticated_recently = ctx
        .last_authenticated_at
        .is_some_and(|t| t.elapsed() <= AUTH_WINDOW);
    if !authenticated_recently {
        return Err(AmfError::NotAuthenticated(supi.to_string()));
    }

    let am_data = udm.get_am_data(supi, trace).await?;
    let allowed_nssai: Vec<Snssai> = requested_nssai
        .into_iter()
        .filter(|s| am_data.subscribed_nssai.contains(s))
        .collect();
    if allowed_nssai.is_empty() {
        return Err(AmfError::SubscriptionNotAllowed);
    }

    udm.register_amf(
        supi,
        UecmRegistration {
            amf_instance_id: identity.instance_id.clone(),
            guami: identity.guami.clone(),
            rat_type: RatType::Nr,
        },
        trace,
    )
    .await?;

    ctx.registration_state = RegistrationState::Registered;
    ctx.connection_state = crate::model::ConnectionState::Connected;
    ctx.registered_at = Some(Instant::now());
    ctx.guami = Some(identity.guami.clone());
    ctx.tai = Some(identity.tai.clone());
    ctx.allowed_nssai = allowed_nssai.clone();

    Ok((identity.guami.clone(), identity.tai.clone(), allowed_nssai, identity.t3512_secs))
}

pub async fn deregister(
    store: &UeStore,
    udm: &UdmClient,
    smf: &SmfClient,
    supi: &Supi,
    trace: &TraceContext,
) -> Result<(), AmfError> {
    let ctx_lock = store
        .get(supi)
        .ok_or_else(|| AmfError::NoContext(supi.to_string()))?;
    let mut ctx = ctx_lock.lock().await;

    for (_, session) in ctx.pdu_sessions.drain() {
        if let Err(err) = smf.release_sm_context(&session.sm_context_ref, "DEREGISTER", trace).await {
            tracing::warn!(error = %err, sm_context_ref = %session.sm_context_ref, "smf release failed during deregister, continuing");
        }
    }

    let _ = udm.deregister_amf(supi, trace).await;
    ctx.registration_state = RegistrationState::Deregistered;
    ctx.connection_state = crate::model::ConnectionState::Idle;
    ctx.security_context = None;
    drop(ctx);
    store.remove(supi);
    Ok(())
}

pub struct CreatePduSessionArgs {
    pub pdu_session_id: PduSessionId,
    pub dnn: Dnn,
    pub snssai: Snssai,
    pub pdu_session_type: String,
    pub gnb_n3_address: String,
    pub gnb_teid_uplink: u32,
}

pub async fn create_pdu_session(
    store: &UeStore,
    smf: &SmfClient,
    supi: &Supi,
    args: CreatePduSessionArgs,
    trace: &TraceContext,
) -> Result<CreateSmContextResponse, AmfError> {
    let ctx_lock = store
        .get(supi)
        .ok_or_else(|| AmfError::NoContext(supi.to_string()))?;
    let mut ctx = ctx_lock.lock().await;

    if ctx.registration_state != RegistrationState::Registered {
        return Err(AmfError::InvalidState(supi.to_string()));
    }

    let response = smf
        .create_sm_context(
            CreateSmContextRequest {
                supi: supi.to_string(),
                pdu_session_id: args.pdu_session_id.0,
                dnn: args.dnn.0.clone(),
                snssai: args.snssai,
                pdu_session_type: args.pdu_session_type,
                gnb_n3_address: args.gnb_n3_address,
                gnb_teid_uplink: args.gnb_teid_uplink,
            },
            trace,
        )
        .await?;

    if response.result == "SUCCESS" {
        ctx.pdu_sessions.insert(
            args.pdu_session_id,
            PduSessionRecord {
                dnn: args.dnn,
                snssai: args.snssai,
                sm_context_ref: response.sm_context_ref.clone(),
            },
        );
    }

    Ok(response)
}

pub async fn release_pdu_session(
    store: &UeStore,
    smf: &SmfClient,
    supi: &Supi,
    pdu_session_id: PduSessionId,
    trace: &TraceContext,
) -> Result<(), AmfError> {
    let ctx_lock = store
        .get(supi)
        .ok_or_else(|| AmfError::NoContext(supi.to_string()))?;
    let mut ctx = ctx_lock.lock().await;

    let session = ctx
        .pdu_sessions
        .remove(&pdu_session_id)
        .ok_or(AmfError::PduSessionNotFound(pdu_session_id.0))?;

    smf.release_sm_context(&session.sm_context_ref, "UE_REQUESTED", trace)
        .await?;
    Ok(())
}

fn hex_decode_32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..32.min(s.len() / 2) {
        out[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap_or(0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decode_32_round_trips_all_ff() {
        let hex = "ff".repeat(32);
        let decoded = hex_decode_32(&hex);
        assert_eq!(decoded, [0xffu8; 32]);
    }
}
