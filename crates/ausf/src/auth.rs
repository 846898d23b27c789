//! `Nausf_UEAuthentication` procedures (§4.4).

use crate::client::{AuthEvent, ResyncInfo, UdmClient};
use crate::error::AusfError;
use crate::store::{AuthContext, AuthState, ConfirmOutcome, ContextStore, MAX_CONTEXT_TTL};
use common::ids::{AuthCtxId, Supi};
use common::trace::TraceContext;
use std::time::Instant;

fn hex_decode_n<const N: usize>(s: &str) -> [u8; N] {
    let mut out = [0u8; N];
    for i in 0..N {
        out[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap_or(0);
    }
    out
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub struct Challenge {
    pub auth_ctx_id: AuthCtxId,
    pub auth_type: &'static str,
    pub rand: String,
    pub autn: String,
    pub hxres_star: String,
}

/// `UEAuthenticationRequest` (§4.4). SUCI de-concealment is treated as a
/// thin pass-through in this core (DESIGN.md's Open Question decision):
/// the caller already resolves SUCI to SUPI before reaching AUSF.
pub async fn initiate(
    udm: &UdmClient,
    supi: &Supi,
    serving_network_name: &str,
    context_store: &ContextStore,
    trace: &TraceContext,
) -> Result<Challenge, AusfError> {
    let vector = udm
        .generate_auth_data(supi, serving_network_name, None, trace)
        .await?;
    build_context(udm, supi, serving_network_name, vector, context_store).await
}

/// Re-initiates after a UE-rejected AUTN, carrying the UE's `(RAND, AUTS)`
/// forward to UDM for resynchronisation (SPEC_FULL.md §3 supplement).
pub async fn initiate_with_resync(
    udm: &UdmClient,
    supi: &Supi,
    serving_network_name: &str,
    rand_hex: String,
    auts_hex: String,
    context_store: &ContextStore,
    trace: &TraceContext,
) -> Result<Challenge, AusfError> {
    let vector = udm
        .generate_auth_data(
            supi,
            serving_network_name,
            Some(ResyncInfo {
                rand: rand_hex,
                auts: auts_hex,
            }),
            trace,
        )
        .await?;
    build_context(udm, supi, serving_network_name, vector, context_store).await
}

async fn build_context(
    _udm: &UdmClient,
    supi: &Supi,
    serving_network_name: &str,
    vector: crate::client::AuthVector,
    context_store: &ContextStore,
) -> Result<Challenge, AusfError> {
    let rand: [u8; 16] = hex_decode_n(&vector.rand);
    let autn: [u8; 16] = hex_decode_n(&vector.autn);
    let xres_star: [u8; 16] = hex_decode_n(&vector.xres_star);
    let kausf: [u8; 32] = hex_decode_n(&vector.kausf);

    let hxres_star = milenage::kdf::derive_hxres_star(&rand, &xres_star);
    let kseaf = milenage::kdf::derive_kseaf(&kausf, serving_network_name);

    let auth_ctx_id = AuthCtxId::new_random();
    context_store.insert(AuthContext {
        auth_ctx_id: auth_ctx_id.clone(),
        supi: supi.clone(),
        serving_network_name: serving_network_name.to_string(),
        rand,
        autn,
        xres_star,
        hxres_star,
        kseaf,
        state: AuthState::Pending,
        expires_at: Instant::now() + MAX_CONTEXT_TTL,
    });

    Ok(Challenge {
        auth_ctx_id,
        auth_type: "5G_AKA",
        rand: vector.rand,
        autn: vector.autn,
        hxres_star: hex_encode(&hxres_star),
    })
}

pub struct ConfirmationResult {
    pub success: bool,
    pub supi: Supi,
    pub kseaf: Option<String>,
}

/// `5gAkaConfirmation` (§4.4): verifies the UE's response against the
/// stored `HXRES*` and notifies UDM either way.
///
/// The SBI challenge response only ever carries `hxres` to the caller
/// (§6.1) — `XRES*` never leaves AUSF — so `resStar` here is the UE's
/// echo of that same `hxres` value, not a fresh `RES*` to re-derive
/// `HXRES*` from. Compare it directly against the stored `HXRES*`.
pub async fn confirm(
    udm: &UdmClient,
    context_store: &ContextStore,
    auth_ctx_id: &AuthCtxId,
    res_star_hex: &str,
    trace: &TraceContext,
) -> Result<ConfirmationResult, AusfError> {
    let res_star: [u8; 16] = hex_decode_n(res_star_hex);
    context_store
        .peek(auth_ctx_id)
        .ok_or_else(|| AusfError::ContextNotFound(auth_ctx_id.to_string()))?;

    let (outcome, context) = context_store.confirm(auth_ctx_id, &res_star)?;
    let success = outcome == ConfirmOutcome::Success;

    udm.record_auth_event(
        AuthEvent {
            supi: context.supi.to_string(),
            success,
            auth_ctx_id: auth_ctx_id.to_string(),
        },
        trace,
    )
    .await;

    Ok(ConfirmationResult {
        success,
        supi: context.supi,
        kseaf: success.then(|| hex_encode(&context.kseaf)),
    })
}
