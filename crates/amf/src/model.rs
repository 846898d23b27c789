//! UE-facing wire types and the per-SUPI context the AMF owns (§4.5).

use common::ids::{Dnn, Guami, PduSessionId, Snssai, Supi, Tai};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    Deregistered,
    Registered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Idle,
    Connected,
}

/// A pending 5G-AKA challenge this UE is mid-way through, before
/// ConfirmAuthenticate resolves it.
#[derive(Debug, Clone)]
pub struct PendingAuth {
    pub auth_ctx_id: String,
}

/// The security context established on successful confirmation (§4.5, §5
/// "Shared resource policy": KSEAF never reaches the RAN facade).
#[derive(Debug, Clone)]
pub struct SecurityContext {
    pub kseaf: [u8; 32],
    pub kamf: [u8; 32],
}

/// A UE's state as owned by this AMF instance. All mutation is serialised
/// per-SUPI (§5).
#[derive(Debug, Clone)]
pub struct UeContext {
    pub supi: Supi,
    pub registration_state: RegistrationState,
    pub connection_state: ConnectionState,
    pub pending_auth: Option<PendingAuth>,
    pub security_context: Option<SecurityContext>,
    pub registered_at: Option<Instant>,
    pub last_authenticated_at: Option<Instant>,
    pub guami: Option<Guami>,
    pub tai: Option<Tai>,
    pub allowed_nssai: Vec<Snssai>,
    pub pdu_sessions: HashMap<PduSessionId, PduSessionRecord>,
}

impl UeContext {
    pub fn new(supi: Supi) -> Self {
        Self {
            supi,
            registration_state: RegistrationState::Deregistered,
            connection_state: ConnectionState::Idle,
            pending_auth: None,
            security_context: None,
            registered_at: None,
            last_authenticated_at: None,
            guami: None,
            tai: None,
            allowed_nssai: Vec::new(),
            pdu_sessions: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PduSessionRecord {
    pub dnn: Dnn,
    pub snssai: Snssai,
    pub sm_context_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    #[serde(rename = "authCtxId")]
    pub auth_ctx_id: String,
    #[serde(rename = "authType")]
    pub auth_type: String,
    pub rand: String,
    pub autn: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmAuthenticateRequest {
    #[serde(rename = "resStar")]
    pub res_star: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmAuthenticateResponse {
    pub result: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub supi: String,
    #[serde(rename = "registrationType")]
    pub registration_type: String,
    #[serde(rename = "requestedNssai")]
    pub requested_nssai: Vec<Snssai>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub result: &'static str,
    pub guami: Guami,
    pub tai: Tai,
    #[serde(rename = "allowedNssai")]
    pub allowed_nssai: Vec<Snssai>,
    pub t3512: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UeContextView {
    pub supi: String,
    #[serde(rename = "registrationState")]
    pub registration_state: RegistrationState,
    #[serde(rename = "connectionState")]
    pub connection_state: ConnectionState,
    #[serde(rename = "allowedNssai")]
    pub allowed_nssai: Vec<Snssai>,
    #[serde(rename = "pduSessionIds")]
    pub pdu_session_ids: Vec<u8>,
}
