//! PDU session records and the state machine of §4.6:
//! `CREATING -> ACTIVE -> MODIFYING -> ACTIVE -> RELEASING -> RELEASED`,
//! with `RELEASED` terminal and illegal transitions rejected.

use common::ids::{Dnn, PduSessionId, Snssai, Supi};
use std::net::Ipv4Addr;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Creating,
    Active,
    Modifying,
    Releasing,
    Released,
}

impl SessionState {
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Creating, Active)
                | (Creating, Released)
                | (Active, Modifying)
                | (Active, Releasing)
                | (Modifying, Active)
                | (Modifying, Releasing)
                | (Releasing, Released)
        )
    }
}

/// Opaque handle the AMF carries between `CreateSMContext` and a later
/// `ReleaseSMContext`; encodes the (SUPI, pduSessionId) pair it addresses
/// rather than requiring a secondary lookup table.
pub fn sm_context_ref(supi: &Supi, pdu_session_id: PduSessionId) -> String {
    format!("{supi}:{}", pdu_session_id.0)
}

pub fn parse_sm_context_ref(reference: &str) -> Option<(Supi, PduSessionId)> {
    let (supi, id) = reference.split_once(':')?;
    let id: u8 = id.parse().ok()?;
    Some((Supi::new(supi), PduSessionId::new(id)?))
}

#[derive(Debug, Clone)]
pub struct PduSession {
    pub supi: Supi,
    pub pdu_session_id: PduSessionId,
    pub dnn: Dnn,
    pub snssai: Snssai,
    pub pdu_session_type: String,
    pub state: SessionState,
    pub ue_ipv4: Option<Ipv4Addr>,
    pub upf_node_id: String,
    pub upf_n3_address: Ipv4Addr,
    pub upf_seid: u64,
    pub smf_seid: u64,
    pub upf_teid_downlink: u32,
    pub gnb_n3_address: Ipv4Addr,
    pub gnb_teid_uplink: u32,
    pub session_ambr_uplink: String,
    pub session_ambr_downlink: String,
    pub default_5qi: u8,
    pub created_at: Instant,
}
