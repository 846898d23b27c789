//! UDM's view types: 5G-AKA vectors, access-mobility/session-management
//! subscription views, and the UECM registration record (§4.3).

use common::ids::{Dnn, Guami, Snssai, Supi};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthVector {
    #[serde(rename = "authType")]
    pub auth_type: String,
    pub rand: String,
    pub autn: String,
    #[serde(rename = "xresStar")]
    pub xres_star: String,
    pub kausf: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResyncInfo {
    pub rand: String,
    pub auts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAuthDataRequest {
    #[serde(rename = "servingNetworkName")]
    pub serving_network_name: String,
    #[serde(rename = "resyncInfo", skip_serializing_if = "Option::is_none")]
    pub resync_info: Option<ResyncInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEvent {
    pub supi: Supi,
    pub success: bool,
    #[serde(rename = "authCtxId")]
    pub auth_ctx_id: String,
}

/// Nudm_SDM `GetAMData` view (§4.3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmData {
    #[serde(rename = "sessionAmbrUplink")]
    pub session_ambr_uplink: String,
    #[serde(rename = "sessionAmbrDownlink")]
    pub session_ambr_downlink: String,
    #[serde(rename = "subscribedNssai")]
    pub subscribed_nssai: Vec<Snssai>,
}

/// Nudm_SDM `GetSMData` view, with UDR-absent fields defaulted per §4.3:
/// PDU types {IPv4,IPv6,IPv4v6}, SSC mode 1, 5QI 9, ARP priority 8.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmDataEntry {
    pub dnn: Dnn,
    #[serde(rename = "sessionAmbrUplink")]
    pub session_ambr_uplink: String,
    #[serde(rename = "sessionAmbrDownlink")]
    pub session_ambr_downlink: String,
    #[serde(rename = "default5qi")]
    pub default_5qi: u8,
    #[serde(rename = "arpPriority")]
    pub arp_priority: u8,
    #[serde(rename = "allowedPduSessionTypes")]
    pub allowed_pdu_session_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatType {
    #[serde(rename = "NR")]
    Nr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UecmRegistration {
    #[serde(rename = "amfInstanceId")]
    pub amf_instance_id: String,
    pub guami: Guami,
    #[serde(rename = "ratType")]
    pub rat_type: RatType,
}
