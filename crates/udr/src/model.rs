//! UDR's owned entities: Subscriber, AuthCredential, SMSubscription (§3).

use common::ids::{Dnn, Snssai, Supi};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriberStatus {
    Active,
    Suspended,
    Deleted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub supi: Supi,
    pub msisdn: String,
    pub status: SubscriberStatus,
    #[serde(default)]
    pub default_slices: Vec<Snssai>,
    pub session_ambr_uplink: String,
    pub session_ambr_downlink: String,
    #[serde(default)]
    pub subscribed_dnns: Vec<Dnn>,
}

/// The authentication-algorithm tag named in §3; this core only
/// implements MILENAGE but carries the tag through so UDM's
/// `credential-algorithm-unsupported` error has something to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthAlgorithm {
    Milenage,
    Tuak,
}

/// Either a raw OPc or an OP the caller must derive OPc from via MILENAGE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OpVariant {
    #[serde(rename = "opc")]
    Opc(String),
    #[serde(rename = "op")]
    Op(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCredential {
    pub supi: Supi,
    /// Hex-encoded 128-bit permanent key K. Never serialised back out of
    /// UDM's boundary (§5: "Credentials (K/OPc): never leave UDM").
    pub k_hex: String,
    pub op: OpVariant,
    pub amf: u16,
    pub algorithm: AuthAlgorithm,
    pub sqn: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PduSessionType {
    Ipv4,
    Ipv6,
    Ipv4v6,
    Ethernet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SscMode {
    #[serde(rename = "1")]
    Mode1,
    #[serde(rename = "2")]
    Mode2,
    #[serde(rename = "3")]
    Mode3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmSubscription {
    pub supi: Supi,
    pub dnn: Dnn,
    pub session_ambr_uplink: String,
    pub session_ambr_downlink: String,
    pub default_5qi: u8,
    pub arp_priority: u8,
    #[serde(default)]
    pub allowed_pdu_session_types: Vec<PduSessionType>,
    #[serde(default)]
    pub allowed_ssc_modes: Vec<SscMode>,
}
