//! Type-safe newtype wrappers for the identifiers shared across network functions.
//!
//! Mirrors the identifier idiom used for PFCP's `Seid`/`Teid` in [`pfcp::types`]:
//! a thin `Deref`-able newtype per stable identifier named in the data model,
//! so that e.g. an `AuthCtxId` can never be passed where a `Supi` is expected.

use std::fmt;
use std::ops::Deref;

/// Subscription Permanent Identifier, canonical IMSI form `imsi-<mcc><mnc><msin>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Supi(pub String);

impl Supi {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// True if the value has the `imsi-` prefix required by the data model.
    pub fn is_imsi_form(&self) -> bool {
        self.0.starts_with("imsi-")
    }
}

impl fmt::Display for Supi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Supi {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for Supi {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Concealed form of a SUPI as carried over the air. The core treats
/// de-concealment as a UDM capability (see DESIGN.md for the Open Question
/// decision); elsewhere a SUCI is an opaque string alongside a SUPI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Suci(pub String);

/// Data Network Name (APN analogue).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Dnn(pub String);

impl fmt::Display for Dnn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Dnn {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Slice identifier `{SST, SD}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Snssai {
    pub sst: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd: Option<u32>,
}

impl Snssai {
    pub const fn new(sst: u8, sd: Option<u32>) -> Self {
        Self { sst, sd }
    }
}

impl fmt::Display for Snssai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sd {
            Some(sd) => write!(f, "{}:{:06x}", self.sst, sd),
            None => write!(f, "{}", self.sst),
        }
    }
}

/// Globally Unique AMF Identifier (PLMN + region + set + pointer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Guami {
    pub mcc: String,
    pub mnc: String,
    pub amf_region_id: u8,
    pub amf_set_id: u16,
    pub amf_pointer: u8,
}

/// Tracking Area Identity (PLMN + TAC).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tai {
    pub mcc: String,
    pub mnc: String,
    pub tac: u32,
}

/// NF instance identifier, unique within the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct NfInstanceId(pub String);

impl NfInstanceId {
    pub fn new_random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for NfInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Network function type, as registered with and discovered from the NRF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NfType {
    Nrf,
    Udr,
    Udm,
    Ausf,
    Amf,
    Smf,
    Upf,
}

impl fmt::Display for NfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NfType::Nrf => "NRF",
            NfType::Udr => "UDR",
            NfType::Udm => "UDM",
            NfType::Ausf => "AUSF",
            NfType::Amf => "AMF",
            NfType::Smf => "SMF",
            NfType::Upf => "UPF",
        };
        f.write_str(s)
    }
}

/// Single-use 5G-AKA authentication context identifier (AUSF-owned).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AuthCtxId(pub String);

impl AuthCtxId {
    pub fn new_random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for AuthCtxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// PDU session identifier, 1..=15 per SUPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct PduSessionId(pub u8);

impl PduSessionId {
    /// Builds a validated PDU session id, rejecting values outside 1..=15.
    pub fn new(value: u8) -> Option<Self> {
        (1..=15).contains(&value).then_some(Self(value))
    }
}

impl fmt::Display for PduSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supi_detects_imsi_form() {
        let supi = Supi::new("imsi-001010000000001");
        assert!(supi.is_imsi_form());
        assert_eq!(supi.to_string(), "imsi-001010000000001");
    }

    #[test]
    fn snssai_display_includes_sd_when_present() {
        assert_eq!(Snssai::new(1, Some(1)).to_string(), "1:000001");
        assert_eq!(Snssai::new(1, None).to_string(), "1");
    }

    #[test]
    fn pdu_session_id_rejects_out_of_range() {
        assert!(PduSessionId::new(0).is_none());
        assert!(PduSessionId::new(16).is_none());
        assert!(PduSessionId::new(1).is_some());
        assert!(PduSessionId::new(15).is_some());
    }
}
