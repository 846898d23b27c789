//! TSN Bridge ID Information Element
//!
//! The TSN Bridge ID IE is used to identify a TSN bridge in Time-Sensitive Networking scenarios.
//! This is critical for industrial IoT applications requiring deterministic networking.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// TSN Bridge ID Information Element
///
/// Used in TSN (Time-Sensitive Networking) scenarios to identify bridges
/// in deterministic networking topologies for industrial IoT applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsnBridgeId {
    /// Bridge ID (6 bytes MAC address format)
    pub bridge_id: [u8; 6],
}

impl TsnBridgeId {
    /// Creates a new TSN Bridge ID
    pub fn new(bridge_id: [u8; 6]) -> Self {
        Self { bridge_id }
    }

    /// Creates TSN Bridge ID from MAC address bytes
    pub fn from_mac(mac: [u8; 6]) -> Self {
        Self::new(mac)
    }

    /// Marshal to bytes
    pub fn marshal(&self) -> Vec<u8> {
        self.bridge_id.to_vec()
    }

    /// Unmarshal from bytes
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() != 6 {
            return Err(PfcpError::invalid_length("TSN Bridge ID", IeType::TsnBridgeIdAdvanced, 6, data.len()));
        }

        let mut bridge_id = [0u8; 6];
        bridge_id.copy_from_slice(data);

        Ok(Self { bridge_id })
    }
}

impl From<TsnBridgeId> for Ie {
    fn from(ie: TsnBridgeId) -> Self {
        Ie::new(IeType::TsnBridgeIdAdvanced, ie.marshal())
    }
}
