//! BAR ID IE.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Represents a BAR ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarId {
    pub id: u8,
}

impl BarId {
    /// Creates a new BAR ID.
    pub fn new(id: u8) -> Self {
        BarId { id }
    }

    /// Marshals the BAR ID into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        vec![self.id]
    }

    /// Unmarshals a byte slice into a BAR ID.
    ///
    /// Per 3GPP TS 29.244, BAR ID requires exactly 1 byte (u8).
    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        if payload.is_empty() {
            return Err(PfcpError::invalid_length("BAR ID", IeType::BarId, 1, 0));
        }
        Ok(BarId { id: payload[0] })
    }

    /// Wraps the BAR ID in a BarId IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::BarId, self.marshal())
    }
}
