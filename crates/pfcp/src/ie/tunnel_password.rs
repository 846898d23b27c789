//! Tunnel Password Information Element.
//!
//! Per 3GPP TS 29.244, contains tunnel password as raw bytes.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelPassword {
    pub value: Vec<u8>,
}

impl TunnelPassword {
    pub fn new(value: Vec<u8>) -> Self {
        Self { value }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.value.clone()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "Tunnel Password",
                IeType::TunnelPassword,
                1,
                0,
            ));
        }
        Ok(Self {
            value: data.to_vec(),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::TunnelPassword, self.marshal())
    }
}
