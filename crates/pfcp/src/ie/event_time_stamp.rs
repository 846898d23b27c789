//! Event Time Stamp Information Element.
//!
//! Per 3GPP TS 29.244 Section 8.2.116, contains the event time stamp
//! as a 3GPP NTP timestamp (seconds since 1900-01-01).

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTimeStamp {
    pub timestamp: u32,
}

impl EventTimeStamp {
    pub fn new(timestamp: u32) -> Self {
        Self { timestamp }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.timestamp.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Event Time Stamp",
                IeType::EventTimeStamp,
                4,
                data.len(),
            ));
        }
        Ok(Self {
            timestamp: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::EventTimeStamp, self.marshal().to_vec())
    }
}
