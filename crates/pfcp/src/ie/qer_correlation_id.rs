// src/ie/qer_correlation_id.rs

//! QER Correlation ID Information Element.

use crate::error::PfcpError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QerCorrelationId {
    pub value: u32,
}

impl QerCorrelationId {
    pub fn new(value: u32) -> Self {
        QerCorrelationId { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "QER Correlation ID",
                IeType::QerCorrelationId,
                4,
                data.len(),
            ));
        }
        Ok(QerCorrelationId {
            value: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }
}
