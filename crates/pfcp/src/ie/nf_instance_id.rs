//! NF Instance ID Information Element.
//!
//! Per 3GPP TS 29.244, contains a 16-byte UUID identifying an NF instance.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NfInstanceId {
    pub uuid: [u8; 16],
}

impl NfInstanceId {
    pub fn new(uuid: [u8; 16]) -> Self {
        Self { uuid }
    }

    pub fn marshal(&self) -> [u8; 16] {
        self.uuid
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 16 {
            return Err(PfcpError::invalid_length(
                "NF Instance ID",
                IeType::NfInstanceId,
                16,
                data.len(),
            ));
        }
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(&data[0..16]);
        Ok(Self { uuid })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::NfInstanceId, self.marshal().to_vec())
    }
}

impl std::fmt::Display for NfInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format as UUID: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.uuid[0], self.uuid[1], self.uuid[2], self.uuid[3],
            self.uuid[4], self.uuid[5],
            self.uuid[6], self.uuid[7],
            self.uuid[8], self.uuid[9],
            self.uuid[10], self.uuid[11], self.uuid[12], self.uuid[13], self.uuid[14], self.uuid[15],
        )
    }
}
