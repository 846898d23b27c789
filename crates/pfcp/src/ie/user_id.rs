//! User ID IE.

use crate::ie::{Ie, IeType};
use std::io;

/// Represents the User ID Information Element.
/// Used for enhanced user identification in 5G networks.
/// Defined in 3GPP TS 29.244 Section 8.2.100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId {
    pub user_id_type: UserIdType,
    pub user_id_value: Vec<u8>,
}

/// User ID type values as defined in 3GPP TS 29.244.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum UserIdType {
    /// IMSI (International Mobile Subscriber Identity)
    Imsi = 0,
    /// IMEI (International Mobile Equipment Identity)
    Imei = 1,
    /// MSISDN (Mobile Station International Subscriber Directory Number)
    Msisdn = 2,
    /// NAI (Network Access Identifier)
    Nai = 3,
    /// SUPI (Subscription Permanent Identifier)
    Supi = 4,
    /// GPSI (Generic Public Subscription Identifier)
    Gpsi = 5,
    /// Unknown/reserved user ID type
    Unknown(u8),
}

impl From<u8> for UserIdType {
    fn from(value: u8) -> Self {
        match value {
            0 => UserIdType::Imsi,
            1 => UserIdType::Imei,
            2 => UserIdType::Msisdn,
            3 => UserIdType::Nai,
            4 => UserIdType::Supi,
            5 => UserIdType::Gpsi,
            _ => UserIdType::Unknown(value),
        }
    }
}

impl From<UserIdType> for u8 {
    fn from(user_id_type: UserIdType) -> u8 {
        match user_id_type {
            UserIdType::Imsi => 0,
            UserIdType::Imei => 1,
            UserIdType::Msisdn => 2,
            UserIdType::Nai => 3,
            UserIdType::Supi => 4,
            UserIdType::Gpsi => 5,
            UserIdType::Unknown(value) => value,
        }
    }
}

impl UserId {
    /// Creates a new User ID IE.
    pub fn new(user_id_type: UserIdType, user_id_value: Vec<u8>) -> Self {
        UserId {
            user_id_type,
            user_id_value,
        }
    }

    /// Creates a User ID with IMSI.
    pub fn imsi(imsi: Vec<u8>) -> Self {
        UserId::new(UserIdType::Imsi, imsi)
    }

    /// Creates a User ID with IMEI.
    pub fn imei(imei: Vec<u8>) -> Self {
        UserId::new(UserIdType::Imei, imei)
    }

    /// Creates a User ID with MSISDN.
    pub fn msisdn(msisdn: Vec<u8>) -> Self {
        UserId::new(UserIdType::Msisdn, msisdn)
    }

    /// Creates a User ID with NAI.
    pub fn nai(nai: Vec<u8>) -> Self {
        UserId::new(UserIdType::Nai, nai)
    }

    /// Creates a User ID with SUPI.
    pub fn supi(supi: Vec<u8>) -> Self {
        UserId::new(UserIdType::Supi, supi)
    }

    /// Creates a User ID with GPSI.
    pub fn gpsi(gpsi: Vec<u8>) -> Self {
        UserId::new(UserIdType::Gpsi, gpsi)
    }

    /// Creates a User ID with NAI from string (convenience method).
    pub fn nai_from_string(nai: String) -> Self {
        UserId::nai(nai.into_bytes())
    }

    /// Creates a User ID with SUPI from string (convenience method).
    pub fn supi_from_string(supi: String) -> Self {
        UserId::supi(supi.into_bytes())
    }

    /// Gets the user ID value as a string (for text-based types like NAI).
    pub fn as_string(&self) -> Option<String> {
        match self.user_id_type {
            UserIdType::Nai | UserIdType::Supi | UserIdType::Gpsi => {
                String::from_utf8(self.user_id_value.clone()).ok()
            }
            _ => None,
        }
    }

    /// Gets the length of the marshaled User ID.
    pub fn len(&self) -> usize {
        1 + self.user_id_value.len() // 1 byte for type + value length
    }

    /// Checks if the User ID is empty.
    pub fn is_empty(&self) -> bool {
        self.user_id_value.is_empty()
    }

    /// Marshals the User ID into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.push(u8::from(self.user_id_type.clone()));
        data.extend_from_slice(&self.user_id_value);
        data
    }

    /// Unmarshals a byte slice into a User ID IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        if payload.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "User ID payload too short",
            ));
        }

        let user_id_type = UserIdType::from(payload[0]);
        let user_id_value = payload[1..].to_vec();

        Ok(UserId {
            user_id_type,
            user_id_value,
        })
    }

    /// Wraps the User ID in a User ID IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UserId, self.marshal())
    }
}
