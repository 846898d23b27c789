//! S-TAG (Service VLAN Tag) Information Element
//!
//! The S-TAG IE contains service provider VLAN tagging information for Ethernet packet filtering.
//! Per 3GPP TS 29.244 Section 8.2.95, this IE is used in Ethernet packet filtering scenarios.
//!
//! S-TAG is used in provider bridging (IEEE 802.1ad) for service provider VLAN tagging.

use crate::ie::{Ie, IeType};
use std::io;

/// S-TAG (Service VLAN Tag)
///
/// Represents service provider VLAN tagging information per IEEE 802.1ad.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.95
///
/// # Structure
/// - Octet 5: Flags (PCP Priority, DEI)
/// - Octet 5-6: VID (VLAN ID) - 12 bits
///
/// ```text
/// Bits 8-6: PCP (Priority Code Point) - 3 bits
/// Bit 5: DEI (Drop Eligible Indicator) - 1 bit
/// Bits 4-1 (and next 8 bits): VID (VLAN ID) - 12 bits
/// ```
///
/// # Examples
///
/// ```
/// use pfcp::ie::s_tag::STag;
///
/// // Create S-TAG with priority 3, no DEI, VLAN ID 100
/// let stag = STag::new(3, false, 100).unwrap();
/// assert_eq!(stag.priority(), 3);
/// assert_eq!(stag.dei(), false);
/// assert_eq!(stag.vid(), 100);
///
/// // Marshal and unmarshal
/// let bytes = stag.marshal();
/// let parsed = STag::unmarshal(&bytes).unwrap();
/// assert_eq!(stag, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct STag {
    /// Priority Code Point (0-7, 3 bits)
    pcp: u8,
    /// Drop Eligible Indicator (boolean)
    dei: bool,
    /// VLAN ID (0-4095, 12 bits)
    vid: u16,
}

impl STag {
    /// Maximum valid priority (3 bits = 0-7)
    pub const MAX_PRIORITY: u8 = 7;
    /// Maximum valid VID (12 bits = 0-4095)
    pub const MAX_VID: u16 = 4095;

    /// Create a new S-TAG
    ///
    /// # Arguments
    /// * `pcp` - Priority Code Point (0-7)
    /// * `dei` - Drop Eligible Indicator
    /// * `vid` - VLAN ID (0-4095)
    ///
    /// # Errors
    /// Returns error if PCP > 7 or VID > 4095
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::s_tag::STag;
    ///
    /// let stag = STag::new(5, true, 1000).unwrap();
    /// assert_eq!(stag.priority(), 5);
    /// assert_eq!(stag.dei(), true);
    /// assert_eq!(stag.vid(), 1000);
    /// ```
    pub fn new(pcp: u8, dei: bool, vid: u16) -> Result<Self, io::Error> {
        if pcp > Self::MAX_PRIORITY {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("S-TAG PCP {} exceeds maximum {}", pcp, Self::MAX_PRIORITY),
            ));
        }
        if vid > Self::MAX_VID {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("S-TAG VID {} exceeds maximum {}", vid, Self::MAX_VID),
            ));
        }
        Ok(STag { pcp, dei, vid })
    }

    /// Get the Priority Code Point
    pub fn priority(&self) -> u8 {
        self.pcp
    }

    /// Get the Drop Eligible Indicator
    pub fn dei(&self) -> bool {
        self.dei
    }

    /// Get the VLAN ID
    pub fn vid(&self) -> u16 {
        self.vid
    }

    /// Marshal S-TAG to bytes
    ///
    /// # Returns
    /// 3-byte array with S-TAG encoded
    pub fn marshal(&self) -> [u8; 3] {
        let mut bytes = [0u8; 3];

        // Byte 0: PCP (3 bits) | DEI (1 bit) | VID[11:8] (4 bits)
        bytes[0] = (self.pcp << 5) | ((self.dei as u8) << 4) | ((self.vid >> 8) as u8 & 0x0F);

        // Byte 1: VID[7:0]
        bytes[1] = (self.vid & 0xFF) as u8;

        // Byte 2: Spare (0)
        bytes[2] = 0;

        bytes
    }

    /// Unmarshal S-TAG from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing S-TAG data (must be at least 3 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::s_tag::STag;
    ///
    /// let stag = STag::new(7, false, 4095).unwrap();
    /// let bytes = stag.marshal();
    /// let parsed = STag::unmarshal(&bytes).unwrap();
    /// assert_eq!(stag, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.len() < 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("S-TAG requires 3 bytes, got {}", data.len()),
            ));
        }

        // Extract PCP (bits 7-5 of byte 0)
        let pcp = (data[0] >> 5) & 0x07;

        // Extract DEI (bit 4 of byte 0)
        let dei = (data[0] & 0x10) != 0;

        // Extract VID (bits 3-0 of byte 0 + byte 1)
        let vid = (((data[0] & 0x0F) as u16) << 8) | (data[1] as u16);

        Ok(STag { pcp, dei, vid })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::s_tag::STag;
    /// use pfcp::ie::IeType;
    ///
    /// let stag = STag::new(2, false, 500).unwrap();
    /// let ie = stag.to_ie();
    /// assert_eq!(ie.ie_type, IeType::STag);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::STag, self.marshal().to_vec())
    }
}
