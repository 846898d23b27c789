//! Deactivation Time Information Element
//!
//! The Deactivation Time IE indicates the time when a rule or function
//! should be deactivated in the User Plane Function.
//! Per 3GPP TS 29.244 Section 8.2.122.

use crate::ie::{Ie, IeType};
use std::io;

/// Deactivation Time
///
/// Specifies a 3GPP NTP timestamp when a PDR, FAR, QER, URR, BAR, or MAR
/// should be deactivated in the UPF.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.122
///
/// # Structure
/// - 4 bytes: 3GPP NTP timestamp (u32, big-endian)
///   The timestamp follows 3GPP TS 23.012 format (seconds since Jan 1, 1900)
///
/// # Examples
///
/// ```
/// use pfcp::ie::deactivation_time::DeactivationTime;
///
/// // Create a deactivation time with timestamp 0x87654321
/// let deactivation = DeactivationTime::new(0x87654321);
/// assert_eq!(deactivation.timestamp(), 0x87654321);
///
/// // Marshal and unmarshal
/// let bytes = deactivation.marshal()?;
/// let parsed = DeactivationTime::unmarshal(&bytes)?;
/// assert_eq!(deactivation, parsed);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeactivationTime {
    /// 3GPP NTP timestamp
    timestamp: u32,
}

impl DeactivationTime {
    /// Create a new Deactivation Time
    ///
    /// # Arguments
    /// * `timestamp` - 3GPP NTP timestamp value
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::deactivation_time::DeactivationTime;
    ///
    /// let deactivation = DeactivationTime::new(0xCAFEBABE);
    /// assert_eq!(deactivation.timestamp(), 0xCAFEBABE);
    /// ```
    pub fn new(timestamp: u32) -> Self {
        DeactivationTime { timestamp }
    }

    /// Get the timestamp value
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::deactivation_time::DeactivationTime;
    ///
    /// let deactivation = DeactivationTime::new(200);
    /// assert_eq!(deactivation.timestamp(), 200);
    /// ```
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Marshal Deactivation Time to bytes
    ///
    /// # Returns
    /// 4-byte vector containing 3GPP NTP timestamp (big-endian)
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn marshal(&self) -> Result<Vec<u8>, io::Error> {
        let mut buf = Vec::with_capacity(4);
        buf.extend_from_slice(&self.timestamp.to_be_bytes());
        Ok(buf)
    }

    /// Unmarshal Deactivation Time from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing timestamp data (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::deactivation_time::DeactivationTime;
    ///
    /// let deactivation = DeactivationTime::new(0x99887766);
    /// let bytes = deactivation.marshal()?;
    /// let parsed = DeactivationTime::unmarshal(&bytes)?;
    /// assert_eq!(deactivation, parsed);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.len() < 4 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Deactivation Time requires 4 bytes",
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let timestamp = u32::from_be_bytes(bytes);

        Ok(DeactivationTime { timestamp })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::deactivation_time::DeactivationTime;
    /// use pfcp::ie::IeType;
    ///
    /// let deactivation = DeactivationTime::new(0x00000000);
    /// let ie = deactivation.to_ie()?;
    /// assert_eq!(ie.ie_type, IeType::DeactivationTime);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn to_ie(&self) -> Result<Ie, io::Error> {
        let data = self.marshal()?;
        Ok(Ie::new(IeType::DeactivationTime, data))
    }
}
