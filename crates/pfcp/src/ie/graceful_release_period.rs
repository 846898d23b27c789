//! Graceful Release Period Information Element
//!
//! The Graceful Release Period IE specifies the period for graceful release of PFCP association.
//! Per 3GPP TS 29.244 Section 8.2.78.

use crate::ie::{Ie, IeType};
use std::io;

/// Graceful Release Period
///
/// Specifies the grace period (in seconds) for the release of PFCP association.
/// Used during graceful shutdown of PFCP sessions.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.78
///
/// # Structure
/// - 2 bytes: Release period (u16, big-endian, seconds)
///
/// # Examples
///
/// ```
/// use pfcp::ie::graceful_release_period::GracefulReleasePeriod;
///
/// // Create Graceful Release Period with 60 seconds
/// let period = GracefulReleasePeriod::new(60);
/// assert_eq!(period.period(), 60);
///
/// // Marshal and unmarshal
/// let bytes = period.marshal()?;
/// let parsed = GracefulReleasePeriod::unmarshal(&bytes)?;
/// assert_eq!(period, parsed);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GracefulReleasePeriod {
    /// Release period in seconds (u16)
    period: u16,
}

impl GracefulReleasePeriod {
    /// Create a new Graceful Release Period
    ///
    /// # Arguments
    /// * `period` - Release period in seconds (0-65535)
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::graceful_release_period::GracefulReleasePeriod;
    ///
    /// let period = GracefulReleasePeriod::new(120);
    /// assert_eq!(period.period(), 120);
    /// ```
    pub fn new(period: u16) -> Self {
        GracefulReleasePeriod { period }
    }

    /// Get the release period value in seconds
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::graceful_release_period::GracefulReleasePeriod;
    ///
    /// let period = GracefulReleasePeriod::new(300);
    /// assert_eq!(period.period(), 300);
    /// ```
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Marshal Graceful Release Period to bytes
    ///
    /// # Returns
    /// 2-byte vector containing release period (big-endian)
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn marshal(&self) -> Result<Vec<u8>, io::Error> {
        let mut buf = Vec::with_capacity(2);
        buf.extend_from_slice(&self.period.to_be_bytes());
        Ok(buf)
    }

    /// Unmarshal Graceful Release Period from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing release period (must be at least 2 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::graceful_release_period::GracefulReleasePeriod;
    ///
    /// let period = GracefulReleasePeriod::new(180);
    /// let bytes = period.marshal()?;
    /// let parsed = GracefulReleasePeriod::unmarshal(&bytes)?;
    /// assert_eq!(period, parsed);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.len() < 2 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Graceful Release Period requires 2 bytes",
            ));
        }

        let bytes: [u8; 2] = data[0..2].try_into().unwrap();
        let period = u16::from_be_bytes(bytes);

        Ok(GracefulReleasePeriod { period })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::graceful_release_period::GracefulReleasePeriod;
    /// use pfcp::ie::IeType;
    ///
    /// let period = GracefulReleasePeriod::new(100);
    /// let ie = period.to_ie()?;
    /// assert_eq!(ie.ie_type, IeType::GracefulReleasePeriod);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn to_ie(&self) -> Result<Ie, io::Error> {
        let data = self.marshal()?;
        Ok(Ie::new(IeType::GracefulReleasePeriod, data))
    }
}
