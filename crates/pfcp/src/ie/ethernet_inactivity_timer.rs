//! Ethernet Inactivity Timer Information Element
//!
//! The Ethernet Inactivity Timer IE specifies the duration for Ethernet session inactivity timeout.
//! Per 3GPP TS 29.244 Section 8.2.105, this IE is used to detect inactive Ethernet sessions.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use std::time::Duration;

/// Ethernet Inactivity Timer
///
/// Specifies the inactivity timeout duration for Ethernet sessions.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.105
///
/// # Structure
/// - 4 octets: Timer value in seconds (network byte order)
///
/// # Examples
///
/// ```
/// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
/// use std::time::Duration;
///
/// // Create timer for 60 seconds
/// let timer = EthernetInactivityTimer::new(Duration::from_secs(60));
/// assert_eq!(timer.duration(), Duration::from_secs(60));
///
/// // Create from seconds
/// let timer2 = EthernetInactivityTimer::from_secs(300);
/// assert_eq!(timer2.duration(), Duration::from_secs(300));
///
/// // Marshal and unmarshal
/// let bytes = timer.marshal();
/// let parsed = EthernetInactivityTimer::unmarshal(&bytes).unwrap();
/// assert_eq!(timer, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthernetInactivityTimer {
    /// Timer value in seconds
    seconds: u32,
}

impl EthernetInactivityTimer {
    /// Create a new Ethernet Inactivity Timer
    ///
    /// # Arguments
    /// * `duration` - Timer duration (only seconds portion is used)
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
    /// use std::time::Duration;
    ///
    /// let timer = EthernetInactivityTimer::new(Duration::from_secs(120));
    /// assert_eq!(timer.duration(), Duration::from_secs(120));
    /// ```
    pub fn new(duration: Duration) -> Self {
        EthernetInactivityTimer {
            seconds: duration.as_secs() as u32,
        }
    }

    /// Create from seconds
    ///
    /// # Arguments
    /// * `seconds` - Timer value in seconds
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
    ///
    /// let timer = EthernetInactivityTimer::from_secs(600);
    /// assert_eq!(timer.seconds(), 600);
    /// ```
    pub fn from_secs(seconds: u32) -> Self {
        EthernetInactivityTimer { seconds }
    }

    /// Get the timer duration
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
    /// use std::time::Duration;
    ///
    /// let timer = EthernetInactivityTimer::from_secs(180);
    /// assert_eq!(timer.duration(), Duration::from_secs(180));
    /// ```
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds as u64)
    }

    /// Get the timer value in seconds
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
    ///
    /// let timer = EthernetInactivityTimer::from_secs(90);
    /// assert_eq!(timer.seconds(), 90);
    /// ```
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Marshal Ethernet Inactivity Timer to bytes
    ///
    /// # Returns
    /// 4-byte array with timer value in network byte order
    pub fn marshal(&self) -> [u8; 4] {
        self.seconds.to_be_bytes()
    }

    /// Unmarshal Ethernet Inactivity Timer from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing timer data (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
    ///
    /// let timer = EthernetInactivityTimer::from_secs(240);
    /// let bytes = timer.marshal();
    /// let parsed = EthernetInactivityTimer::unmarshal(&bytes).unwrap();
    /// assert_eq!(timer, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Ethernet Inactivity Timer",
                IeType::EthernetInactivityTimer,
                4,
                data.len(),
            ));
        }

        let seconds = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        Ok(EthernetInactivityTimer { seconds })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp::ie::ethernet_inactivity_timer::EthernetInactivityTimer;
    /// use pfcp::ie::IeType;
    ///
    /// let timer = EthernetInactivityTimer::from_secs(60);
    /// let ie = timer.to_ie();
    /// assert_eq!(ie.ie_type, IeType::EthernetInactivityTimer);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::EthernetInactivityTimer, self.marshal().to_vec())
    }
}
