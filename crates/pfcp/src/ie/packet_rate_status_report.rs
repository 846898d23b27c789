//! Packet Rate Status Report Information Element.
//!
//! Per 3GPP TS 29.244 Section 7.5.7.1-2, reports the current packet rate
//! status for a QER when queried during session modification.

use crate::error::PfcpError;
use crate::ie::packet_rate_status::PacketRateStatus;
use crate::ie::qer_id::QerId;
use crate::ie::{marshal_ies, Ie, IeIterator, IeType};

/// Packet Rate Status Report per 3GPP TS 29.244 ยง7.5.7.1-2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketRateStatusReport {
    /// QER ID (mandatory).
    pub qer_id: QerId,
    /// Packet rate status (mandatory).
    pub packet_rate_status: PacketRateStatus,
}

impl PacketRateStatusReport {
    pub fn new(qer_id: QerId, packet_rate_status: PacketRateStatus) -> Self {
        PacketRateStatusReport {
            qer_id,
            packet_rate_status,
        }
    }

    /// Marshals the grouped IE payload.
    ///
    /// Returns `Err` if the internal `PacketRateStatus` has inconsistent flag/value state.
    pub fn marshal(&self) -> Result<Vec<u8>, PfcpError> {
        let prs_ie = self.packet_rate_status.to_ie()?;
        Ok(marshal_ies(&[self.qer_id.to_ie(), prs_ie]))
    }

    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        let mut qer_id = None;
        let mut packet_rate_status = None;

        for ie_result in IeIterator::new(payload) {
            let ie = ie_result?;
            match ie.ie_type {
                IeType::QerId => {
                    qer_id = Some(QerId::unmarshal(&ie.payload)?);
                }
                IeType::PacketRateStatus => {
                    packet_rate_status = Some(PacketRateStatus::unmarshal(&ie.payload)?);
                }
                _ => (),
            }
        }

        Ok(PacketRateStatusReport {
            qer_id: qer_id.ok_or_else(|| {
                PfcpError::missing_ie_in_grouped(IeType::QerId, IeType::PacketRateStatusReport)
            })?,
            packet_rate_status: packet_rate_status.ok_or_else(|| {
                PfcpError::missing_ie_in_grouped(
                    IeType::PacketRateStatus,
                    IeType::PacketRateStatusReport,
                )
            })?,
        })
    }

    /// Converts to a generic IE.
    ///
    /// Returns `Err` if the internal `PacketRateStatus` has inconsistent flag/value state.
    pub fn to_ie(&self) -> Result<Ie, PfcpError> {
        Ok(Ie::new(IeType::PacketRateStatusReport, self.marshal()?))
    }
}
