//! GTP-U v1 G-PDU header encode/decode (§4.7, §6.3).
//!
//! Header layout: `flags(1) | msgType(1) | length(2) | TEID(4)`, optionally
//! followed by a sequence number, N-PDU number, and next-extension-header
//! byte when the corresponding flag bits are set. `length` counts bytes
//! after the mandatory 8-byte header, matching TS 29.281 §5.1.

use std::fmt;

/// G-PDU message type (user data), the only message type the UPF's
/// simulated data plane emits or accepts.
pub const MSG_TYPE_GPDU: u8 = 0xff;

const VERSION_1: u8 = 1;
const PROTOCOL_TYPE_GTP: u8 = 1;

const FLAG_SEQUENCE: u8 = 0x02;
const FLAG_NPDU: u8 = 0x01;
const FLAG_EXT_HEADER: u8 = 0x04;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GtpuError {
    TooShort,
    UnsupportedVersion(u8),
    NotGpdu(u8),
    TruncatedOptionalFields,
}

impl fmt::Display for GtpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GtpuError::TooShort => write!(f, "packet shorter than the 8-byte mandatory header"),
            GtpuError::UnsupportedVersion(v) => write!(f, "unsupported GTP version {v}"),
            GtpuError::NotGpdu(t) => write!(f, "message type {t:#x} is not G-PDU"),
            GtpuError::TruncatedOptionalFields => {
                write!(f, "optional fields flagged but packet too short to hold them")
            }
        }
    }
}

impl std::error::Error for GtpuError {}

/// Optional fields present when any of sequence-number/N-PDU-number/
/// extension-header flags are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalFields {
    pub sequence_number: Option<u16>,
    pub npdu_number: Option<u8>,
}

/// A decoded G-PDU header plus a view of the payload that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtpuHeader {
    pub teid: u32,
    pub optional: OptionalFields,
}

/// Encapsulates `payload` in a G-PDU header carrying `teid`. No optional
/// fields are set; the simulated data plane doesn't need sequencing.
pub fn encap(teid: u32, payload: &[u8]) -> Vec<u8> {
    encap_with(teid, OptionalFields::default(), payload)
}

/// Encapsulates with explicit optional fields.
pub fn encap_with(teid: u32, optional: OptionalFields, payload: &[u8]) -> Vec<u8> {
    let mut flags = (VERSION_1 << 5) | (PROTOCOL_TYPE_GTP << 4);
    let mut extra = Vec::new();
    if let Some(seq) = optional.sequence_number {
        flags |= FLAG_SEQUENCE;
        extra.extend_from_slice(&seq.to_be_bytes());
    }
    if let Some(npdu) = optional.npdu_number {
        flags |= FLAG_NPDU;
        extra.push(npdu);
    }
    if flags & (FLAG_SEQUENCE | FLAG_NPDU | FLAG_EXT_HEADER) != 0 {
        // Any optional field present requires all three bytes (seq, npdu,
        // next-ext-header), per TS 29.281 §5.1; pad absent ones with zero.
        let mut fixed = [0u8; 4];
        if let Some(seq) = optional.sequence_number {
            fixed[0..2].copy_from_slice(&seq.to_be_bytes());
        }
        if let Some(npdu) = optional.npdu_number {
            fixed[2] = npdu;
        }
        extra = fixed.to_vec();
    }

    let length = (extra.len() + payload.len()) as u16;
    let mut out = Vec::with_capacity(8 + extra.len() + payload.len());
    out.push(flags);
    out.push(MSG_TYPE_GPDU);
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(&teid.to_be_bytes());
    out.extend_from_slice(&extra);
    out.extend_from_slice(payload);
    out
}

/// Decapsulates a G-PDU packet, returning `(teid, payload)`. The payload
/// slice borrows from `packet`.
pub fn decap(packet: &[u8]) -> Result<(GtpuHeader, &[u8]), GtpuError> {
    if packet.len() < 8 {
        return Err(GtpuError::TooShort);
    }
    let flags = packet[0];
    let version = flags >> 5;
    if version != VERSION_1 {
        return Err(GtpuError::UnsupportedVersion(version));
    }
    let msg_type = packet[1];
    if msg_type != MSG_TYPE_GPDU {
        return Err(GtpuError::NotGpdu(msg_type));
    }
    let length = u16::from_be_bytes([packet[2], packet[3]]) as usize;
    let teid = u32::from_be_bytes([packet[4], packet[5], packet[6], packet[7]]);

    let has_optional = flags & (FLAG_SEQUENCE | FLAG_NPDU | FLAG_EXT_HEADER) != 0;
    let mut offset = 8;
    let mut optional = OptionalFields::default();
    if has_optional {
        if packet.len() < offset + 4 {
            return Err(GtpuError::TruncatedOptionalFields);
        }
        if flags & FLAG_SEQUENCE != 0 {
            optional.sequence_number = Some(u16::from_be_bytes([packet[offset], packet[offset + 1]]));
        }
        if flags & FLAG_NPDU != 0 {
            optional.npdu_number = Some(packet[offset + 2]);
        }
        offset += 4;
    }

    let body_end = (8 + length).min(packet.len());
    let payload = if offset <= body_end {
        &packet[offset..body_end]
    } else {
        &packet[body_end..body_end]
    };

    Ok((GtpuHeader { teid, optional }, payload))
}
