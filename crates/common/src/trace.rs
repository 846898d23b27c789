//! W3C trace-context propagation (`traceparent` / `tracestate`), §6.1.
//!
//! `traceparent` format: `00-<trace-id:32hex>-<span-id:16hex>-<flags:2hex>`.

use rand::RngCore;
use std::fmt;

pub const TRACEPARENT_HEADER: &str = "traceparent";
pub const TRACESTATE_HEADER: &str = "tracestate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: [u8; 16],
    pub span_id: [u8; 8],
    pub flags: u8,
}

impl TraceContext {
    /// Starts a fresh trace (used by the component that first accepts a
    /// request from outside the core, i.e. the AMF's UE/RAN-facing facade).
    pub fn new_root() -> Self {
        let mut rng = rand::thread_rng();
        let mut trace_id = [0u8; 16];
        let mut span_id = [0u8; 8];
        rng.fill_bytes(&mut trace_id);
        rng.fill_bytes(&mut span_id);
        Self {
            trace_id,
            span_id,
            flags: 0x01,
        }
    }

    /// Derives the next hop's context: same trace-id, a fresh span-id.
    pub fn next_span(&self) -> Self {
        let mut rng = rand::thread_rng();
        let mut span_id = [0u8; 8];
        rng.fill_bytes(&mut span_id);
        Self {
            trace_id: self.trace_id,
            span_id,
            flags: self.flags,
        }
    }

    pub fn parse(header: &str) -> Option<Self> {
        let parts: Vec<&str> = header.split('-').collect();
        if parts.len() != 4 || parts[0] != "00" {
            return None;
        }
        let trace_id = hex_to_array::<16>(parts[1])?;
        let span_id = hex_to_array::<8>(parts[2])?;
        let flags = u8::from_str_radix(parts[3], 16).ok()?;
        Some(Self {
            trace_id,
            span_id,
            flags,
        })
    }

    pub fn trace_id_hex(&self) -> String {
        hex_encode(&self.trace_id)
    }

    pub fn span_id_hex(&self) -> String {
        hex_encode(&self.span_id)
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "00-{}-{}-{:02x}",
            self.trace_id_hex(),
            self.span_id_hex(),
            self.flags
        )
    }
}

fn hex_to_array<const N: usize>(s: &str) -> Option<[u8; N]> {
    if s.len() != N * 2 {
        return None;
    }
    let mut out = [0u8; N];
    for i in 0..N {
        out[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(out)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
