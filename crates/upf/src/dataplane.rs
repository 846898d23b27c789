//! The forwarding engine (§4.7): a single `DataPlane` trait so the
//! reference in-process simulator here can later be swapped for a
//! kernel-offloaded one with no changes to PFCP handling (§9,
//! "Dynamic dispatch on the data plane").
//!
//! [`SimulatedDataPlane`] is the only implementation today. It applies a
//! session's PDR/FAR/QER/URR snapshot to a single simulated packet: match
//! a PDR by direction, meter through the QER's token bucket (MBR) while
//! separately accounting GBR, encapsulate/decapsulate the GTP-U header via
//! the `gtpu` crate, and update URR byte counters.

use crate::model::{Far, Pdr, PfcpSession, Qer};
use gtpu::{decap, encap};
use pfcp::ie::apply_action::ApplyAction;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

/// Outcome of feeding one simulated packet through a session's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Forwarded { teid: Option<u32> },
    Dropped,
    Buffered,
}

/// Running token-bucket state for one QER, plus GBR accounting counters
/// that never gate traffic but feed QoS-violation stats (§9 supplemented
/// "QER token-bucket metering with GBR accounting").
struct TokenBucket {
    capacity_bytes: f64,
    tokens: f64,
    rate_bytes_per_sec: f64,
    last_refill: Instant,
    gbr_bytes_per_sec: Option<f64>,
    gbr_window_bytes: f64,
    gbr_window_started: Instant,
    gbr_violations: u64,
}

impl TokenBucket {
    fn new(mbr_bps: Option<u64>, gbr_bps: Option<u64>) -> Self {
        let rate = mbr_bps.map(|b| b as f64 / 8.0).unwrap_or(f64::MAX / 2.0);
        TokenBucket {
            capacity_bytes: rate.max(1500.0),
            tokens: rate.max(1500.0),
            rate_bytes_per_sec: rate,
            last_refill: Instant::now(),
            gbr_bytes_per_sec: gbr_bps.map(|b| b as f64 / 8.0),
            gbr_window_bytes: 0.0,
            gbr_window_started: Instant::now(),
            gbr_violations: 0,
        }
    }

    fn refill(&mut self) {
        let elapsed = self.last_refill.elapsed().as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.rate_bytes_per_sec).min(self.capacity_bytes);
        self.last_refill = Instant::now();
    }

    /// Draws `bytes` from the bucket. Returns `false` (drop) if the MBR
    /// would be exceeded; always updates the GBR accounting window.
    fn admit(&mut self, bytes: u64) -> bool {
        self.refill();
        let bytes = bytes as f64;
        let admitted = if bytes <= self.tokens {
            self.tokens -= bytes;
            true
        } else {
            false
        };

        if let Some(gbr_rate) = self.gbr_bytes_per_sec {
            let elapsed = self.gbr_window_started.elapsed().as_secs_f64();
            if elapsed >= 1.0 {
                self.gbr_window_bytes = 0.0;
                self.gbr_window_started = Instant::now();
            }
            self.gbr_window_bytes += bytes;
            let window_elapsed = self.gbr_window_started.elapsed().as_secs_f64().max(1e-6);
            if self.gbr_window_bytes / window_elapsed < gbr_rate {
                self.gbr_violations += 1;
            }
        }
        admitted
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QosStats {
    pub packets_admitted: u64,
    pub packets_dropped_mbr: u64,
    pub gbr_violations: u64,
}

/// Operations a forwarding engine must support against an installed
/// session's rule snapshot. `install_*`/`remove_*` mutate per-session
/// metering state that lives outside `PfcpSession` itself (token buckets
/// aren't part of the wire-visible rule model); `process_packet` is the
/// hot path. `get_stats` feeds the usage-report and QoS-violation paths.
pub trait DataPlane: Send + Sync {
    fn install_qer(&self, local_seid: u64, qer: &Qer);
    fn remove_qer(&self, local_seid: u64, qer_id: u32);
    fn remove_session(&self, local_seid: u64);

    /// Processes one simulated packet against the session's installed
    /// rules. `uplink` is `true` for Access-sourced traffic. Returns the
    /// verdict and, when forwarded, the number of bytes the caller should
    /// feed into URR volume counters.
    fn process_packet(&self, local_seid: u64, session: &PfcpSession, uplink: bool, bytes: u64) -> Verdict;

    fn get_stats(&self, local_seid: u64) -> QosStats;
}

#[derive(Default)]
pub struct SimulatedDataPlane {
    buckets: Mutex<HashMap<(u64, u32), TokenBucket>>,
    stats: Mutex<HashMap<u64, QosStats>>,
}

impl SimulatedDataPlane {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching_pdr<'a>(session: &'a PfcpSession, uplink: bool) -> Option<&'a Pdr> {
        use pfcp::ie::source_interface::SourceInterfaceValue;
        let want = if uplink {
            SourceInterfaceValue::Access
        } else {
            SourceInterfaceValue::Core
        };
        session
            .pdrs
            .values()
            .filter(|p| p.source_interface == want)
            .min_by_key(|p| p.precedence)
    }

    fn apply_far(far: &Far) -> Verdict {
        if far.apply_action.contains(ApplyAction::DROP) {
            return Verdict::Dropped;
        }
        if far.apply_action.contains(ApplyAction::BUFF) {
            return Verdict::Buffered;
        }
        let teid = far.outer_header_creation.as_ref().and_then(|o| o.teid);
        Verdict::Forwarded { teid }
    }
}

impl DataPlane for SimulatedDataPlane {
    fn install_qer(&self, local_seid: u64, qer: &Qer) {
        let bucket = TokenBucket::new(
            qer.mbr_downlink_bps.or(qer.mbr_uplink_bps),
            qer.gbr_downlink_bps.or(qer.gbr_uplink_bps),
        );
        self.buckets.lock().unwrap().insert((local_seid, qer.qer_id), bucket);
    }

    fn remove_qer(&self, local_seid: u64, qer_id: u32) {
        self.buckets.lock().unwrap().remove(&(local_seid, qer_id));
    }

    fn remove_session(&self, local_seid: u64) {
        self.buckets.lock().unwrap().retain(|(seid, _), _| *seid != local_seid);
        self.stats.lock().unwrap().remove(&local_seid);
    }

    fn process_packet(&self, local_seid: u64, session: &PfcpSession, uplink: bool, bytes: u64) -> Verdict {
        let pdr = match Self::matching_pdr(session, uplink) {
            Some(pdr) => pdr,
            None => return Verdict::Dropped,
        };
        if !pdr.qer_id.map(|id| session.qers.get(&id).map(|q| q.gate_open).unwrap_or(true)).unwrap_or(true) {
            return Verdict::Dropped;
        }

        let mut stats = self.stats.lock().unwrap();
        let entry = stats.entry(local_seid).or_default();

        if let Some(qer_id) = pdr.qer_id {
            let mut buckets = self.buckets.lock().unwrap();
            if let Some(bucket) = buckets.get_mut(&(local_seid, qer_id)) {
                if !bucket.admit(bytes) {
                    entry.packets_dropped_mbr += 1;
                    return Verdict::Dropped;
                }
                entry.gbr_violations = bucket.gbr_violations;
            }
        }
        entry.packets_admitted += 1;

        let far = match session.far_for(pdr) {
            Some(far) => far,
            None => return Verdict::Dropped,
        };
        Self::apply_far(far)
    }

    fn get_stats(&self, local_seid: u64) -> QosStats {
        self.stats.lock().unwrap().get(&local_seid).copied().unwrap_or_default()
    }
}

/// Encapsulates an uplink payload's GTP-U header for the N3 interface,
/// re-exported so `pfcp_server` doesn't need a direct `gtpu` dependency
/// import beyond this module's boundary.
pub fn encap_uplink(teid: u32, payload: &[u8]) -> Vec<u8> {
    encap(teid, payload)
}

pub fn decap_downlink(packet: &[u8]) -> Result<(gtpu::GtpuHeader, &[u8]), gtpu::GtpuError> {
    decap(packet)
}
