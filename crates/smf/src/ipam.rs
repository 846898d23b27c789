//! Per-DNN IPv4 address pools (§4.6 "IP address management"): one CIDR pool
//! per configured DNN, a reservation keyed by (SUPI, pduSessionId), and
//! atomic allocate/release under a single per-pool lock (§5: "SMF serialises
//! ... per-DNN for IP pool mutation").

use crate::config::IpPoolConfig;
use common::ids::{Dnn, PduSessionId, Supi};
use std::collections::{BTreeSet, HashMap};
use std::net::Ipv4Addr;
use std::sync::Mutex;

struct PoolState {
    free: BTreeSet<u32>,
    reserved: HashMap<(Supi, PduSessionId), Ipv4Addr>,
}

pub struct IpPool {
    dnn: Dnn,
    state: Mutex<PoolState>,
}

impl IpPool {
    pub fn new(dnn: Dnn, cidr: &str) -> anyhow::Result<Self> {
        let (network, prefix_len) = parse_cidr(cidr)?;
        if prefix_len >= 31 {
            anyhow::bail!("cidr {cidr} has no usable host range");
        }
        let host_bits = 32 - prefix_len;
        let size: u32 = 1u32 << host_bits;
        let broadcast = network | (size - 1);
        let free = (network + 1..broadcast).collect();
        Ok(Self {
            dnn,
            state: Mutex::new(PoolState {
                free,
                reserved: HashMap::new(),
            }),
        })
    }

    /// Allocates an address for (supi, pduSessionId), reusing the existing
    /// reservation on a retransmitted request rather than leaking a second
    /// address (§8: "CreateSMContext is idempotent per (SUPI, pduSessionId)
    /// while ACTIVE").
    pub fn allocate(&self, supi: &Supi, pdu_session_id: PduSessionId) -> Option<Ipv4Addr> {
        let mut state = self.state.lock().unwrap();
        let key = (supi.clone(), pdu_session_id);
        if let Some(existing) = state.reserved.get(&key) {
            return Some(*existing);
        }
        let next = *state.free.iter().next()?;
        state.free.remove(&next);
        let addr = Ipv4Addr::from(next);
        state.reserved.insert(key, addr);
        Some(addr)
    }

    pub fn release(&self, supi: &Supi, pdu_session_id: PduSessionId) {
        let mut state = self.state.lock().unwrap();
        if let Some(addr) = state.reserved.remove(&(supi.clone(), pdu_session_id)) {
            state.free.insert(u32::from(addr));
        }
    }

    pub fn dnn(&self) -> &Dnn {
        &self.dnn
    }
}

fn parse_cidr(cidr: &str) -> anyhow::Result<(u32, u8)> {
    let (addr, prefix) = cidr
        .split_once('/')
        .ok_or_else(|| anyhow::anyhow!("cidr {cidr} missing prefix length"))?;
    let addr: Ipv4Addr = addr.parse()?;
    let prefix: u8 = prefix.parse()?;
    if prefix > 32 {
        anyhow::bail!("cidr {cidr} has an out-of-range prefix length");
    }
    let mask: u32 = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };
    Ok((u32::from(addr) & mask, prefix))
}

/// The set of per-DNN pools a running SMF owns, built once at startup from
/// `ipPools` (§6.4) and reconciled implicitly: restart starts every pool
/// empty of reservations, reflecting that session state does not survive a
/// restart (§6.5 names in-memory-only persisted state for this NF).
pub struct IpamRegistry {
    pools: HashMap<Dnn, IpPool>,
}

impl IpamRegistry {
    pub fn from_config(configs: &[IpPoolConfig]) -> anyhow::Result<Self> {
        let mut pools = HashMap::new();
        for cfg in configs {
            let dnn = Dnn::from(cfg.dnn.as_str());
            pools.insert(dnn.clone(), IpPool::new(dnn, &cfg.cidr)?);
        }
        Ok(Self { pools })
    }

    pub fn pool(&self, dnn: &Dnn) -> Option<&IpPool> {
        self.pools.get(dnn)
    }
}
