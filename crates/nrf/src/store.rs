//! The registry's in-memory store and lease semantics (§4.1, §8 "∀
//! NFProfile: `now − lastHeartbeat ≤ 2·TTL` for any profile returned by
//! Discover").
//!
//! Mutations go through a single `RwLock` over the whole map, which is a
//! blunt instrument but gives the per-NFInstanceID serialisation §5 asks
//! for "for free": two concurrent register/heartbeat/deregister calls for
//! the same instance, or for different instances, are totally ordered by
//! lock acquisition, so "deregister wins over a racing heartbeat" falls
//! out without extra bookkeeping.

use crate::error::NrfError;
use common::ids::{NfInstanceId, NfType};
use common::registry::{NfProfile, NfStatus};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct Entry {
    profile: NfProfile,
    last_heartbeat: Instant,
}

pub struct Store {
    entries: RwLock<HashMap<NfInstanceId, Entry>>,
    ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Default)]
pub struct DiscoverQuery {
    pub nf_type: Option<NfType>,
    pub plmn_mcc: Option<String>,
    pub plmn_mnc: Option<String>,
    pub snssai_sst: Option<u8>,
    pub snssai_sd: Option<u32>,
    pub dnn: Option<String>,
}

impl Store {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Idempotent upsert keyed by `nf_instance_id` (§4.1).
    pub fn register(&self, mut profile: NfProfile) -> (UpsertOutcome, NfProfile) {
        profile.status = NfStatus::Registered;
        let mut entries = self.entries.write().unwrap();
        let outcome = if entries.contains_key(&profile.nf_instance_id) {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        };
        entries.insert(
            profile.nf_instance_id.clone(),
            Entry {
                profile: profile.clone(),
                last_heartbeat: Instant::now(),
            },
        );
        (outcome, profile)
    }

    pub fn heartbeat(&self, id: &NfInstanceId) -> Result<(), NrfError> {
        let mut entries = self.entries.write().unwrap();
        let entry = entries
            .get_mut(id)
            .ok_or_else(|| NrfError::NotFound(id.to_string()))?;
        entry.last_heartbeat = Instant::now();
        entry.profile.status = NfStatus::Registered;
        Ok(())
    }

    pub fn deregister(&self, id: &NfInstanceId) -> Result<(), NrfError> {
        let mut entries = self.entries.write().unwrap();
        entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| NrfError::NotFound(id.to_string()))
    }

    /// Discovery: REGISTERED profiles matching `query`, ordered by
    /// `priority` ascending, then `capacity` descending, then instance-id,
    /// per §4.1.
    pub fn discover(&self, query: &DiscoverQuery) -> Vec<NfProfile> {
        let entries = self.entries.read().unwrap();
        let mut matches: Vec<NfProfile> = entries
            .values()
            .filter(|e| e.profile.status == NfStatus::Registered)
            .filter(|e| matches_query(&e.profile, query))
            .map(|e| e.profile.clone())
            .collect();
        matches.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then(b.capacity.cmp(&a.capacity))
                .then(a.nf_instance_id.cmp(&b.nf_instance_id))
        });
        matches
    }

    /// Background lease sweep (§4.1): profiles stale beyond `ttl` become
    /// SUSPENDED (excluded from discovery); beyond `2*ttl` they're deleted.
    pub fn sweep(&self) {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap();
        entries.retain(|_, e| now.duration_since(e.last_heartbeat) <= 2 * self.ttl);
        for entry in entries.values_mut() {
            if now.duration_since(entry.last_heartbeat) > self.ttl {
                entry.profile.status = NfStatus::Suspended;
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

fn matches_query(profile: &NfProfile, query: &DiscoverQuery) -> bool {
    if let Some(t) = query.nf_type {
        if profile.nf_type != t {
            return false;
        }
    }
    if let (Some(mcc), Some(plmn)) = (&query.plmn_mcc, &profile.plmn) {
        if mcc != &plmn.mcc {
            return false;
        }
    }
    if let (Some(mnc), Some(plmn)) = (&query.plmn_mnc, &profile.plmn) {
        if mnc != &plmn.mnc {
            return false;
        }
    }
    if let Some(sst) = query.snssai_sst {
        if !profile.snssai_list.is_empty()
            && !profile.snssai_list.iter().any(|s| {
                s.sst == sst && (query.snssai_sd.is_none() || s.sd == query.snssai_sd)
            })
        {
            return false;
        }
    }
    if let Some(dnn) = &query.dnn {
        if !profile.dnn_list.is_empty() && !profile.dnn_list.iter().any(|d| d == dnn) {
            return false;
        }
    }
    true
}
