//! The PFCP session table: one `tokio::sync::Mutex` per local SEID (§4.7:
//! "writers take exclusive locks per session; readers take shared locks"),
//! plus the per-peer association table association lifecycle tracking
//! needs (§4.7's heartbeat-age / orphan-on-loss / resync-on-return path).

use crate::model::{PeerAssociation, PfcpSession};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<u64, Arc<Mutex<PfcpSession>>>>,
    next_seid: AtomicU64,
    associations: RwLock<HashMap<SocketAddr, PeerAssociation>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            next_seid: AtomicU64::new(1),
            ..Default::default()
        }
    }

    /// Allocates a fresh local SEID. Monotonic per process; uniqueness
    /// across restarts isn't attempted since a restarted UPF starts every
    /// peer's association fresh via a new Association Setup anyway.
    pub fn allocate_seid(&self) -> u64 {
        self.next_seid.fetch_add(1, Ordering::Relaxed)
    }

    pub fn get(&self, local_seid: u64) -> Option<Arc<Mutex<PfcpSession>>> {
        self.sessions.read().unwrap().get(&local_seid).cloned()
    }

    pub fn insert(&self, session: PfcpSession) -> Arc<Mutex<PfcpSession>> {
        let key = session.local_seid;
        let lock = Arc::new(Mutex::new(session));
        self.sessions.write().unwrap().insert(key, lock.clone());
        lock
    }

    pub fn remove(&self, local_seid: u64) {
        self.sessions.write().unwrap().remove(&local_seid);
    }

    /// Sessions whose peer address matches, used to mark orphaned state or
    /// to resync on a returning Association Setup.
    pub fn sessions_for_peer(&self, peer: SocketAddr) -> Vec<Arc<Mutex<PfcpSession>>> {
        self.sessions
            .read()
            .unwrap()
            .values()
            .filter(|s| {
                // Snapshot the peer address without awaiting: try_lock is
                // safe here since this only runs from the PFCP server's
                // single-threaded-per-datagram handler, never concurrently
                // with the session's own lock holder mid-mutation.
                s.try_lock().map(|g| g.peer_addr == peer).unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn association(&self, peer: SocketAddr) -> Option<PeerAssociation> {
        self.associations.read().unwrap().get(&peer).cloned()
    }

    pub fn set_association(&self, peer: SocketAddr, assoc: PeerAssociation) {
        self.associations.write().unwrap().insert(peer, assoc);
    }

    pub fn touch_association(&self, peer: SocketAddr) -> bool {
        if let Some(assoc) = self.associations.write().unwrap().get_mut(&peer) {
            assoc.touch();
            true
        } else {
            false
        }
    }

    pub fn remove_association(&self, peer: SocketAddr) {
        self.associations.write().unwrap().remove(&peer);
    }

    /// Every peer whose association is older than `grace` since its last
    /// heartbeat. The caller marks that peer's sessions orphaned.
    pub fn stale_peers(&self, grace: std::time::Duration) -> Vec<SocketAddr> {
        self.associations
            .read()
            .unwrap()
            .iter()
            .filter(|(_, a)| a.is_stale(grace))
            .map(|(peer, _)| *peer)
            .collect()
    }
}
