//! The PDU session table: one `tokio::sync::Mutex` per (SUPI, pduSessionId)
//! pair, so operations against distinct sessions never contend (§5: "SMF
//! serialises operations per (SUPI, pduSessionId)").

use crate::model::PduSession;
use common::ids::{PduSessionId, Supi};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

type Key = (Supi, PduSessionId);

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Key, Arc<Mutex<PduSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing session lock for this key, if any.
    pub fn get(&self, supi: &Supi, pdu_session_id: PduSessionId) -> Option<Arc<Mutex<PduSession>>> {
        self.sessions
            .read()
            .unwrap()
            .get(&(supi.clone(), pdu_session_id))
            .cloned()
    }

    /// Inserts a freshly created session, returning its lock.
    pub fn insert(&self, session: PduSession) -> Arc<Mutex<PduSession>> {
        let key = (session.supi.clone(), session.pdu_session_id);
        let lock = Arc::new(Mutex::new(session));
        self.sessions.write().unwrap().insert(key, lock.clone());
        lock
    }

    pub fn remove(&self, supi: &Supi, pdu_session_id: PduSessionId) {
        self.sessions
            .write()
            .unwrap()
            .remove(&(supi.clone(), pdu_session_id));
    }
}
