//! Per-SUPI UE context table. Mutation is serialised per SUPI (§5) via a
//! `tokio::sync::Mutex` held across the peer calls each procedure makes,
//! so authenticate/register/session requests for one subscriber can never
//! interleave while different subscribers proceed in parallel.

use crate::model::UeContext;
use common::ids::Supi;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct UeStore {
    contexts: RwLock<HashMap<Supi, Arc<Mutex<UeContext>>>>,
    /// `authCtxId -> SUPI`, so `ConfirmAuthenticate` (which only carries the
    /// authCtxId, per §6.1) can find the UE context to mutate.
    pending_by_ctx: RwLock<HashMap<String, Supi>>,
}

impl UeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pending(&self, auth_ctx_id: String, supi: Supi) {
        self.pending_by_ctx.write().unwrap().insert(auth_ctx_id, supi);
    }

    pub fn resolve_pending(&self, auth_ctx_id: &str) -> Option<Supi> {
        self.pending_by_ctx.read().unwrap().get(auth_ctx_id).cloned()
    }

    pub fn clear_pending(&self, auth_ctx_id: &str) {
        self.pending_by_ctx.write().unwrap().remove(auth_ctx_id);
    }

    /// Returns the existing per-SUPI lock, or creates a fresh DEREGISTERED
    /// context if this is the first operation seen for `supi`.
    pub fn get_or_create(&self, supi: &Supi) -> Arc<Mutex<UeContext>> {
        if let Some(existing) = self.contexts.read().unwrap().get(supi) {
            return existing.clone();
        }
        let mut contexts = self.contexts.write().unwrap();
        contexts
            .entry(supi.clone())
            .or_insert_with(|| Arc::new(Mutex::new(UeContext::new(supi.clone()))))
            .clone()
    }

    pub fn get(&self, supi: &Supi) -> Option<Arc<Mutex<UeContext>>> {
        self.contexts.read().unwrap().get(supi).cloned()
    }

    pub fn remove(&self, supi: &Supi) {
        self.contexts.write().unwrap().remove(supi);
    }
}
