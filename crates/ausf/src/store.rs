//! AUSF's `AuthContext` table (§3, §4.4): single-use, state-machined,
//! bounded-lifetime entries. `PENDING -> CONFIRMED | FAILED | EXPIRED`;
//! only `PENDING -> CONFIRMED` yields KSEAF (§4.4 "State machine").

use common::ids::{AuthCtxId, Supi};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Pending,
    Confirmed,
    Failed,
    Expired,
}

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub auth_ctx_id: AuthCtxId,
    pub supi: Supi,
    pub serving_network_name: String,
    pub rand: [u8; 16],
    pub autn: [u8; 16],
    pub xres_star: [u8; 16],
    pub hxres_star: [u8; 16],
    pub kseaf: [u8; 32],
    pub state: AuthState,
    pub expires_at: Instant,
}

/// Upper bound on AuthContext lifetime, §3: "expiry is upper-bounded (≤30 s)".
pub const MAX_CONTEXT_TTL: Duration = Duration::from_secs(30);

pub struct ContextStore {
    contexts: RwLock<HashMap<AuthCtxId, AuthContext>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Success,
    Failure,
}

impl ContextStore {
    pub fn new() -> Self {
        Self {
            contexts: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, context: AuthContext) {
        self.contexts.write().unwrap().insert(context.auth_ctx_id.clone(), context);
    }

    /// Loads a context's challenge fields without consuming it (used by
    /// the response handler to build the problem/body pair before the
    /// single state transition happens).
    pub fn peek(&self, id: &AuthCtxId) -> Option<AuthContext> {
        self.contexts.read().unwrap().get(id).cloned()
    }

    /// Attempts the single PENDING -> terminal transition for `id`,
    /// comparing `res_star` against the stored HXRES* in constant time
    /// (§4.4 step 2: "constant-time comparison"). Mutates and returns the
    /// outcome; subsequent calls for the same id see the terminal state
    /// and produce no further transition (§8: "at most one transition out
    /// of PENDING ever occurs").
    pub fn confirm(
        &self,
        id: &AuthCtxId,
        hxres_star_candidate: &[u8; 16],
    ) -> Result<(ConfirmOutcome, AuthContext), crate::error::AusfError> {
        let mut contexts = self.contexts.write().unwrap();
        let context = contexts
            .get_mut(id)
            .ok_or_else(|| crate::error::AusfError::ContextNotFound(id.to_string()))?;

        if Instant::now() >= context.expires_at && context.state == AuthState::Pending {
            context.state = AuthState::Expired;
        }

        match context.state {
            AuthState::Pending => {
                use subtle::ConstantTimeEq;
                let matches: bool = context.hxres_star.ct_eq(hxres_star_candidate).into();
                context.state = if matches { AuthState::Confirmed } else { AuthState::Failed };
                let outcome = if matches { ConfirmOutcome::Success } else { ConfirmOutcome::Failure };
                Ok((outcome, context.clone()))
            }
            AuthState::Expired => Err(crate::error::AusfError::ContextExpired(id.to_string())),
            AuthState::Confirmed | AuthState::Failed => {
                // Terminal already; post-terminal reads return the terminal
                // result (§8), but a replay is also an authentication
                // failure from the caller's point of view since no fresh
                // KSEAF will ever be issued again.
                Ok((ConfirmOutcome::Failure, context.clone()))
            }
        }
    }

    /// Drops contexts past their expiry, freeing memory for single-use
    /// entries nobody will ever confirm.
    pub fn sweep_expired(&self) {
        let now = Instant::now();
        self.contexts.write().unwrap().retain(|_, c| {
            c.state == AuthState::Pending || now.duration_since(c.expires_at) < Duration::from_secs(60)
        });
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}
