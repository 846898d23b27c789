//! UDR's persistence layer (§4.2). A real deployment backs this with a
//! table-oriented store partitioned by SUPI; this reference store keeps
//! the same access shape in memory: subscriber and SM-subscription rows
//! behind a `RwLock` (read-mostly, provisioned once), and one `Mutex` per
//! SUPI around the auth-credential row so `IncrementSQN` is a
//! serialisable read-modify-write (§4.2, §8: "two consecutive successful
//! `GenerateAuthData(SUPI)` calls produce strictly increasing SQN values").

use crate::error::UdrError;
use crate::model::{AuthCredential, SmSubscription, Subscriber};
use common::ids::{Dnn, Supi};
use milenage::sqn::{self, SqnError};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

pub struct Store {
    subscribers: RwLock<HashMap<Supi, Subscriber>>,
    credentials: RwLock<HashMap<Supi, Mutex<AuthCredential>>>,
    sm_subscriptions: RwLock<HashMap<(Supi, Dnn), SmSubscription>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            credentials: RwLock::new(HashMap::new()),
            sm_subscriptions: RwLock::new(HashMap::new()),
        }
    }

    /// Provisioning entry point (config-seeded for lab use, §6.5's
    /// "durable tables for subscribers ... append-only event log" reduced
    /// to an in-memory equivalent since this core runs as a lab/integration
    /// target, not a durable production deployment).
    pub fn provision(
        &self,
        subscriber: Subscriber,
        credential: AuthCredential,
        sm_subscriptions: Vec<SmSubscription>,
    ) {
        let supi = subscriber.supi.clone();
        self.subscribers.write().unwrap().insert(supi.clone(), subscriber);
        self.credentials
            .write()
            .unwrap()
            .insert(supi.clone(), Mutex::new(credential));
        let mut sms = self.sm_subscriptions.write().unwrap();
        for sub in sm_subscriptions {
            sms.insert((supi.clone(), sub.dnn.clone()), sub);
        }
    }

    pub fn get_subscriber(&self, supi: &Supi) -> Result<Subscriber, UdrError> {
        self.subscribers
            .read()
            .unwrap()
            .get(supi)
            .cloned()
            .ok_or_else(|| UdrError::SubscriberNotFound(supi.to_string()))
    }

    pub fn get_auth_subscription(&self, supi: &Supi) -> Result<AuthCredential, UdrError> {
        let credentials = self.credentials.read().unwrap();
        let lock = credentials
            .get(supi)
            .ok_or_else(|| UdrError::AuthSubscriptionNotFound(supi.to_string()))?;
        Ok(lock.lock().unwrap().clone())
    }

    /// Atomic read-modify-write: `IncrementSQN(SUPI, delta)` (§4.2). Holds
    /// the per-SUPI mutex for the entire read-compute-write so concurrent
    /// callers observe strictly increasing values and a failed update
    /// never leaks a partial state.
    pub fn increment_sqn(&self, supi: &Supi, delta: u64) -> Result<u64, UdrError> {
        let credentials = self.credentials.read().unwrap();
        let lock = credentials
            .get(supi)
            .ok_or_else(|| UdrError::AuthSubscriptionNotFound(supi.to_string()))?;
        let mut credential = lock.lock().unwrap();
        let next = sqn::next(credential.sqn, delta).map_err(|SqnError::Exhausted| {
            UdrError::SqnExhausted(supi.to_string())
        })?;
        credential.sqn = next;
        Ok(next)
    }

    /// Forces the stored SQN forward of `sqn_ms` after a successful AUTS
    /// resynchronisation (SPEC_FULL.md §3 supplement).
    pub fn resync_sqn(&self, supi: &Supi, sqn_ms: u64) -> Result<u64, UdrError> {
        let credentials = self.credentials.read().unwrap();
        let lock = credentials
            .get(supi)
            .ok_or_else(|| UdrError::AuthSubscriptionNotFound(supi.to_string()))?;
        let mut credential = lock.lock().unwrap();
        let next = sqn::resync_from(sqn_ms)
            .map_err(|SqnError::Exhausted| UdrError::SqnExhausted(supi.to_string()))?;
        credential.sqn = next;
        Ok(next)
    }

    pub fn get_sm_subscriptions(
        &self,
        supi: &Supi,
        dnn: Option<&Dnn>,
    ) -> Result<Vec<SmSubscription>, UdrError> {
        let sms = self.sm_subscriptions.read().unwrap();
        match dnn {
            Some(dnn) => {
                let found = sms
                    .get(&(supi.clone(), dnn.clone()))
                    .cloned()
                    .ok_or_else(|| UdrError::SmSubscriptionNotFound {
                        supi: supi.to_string(),
                        dnn: dnn.to_string(),
                    })?;
                Ok(vec![found])
            }
            None => Ok(sms
                .iter()
                .filter(|((s, _), _)| s == supi)
                .map(|(_, v)| v.clone())
                .collect()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthAlgorithm, OpVariant, PduSessionType, SmSubscription, SscMode, SubscriberStatus};

    fn seed(store: &Store, supi: &str) {
        store.provision(
            Subscriber {
                supi: Supi::new(supi),
                msisdn: "15550000000".to_string(),
                status: SubscriberStatus::Active,
                default_slices: vec![],
                session_ambr_uplink: "1 Gbps".to_string(),
                session_ambr_downlink: "2 Gbps".to_string(),
                subscribed_dnns: vec![Dnn::from("internet")],
            },
            AuthCredential {
                supi: Supi::new(supi),
                k_hex: "00".repeat(16),
                op: OpVariant::Opc("00".repeat(16)),
                amf: 0x8000,
                algorithm: AuthAlgorithm::Milenage,
                sqn: 0,
            },
            vec![SmSubscription {
                supi: Supi::new(supi),
                dnn: Dnn::from("internet"),
                session_ambr_uplink: "1 Gbps".to_string(),
                session_ambr_downlink: "2 Gbps".to_string(),
                default_5qi: 9,
                arp_priority: 8,
                allowed_pdu_session_types: vec![PduSessionType::Ipv4],
                allowed_ssc_modes: vec![SscMode::Mode1],
            }],
        );
    }

    #[test]
    fn increment_sqn_is_strictly_increasing() {
        let store = Store::new();
        seed(&store, "imsi-001010000000001");
        let supi = Supi::new("imsi-001010000000001");
        let a = store.increment_sqn(&supi, 1).unwrap();
        let b = store.increment_sqn(&supi, 1).unwrap();
        assert!(b > a);
    }

    #[test]
    fn increment_sqn_rejects_unknown_supi() {
        let store = Store::new();
        assert!(store
            .increment_sqn(&Supi::new("imsi-nope"), 1)
            .is_err());
    }

    #[test]
    fn sm_subscription_filters_by_dnn() {
        let store = Store::new();
        seed(&store, "imsi-001010000000001");
        let supi = Supi::new("imsi-001010000000001");
        let found = store.get_sm_subscriptions(&supi, Some(&Dnn::from("internet"))).unwrap();
        assert_eq!(found.len(), 1);
        assert!(store
            .get_sm_subscriptions(&supi, Some(&Dnn::from("ims")))
            .is_err());
    }
}
