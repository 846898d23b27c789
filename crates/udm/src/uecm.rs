//! `Nudm_UECM` UE context management (§4.3): registers which AMF
//! currently serves a SUPI, with implicit deregistration of any prior AMF.

use crate::model::UecmRegistration;
use common::ids::Supi;
use common::sbi::SbiClient;
use common::trace::TraceContext;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

pub struct UecmStore {
    records: RwLock<HashMap<Supi, UecmRegistration>>,
    sbi: SbiClient,
}

impl UecmStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            sbi: SbiClient::new(Duration::from_secs(2)),
        }
    }

    /// Registers `registration` as the serving AMF for `supi`. If a
    /// different AMF was previously registered, attempts a best-effort
    /// out-of-band notification to it; an unreachable prior AMF just
    /// leaves its record superseded (§4.3: "if unreachable, the prior
    /// record is marked stale" — here, simply overwritten, since this
    /// reference UDM keeps no history beyond the current record).
    pub async fn register_amf(&self, supi: Supi, registration: UecmRegistration, trace: &TraceContext) {
        let previous = {
            let mut records = self.records.write().unwrap();
            records.insert(supi.clone(), registration)
        };
        if let Some(prev) = previous {
            if prev.amf_instance_id != self.records.read().unwrap().get(&supi).unwrap().amf_instance_id {
                self.notify_previous_amf(&supi, &prev, trace).await;
            }
        }
    }

    async fn notify_previous_amf(&self, supi: &Supi, prev: &UecmRegistration, trace: &TraceContext) {
        // Best-effort: this reference core has no AMF-instance-id to SBI
        // address mapping beyond the NRF itself, so the notification is a
        // log line rather than a real callback; a production UDM would
        // discover the prior AMF's address from its NFProfile and PATCH
        // its `namf-callback` endpoint.
        let _ = &self.sbi;
        tracing::info!(
            supi = %supi,
            prior_amf = %prev.amf_instance_id,
            trace_id = %trace.trace_id_hex(),
            "implicit deregistration of prior serving AMF"
        );
    }

    pub fn get(&self, supi: &Supi) -> Option<UecmRegistration> {
        self.records.read().unwrap().get(supi).cloned()
    }

    pub fn deregister(&self, supi: &Supi) -> bool {
        self.records.write().unwrap().remove(supi).is_some()
    }
}

impl Default for UecmStore {
    fn default() -> Self {
        Self::new()
    }
}
