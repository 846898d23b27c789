//! `Nudm_SDM` client: fetches session-management subscription data for a
//! (SUPI, DNN) pair (§4.6 step 1, §9: "SMF depends on UDM, not UDR
//! directly").

use common::error::SbiError;
use common::ids::{Dnn, NfType, Supi};
use common::registry::RegistryClient;
use common::sbi::SbiClient;
use common::trace::TraceContext;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct SmDataEntry {
    pub dnn: String,
    #[serde(rename = "sessionAmbrUplink")]
    pub session_ambr_uplink: String,
    #[serde(rename = "sessionAmbrDownlink")]
    pub session_ambr_downlink: String,
    #[serde(rename = "default5qi")]
    pub default_5qi: u8,
    #[serde(rename = "arpPriority")]
    pub arp_priority: u8,
    #[serde(rename = "allowedPduSessionTypes")]
    pub allowed_pdu_session_types: Vec<String>,
}

pub struct UdmClient {
    registry: Arc<RegistryClient>,
    sbi: SbiClient,
}

impl UdmClient {
    pub fn new(registry: Arc<RegistryClient>, deadline: Duration) -> Self {
        Self {
            registry,
            sbi: SbiClient::new(deadline),
        }
    }

    pub async fn get_sm_data(
        &self,
        supi: &Supi,
        dnn: &Dnn,
        trace: &TraceContext,
    ) -> Result<Vec<SmDataEntry>, SbiError> {
        let base = super::base_url(&self.registry, NfType::Udm, trace).await?;
        let url = format!("{base}/nudm-sdm/v1/supi/{supi}/sm-data?dnn={dnn}");
        self.sbi.get_json(&url, trace).await
    }
}
