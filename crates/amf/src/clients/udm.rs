//! UDM client: `Nudm_SDM.GetAMData` and `Nudm_UECM` registration (§4.3, §6.1).

use common::error::SbiError;
use common::ids::{Guami, NfType};
use common::registry::RegistryClient;
use common::sbi::SbiClient;
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AmData {
    #[serde(rename = "sessionAmbrUplink")]
    pub session_ambr_uplink: String,
    #[serde(rename = "sessionAmbrDownlink")]
    pub session_ambr_downlink: String,
    #[serde(rename = "subscribedNssai")]
    pub subscribed_nssai: Vec<common::ids::Snssai>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatType {
    #[serde(rename = "NR")]
    Nr,
}

#[derive(Debug, Clone, Serialize)]
pub struct UecmRegistration {
    #[serde(rename = "amfInstanceId")]
    pub amf_instance_id: String,
    pub guami: Guami,
    #[serde(rename = "ratType")]
    pub rat_type: RatType,
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

    pub async fn get_am_data(&self, supi: &str, trace: &TraceContext) -> Result<AmData, SbiError> {
        let base = super::base_url(&self.registry, NfType::Udm, trace).await?;
        let url = format!("{base}/nudm-sdm/v1/supi/{supi}/am-data");
        self.sbi.get_json(&url, trace).await
    }

    pub async fn register_amf(
        &self,
        supi: &str,
        registration: UecmRegistration,
        trace: &TraceContext,
    ) -> Result<(), SbiError> {
        let base = super::base_url(&self.registry, NfType::Udm, trace).await?;
        let url = format!("{base}/nudm-uecm/v1/supi/{supi}/registrations/amf-3gpp-access");
        self.sbi.put_json(&url, trace, &registration).await
    }

    pub async fn deregister_amf(&self, supi: &str, trace: &TraceContext) -> Result<(), SbiError> {
        let base = super::base_url(&self.registry, NfType::Udm, trace).await?;
        let url = format!("{base}/nudm-uecm/v1/supi/{supi}/registrations/amf-3gpp-access");
        self.sbi.delete(&url, trace).await
    }
}
