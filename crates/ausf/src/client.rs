//! A client to the UDM, discovered through the NRF (§4.4, §9: "AUSF
//! depends on UDM").

use common::error::SbiError;
use common::ids::NfType;
use common::registry::{DiscoveryFilter, RegistryClient};
use common::sbi::SbiClient;
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResyncInfo {
    pub rand: String,
    pub auts: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateAuthDataRequest {
    #[serde(rename = "servingNetworkName")]
    pub serving_network_name: String,
    #[serde(rename = "resyncInfo", skip_serializing_if = "Option::is_none")]
    pub resync_info: Option<ResyncInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthVector {
    pub rand: String,
    pub autn: String,
    #[serde(rename = "xresStar")]
    pub xres_star: String,
    pub kausf: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthEvent {
    pub supi: String,
    pub success: bool,
    #[serde(rename = "authCtxId")]
    pub auth_ctx_id: String,
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

    async fn base_url(&self, trace: &TraceContext) -> Result<String, SbiError> {
        let profiles = self
            .registry
            .discover(NfType::Udm, &DiscoveryFilter::default(), trace)
            .await?;
        let profile = profiles
            .into_iter()
            .next()
            .ok_or_else(|| SbiError::Unreachable("no UDM instance discovered".to_string()))?;
        let host = profile
            .ipv4_addresses
            .first()
            .cloned()
            .unwrap_or_else(|| "127.0.0.1".to_string());
        Ok(format!("http://{host}"))
    }

    pub async fn generate_auth_data(
        &self,
        supi: &str,
        serving_network_name: &str,
        resync_info: Option<ResyncInfo>,
        trace: &TraceContext,
    ) -> Result<AuthVector, SbiError> {
        let base = self.base_url(trace).await?;
        let url = format!("{base}/nudm-ueau/v1/supi/{supi}/security-information/generate-auth-data");
        self.sbi
            .post_json(
                &url,
                trace,
                &GenerateAuthDataRequest {
                    serving_network_name: serving_network_name.to_string(),
                    resync_info,
                },
            )
            .await
    }

    pub async fn record_auth_event(&self, event: AuthEvent, trace: &TraceContext) {
        if let Ok(base) = self.base_url(trace).await {
            let url = format!("{base}/nudm-ueau/v1/supi/{}/auth-events", event.supi);
            let _: Result<(), SbiError> = self.sbi.post_json(&url, trace, &event).await;
        }
    }
}
