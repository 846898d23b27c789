//! AUSF client: `Nausf_UEAuthentication` (§4.4, §6.1).

use common::error::SbiError;
use common::ids::NfType;
use common::registry::RegistryClient;
use common::sbi::SbiClient;
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct UeAuthenticationRequest {
    #[serde(rename = "supiOrSuci")]
    pub supi_or_suci: String,
    #[serde(rename = "servingNetworkName")]
    pub serving_network_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FiveGAuthData {
    pub rand: String,
    pub autn: String,
    #[serde(rename = "hxresStar")]
    pub hxres_star: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UeAuthenticationResponse {
    #[serde(rename = "authType")]
    pub auth_type: String,
    #[serde(rename = "5gAuthData")]
    pub auth_data: FiveGAuthData,
    #[serde(rename = "authCtxId")]
    pub auth_ctx_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationRequest {
    #[serde(rename = "resStar")]
    pub res_star: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationResponse {
    #[serde(rename = "authResult")]
    pub auth_result: String,
    pub supi: Option<String>,
    pub kseaf: Option<String>,
}

pub struct AusfClient {
    registry: Arc<RegistryClient>,
    sbi: SbiClient,
}

impl AusfClient {
    pub fn new(registry: Arc<RegistryClient>, deadline: Duration) -> Self {
        Self {
            registry,
            sbi: SbiClient::new(deadline),
        }
    }

    pub async fn initiate(
        &self,
        supi_or_suci: &str,
        serving_network_name: &str,
        trace: &TraceContext,
    ) -> Result<UeAuthenticationResponse, SbiError> {
        let base = super::base_url(&self.registry, NfType::Ausf, trace).await?;
        let url = format!("{base}/nausf-auth/v1/ue-authentications");
        self.sbi
            .post_json(
                &url,
                trace,
                &UeAuthenticationRequest {
                    supi_or_suci: supi_or_suci.to_string(),
                    serving_network_name: serving_network_name.to_string(),
                },
            )
            .await
    }

    pub async fn confirm(
        &self,
        auth_ctx_id: &str,
        res_star: &str,
        trace: &TraceContext,
    ) -> Result<ConfirmationResponse, SbiError> {
        let base = super::base_url(&self.registry, NfType::Ausf, trace).await?;
        let url = format!("{base}/nausf-auth/v1/ue-authentications/{auth_ctx_id}/5g-aka-confirmation");
        self.sbi
            .put_json(
                &url,
                trace,
                &ConfirmationRequest {
                    res_star: res_star.to_string(),
                },
            )
            .await
    }
}
