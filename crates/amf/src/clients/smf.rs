//! SMF client: `Nsmf_PDUSession` (§4.6, §6.1).

use common::error::SbiError;
use common::ids::NfType;
use common::registry::RegistryClient;
use common::sbi::SbiClient;
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct CreateSmContextRequest {
    pub supi: String,
    #[serde(rename = "pduSessionId")]
    pub pdu_session_id: u8,
    pub dnn: String,
    #[serde(rename = "sNssai")]
    pub snssai: common::ids::Snssai,
    #[serde(rename = "pduSessionType")]
    pub pdu_session_type: String,
    #[serde(rename = "gnbN3Address")]
    pub gnb_n3_address: String,
    #[serde(rename = "gnbTeidUplink")]
    pub gnb_teid_uplink: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionAmbr {
    pub uplink: String,
    pub downlink: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QosFlow {
    pub qfi: u8,
    #[serde(rename = "fiveQi")]
    pub five_qi: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSmContextResponse {
    pub result: String,
    #[serde(rename = "smContextRef")]
    pub sm_context_ref: String,
    #[serde(rename = "ueIpv4Address")]
    pub ue_ipv4_address: Option<String>,
    #[serde(rename = "ueIpv6Address")]
    pub ue_ipv6_address: Option<String>,
    #[serde(rename = "upfN3Address")]
    pub upf_n3_address: String,
    #[serde(rename = "upfTeidDownlink")]
    pub upf_teid_downlink: u32,
    #[serde(rename = "sessionAmbr")]
    pub session_ambr: SessionAmbr,
    #[serde(rename = "qosFlows")]
    pub qos_flows: Vec<QosFlow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReleaseSmContextRequest {
    pub cause: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSmContextResponse {
    pub result: String,
}

pub struct SmfClient {
    registry: Arc<RegistryClient>,
    sbi: SbiClient,
}

impl SmfClient {
    pub fn new(registry: Arc<RegistryClient>, deadline: Duration) -> Self {
        Self {
            registry,
            sbi: SbiClient::new(deadline),
        }
    }

    pub async fn create_sm_context(
        &self,
        request: CreateSmContextRequest,
        trace: &TraceContext,
    ) -> Result<CreateSmContextResponse, SbiError> {
        let base = super::base_url(&self.registry, NfType::Smf, trace).await?;
        let url = format!("{base}/nsmf-pdusession/v1/sm-contexts");
        self.sbi.post_json(&url, trace, &request).await
    }

    pub async fn release_sm_context(
        &self,
        sm_context_ref: &str,
        cause: &str,
        trace: &TraceContext,
    ) -> Result<ReleaseSmContextResponse, SbiError> {
        let base = super::base_url(&self.registry, NfType::Smf, trace).await?;
        let url = format!("{base}/nsmf-pdusession/v1/sm-contexts/{sm_context_ref}/release");
        self.sbi
            .post_json(
                &url,
                trace,
                &ReleaseSmContextRequest {
                    cause: cause.to_string(),
                },
            )
            .await
    }
}
