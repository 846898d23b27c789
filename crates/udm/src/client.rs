//! A client to the UDR, discovered through the NRF (§4.3, §9: "UDM
//! depends on UDR"). DTOs here mirror the wire shape UDR's HTTP layer
//! serialises; UDM treats UDR as an external peer, not a shared Rust type.

use common::error::SbiError;
use common::ids::{Dnn, NfType, Supi};
use common::registry::{DiscoveryFilter, RegistryClient};
use common::sbi::SbiClient;
use common::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct UdrSubscriber {
    pub supi: Supi,
    pub subscribed_dnns: Vec<Dnn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UdrOpVariant {
    #[serde(rename = "opc")]
    Opc(String),
    #[serde(rename = "op")]
    Op(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UdrAuthCredential {
    pub supi: Supi,
    pub k_hex: String,
    pub op: UdrOpVariant,
    pub amf: u16,
    pub algorithm: String,
    pub sqn: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UdrSqnResponse {
    pub sqn: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UdrSqnRequest {
    pub delta: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UdrSmSubscription {
    pub dnn: Dnn,
    pub session_ambr_uplink: String,
    pub session_ambr_downlink: String,
    pub default_5qi: u8,
    pub arp_priority: u8,
    pub allowed_pdu_session_types: Vec<String>,
}

pub struct UdrClient {
    registry: Arc<RegistryClient>,
    sbi: SbiClient,
}

impl UdrClient {
    pub fn new(registry: Arc<RegistryClient>, deadline: Duration) -> Self {
        Self {
            registry,
            sbi: SbiClient::new(deadline),
        }
    }

    async fn base_url(&self, trace: &TraceContext) -> Result<String, SbiError> {
        let profiles = self
            .registry
            .discover(NfType::Udr, &DiscoveryFilter::default(), trace)
            .await?;
        let profile = profiles
            .into_iter()
            .next()
            .ok_or_else(|| SbiError::Unreachable("no UDR instance discovered".to_string()))?;
        let host = profile
            .ipv4_addresses
            .first()
            .cloned()
            .unwrap_or_else(|| "127.0.0.1".to_string());
        Ok(format!("http://{host}"))
    }

    pub async fn get_subscriber(
        &self,
        supi: &Supi,
        trace: &TraceContext,
    ) -> Result<UdrSubscriber, SbiError> {
        let base = self.base_url(trace).await?;
        let url = format!("{base}/nudr-dr/v1/subscription-data/{supi}/subscriber-data");
        self.sbi.get_json(&url, trace).await
    }

    pub async fn get_auth_subscription(
        &self,
        supi: &Supi,
        trace: &TraceContext,
    ) -> Result<UdrAuthCredential, SbiError> {
        let base = self.base_url(trace).await?;
        let url = format!(
            "{base}/nudr-dr/v1/subscription-data/{supi}/authentication-data/authentication-subscription"
        );
        self.sbi.get_json(&url, trace).await
    }

    pub async fn increment_sqn(
        &self,
        supi: &Supi,
        delta: u64,
        trace: &TraceContext,
    ) -> Result<u64, SbiError> {
        let base = self.base_url(trace).await?;
        let url = format!(
            "{base}/nudr-dr/v1/subscription-data/{supi}/authentication-data/authentication-subscription/sqn"
        );
        let resp: UdrSqnResponse = self.sbi.patch_json(&url, trace, &UdrSqnRequest { delta }).await?;
        Ok(resp.sqn)
    }

    pub async fn resync_sqn(
        &self,
        supi: &Supi,
        sqn_ms: u64,
        trace: &TraceContext,
    ) -> Result<u64, SbiError> {
        let base = self.base_url(trace).await?;
        let url = format!(
            "{base}/nudr-dr/v1/subscription-data/{supi}/authentication-data/authentication-subscription/sqn/resync"
        );
        #[derive(Serialize)]
        struct Req {
            sqn_ms: u64,
        }
        let resp: UdrSqnResponse = self.sbi.patch_json(&url, trace, &Req { sqn_ms }).await?;
        Ok(resp.sqn)
    }

    pub async fn get_sm_data(
        &self,
        supi: &Supi,
        dnn: Option<&Dnn>,
        trace: &TraceContext,
    ) -> Result<Vec<UdrSmSubscription>, SbiError> {
        let base = self.base_url(trace).await?;
        let url = match dnn {
            Some(dnn) => format!(
                "{base}/nudr-dr/v1/subscription-data/{supi}/provisioned-data/sm-data?dnn={dnn}"
            ),
            None => format!("{base}/nudr-dr/v1/subscription-data/{supi}/provisioned-data/sm-data"),
        };
        self.sbi.get_json(&url, trace).await
    }
}
