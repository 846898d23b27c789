//! NRF-facing types and client, shared by every NF (§4.1, §6.1).

use crate::error::SbiError;
use crate::ids::{NfInstanceId, NfType};
use crate::sbi::SbiClient;
use crate::trace::TraceContext;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NfStatus {
    Registered,
    Suspended,
}

/// A network function's registered profile. Serialized as the NRF's
/// `PUT /nnrf-nfm/v1/nf-instances/{id}` body and discovery response item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NfProfile {
    #[serde(rename = "nfInstanceId")]
    pub nf_instance_id: NfInstanceId,
    #[serde(rename = "nfType")]
    pub nf_type: NfType,
    #[serde(default = "default_status")]
    pub status: NfStatus,
    pub plmn: Option<PlmnId>,
    #[serde(rename = "ipv4Addresses", default)]
    pub ipv4_addresses: Vec<String>,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(rename = "sNssaiList", default)]
    pub snssai_list: Vec<crate::ids::Snssai>,
    #[serde(rename = "dnnList", default)]
    pub dnn_list: Vec<String>,
    /// Opaque, NF-type-specific info block (e.g. an SMF's `upfInfo`).
    #[serde(rename = "info", default)]
    pub info: serde_json::Value,
}

fn default_status() -> NfStatus {
    NfStatus::Registered
}

fn default_capacity() -> u32 {
    100
}

fn default_priority() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlmnId {
    pub mcc: String,
    pub mnc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(rename = "heartBeatTimer")]
    pub heartbeat_timer_secs: u64,
}

/// Filters for `Discover`, applied server-side (§4.1).
#[derive(Debug, Clone, Default)]
pub struct DiscoveryFilter {
    pub snssai: Option<crate::ids::Snssai>,
    pub dnn: Option<String>,
}

impl DiscoveryFilter {
    pub fn to_query(&self, target_nf_type: NfType) -> Vec<(String, String)> {
        let mut q = vec![("target-nf-type".to_string(), target_nf_type.to_string())];
        if let Some(s) = &self.snssai {
            q.push(("snssai-sst".to_string(), s.sst.to_string()));
            if let Some(sd) = s.sd {
                q.push(("snssai-sd".to_string(), format!("{:06x}", sd)));
            }
        }
        if let Some(dnn) = &self.dnn {
            q.push(("dnn".to_string(), dnn.clone()));
        }
        q
    }
}

/// A peer-facing client to the NRF, plus the "serve cached discovery on
/// unreachability" fallback named in §4.1/§7.
pub struct RegistryClient {
    base_url: String,
    sbi: SbiClient,
    cache: RwLock<std::collections::HashMap<NfType, (Vec<NfProfile>, Instant)>>,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>, deadline: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            sbi: SbiClient::new(deadline),
            cache: RwLock::new(std::collections::HashMap::new()),
        }
    }

    pub async fn register(
        &self,
        profile: &NfProfile,
        trace: &TraceContext,
    ) -> Result<RegisterResponse, SbiError> {
        let url = format!(
            "{}/nnrf-nfm/v1/nf-instances/{}",
            self.base_url, profile.nf_instance_id
        );
        self.sbi.put_json(&url, trace, profile).await
    }

    pub async fn heartbeat(
        &self,
        instance_id: &NfInstanceId,
        trace: &TraceContext,
    ) -> Result<(), SbiError> {
        let url = format!(
            "{}/nnrf-nfm/v1/nf-instances/{}/heartbeat",
            self.base_url, instance_id
        );
        self.sbi.patch(&url, trace).await
    }

    pub async fn deregister(
        &self,
        instance_id: &NfInstanceId,
        trace: &TraceContext,
    ) -> Result<(), SbiError> {
        let url = format!("{}/nnrf-nfm/v1/nf-instances/{}", self.base_url, instance_id);
        self.sbi.delete(&url, trace).await
    }

    /// Discovers instances of `target_nf_type`. On upstream-unavailable,
    /// falls back to the last successful result for that type, per §4.1's
    /// "registry unreachability is not fatal to peers' request handling."
    pub async fn discover(
        &self,
        target_nf_type: NfType,
        filter: &DiscoveryFilter,
        trace: &TraceContext,
    ) -> Result<Vec<NfProfile>, SbiError> {
        let query = filter.to_query(target_nf_type);
        let query_string = query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}/nnrf-disc/v1/nf-instances?{}", self.base_url, query_string);
        match self.sbi.get_json::<Vec<NfProfile>>(&url, trace).await {
            Ok(profiles) => {
                self.cache
                    .write()
                    .unwrap()
                    .insert(target_nf_type, (profiles.clone(), Instant::now()));
                Ok(profiles)
            }
            Err(err) if err.kind() == crate::error::ErrorKind::UpstreamUnavailable => {
                if let Some((cached, _)) = self.cache.read().unwrap().get(&target_nf_type) {
                    tracing::warn!(
                        target_nf_type = %target_nf_type,
                        "NRF unreachable, serving cached discovery result"
                    );
                    return Ok(cached.clone());
                }
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_filter_renders_query() {
        let filter = DiscoveryFilter {
            snssai: Some(crate::ids::Snssai::new(1, Some(1))),
            dnn: Some("internet".to_string()),
        };
        let query = filter.to_query(NfType::Upf);
        assert!(query.contains(&("target-nf-type".to_string(), "UPF".to_string())));
        assert!(query.contains(&("dnn".to_string(), "internet".to_string())));
    }
}
