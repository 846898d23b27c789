//! UPF config: the common surface plus the N4/N3/N6 interface blocks (§6.4).

use common::config::CommonConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PfcpConfig {
    #[serde(rename = "bindAddress", default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_pfcp_port")]
    pub port: u16,
    #[serde(rename = "nodeId")]
    pub node_id: String,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_pfcp_port() -> u16 {
    8805
}

#[derive(Debug, Clone, Deserialize)]
pub struct N3Config {
    #[serde(rename = "localAddress")]
    pub local_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct N6Config {
    pub gateway: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpfConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    pub pfcp: PfcpConfig,
    pub n3: N3Config,
    pub n6: N6Config,
    /// DNNs this UPF serves, advertised in its NRF profile so SMF's
    /// discovery filter (§4.6 step 2) can select it.
    #[serde(rename = "dnnList", default)]
    pub dnn_list: Vec<String>,
    /// Association heartbeat grace period before a peer's sessions are
    /// marked orphaned (§4.7 failure semantics; interval left
    /// implementation-defined by §9's open question, default chosen here).
    #[serde(rename = "associationGraceSecs", default = "default_association_grace_secs")]
    pub association_grace_secs: u64,
}

fn default_association_grace_secs() -> u64 {
    60
}
