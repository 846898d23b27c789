//! SMF config: the common surface plus IP pools, served DNNs, and UPF
//! selection (§6.4).

use common::config::CommonConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IpPoolConfig {
    pub dnn: String,
    pub cidr: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpfSelectionConfig {
    /// Reserved for future static-list selection; today the SMF always
    /// discovers UPF candidates through the NRF and tie-breaks on
    /// priority/capacity (§4.6, §9).
    #[serde(default)]
    pub strategy: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmfConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(rename = "upfSelection", default)]
    pub upf_selection: UpfSelectionConfig,
    #[serde(rename = "ipPools")]
    pub ip_pools: Vec<IpPoolConfig>,
    #[serde(rename = "dnnList")]
    pub dnn_list: Vec<String>,
}
