//! UDM config: the common surface (§6.4); `auth.algorithm`/`keyLength`
//! are read by the AUSF/UDM's client but MILENAGE is the only algorithm
//! this core implements (§4.3: `credential-algorithm-unsupported`).

use common::config::CommonConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthAlgorithmConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(rename = "keyLength", default = "default_key_length")]
    pub key_length: u16,
}

fn default_algorithm() -> String {
    "milenage".to_string()
}

fn default_key_length() -> u16 {
    128
}

#[derive(Debug, Clone, Deserialize)]
pub struct UdmConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default)]
    pub auth: Option<AuthAlgorithmConfig>,
}
