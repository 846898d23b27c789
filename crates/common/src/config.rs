//! YAML configuration surface, §6.4.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct NfIdentity {
    pub name: String,
    #[serde(rename = "instanceId")]
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub enabled: bool,
    pub cert: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SbiConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(rename = "bindAddress", default = "default_bind_address")]
    pub bind_address: String,
    pub port: u16,
    #[serde(default)]
    pub tls: Option<TlsConfig>,
}

impl SbiConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct NrfConfig {
    pub url: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(rename = "heartbeatInterval", default = "default_heartbeat_secs")]
    pub heartbeat_interval_secs: u64,
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl NrfConfig {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

fn default_true() -> bool {
    true
}

fn default_heartbeat_secs() -> u64 {
    10
}

fn default_ttl_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlmnConfig {
    pub mcc: String,
    pub mnc: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

fn default_metrics_port() -> u16 {
    9090
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TracingConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The section every NF config shares, per §6.4. Type-specific blocks
/// (`ipPools`, `pfcp`, `auth`, ...) are deserialized by each NF's own config
/// struct, which flattens this one in.
#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    pub nf: NfIdentity,
    pub sbi: SbiConfig,
    #[serde(default)]
    pub nrf: Option<NrfConfig>,
    pub plmn: Option<PlmnConfig>,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Loads and parses a YAML config file. NF binaries call this from
/// `main()` with the path given on `--config`.
pub fn load<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading config {}: {e}", path.display()))?;
    let parsed = serde_yaml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("parsing config {}: {e}", path.display()))?;
    Ok(parsed)
}
