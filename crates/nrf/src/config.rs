//! NRF-specific config, extending `common::config::CommonConfig` (§6.4).
//! The NRF has no `nrf` block of its own (it doesn't discover through
//! itself) and no type-specific block beyond the lease TTL.

use common::config::CommonConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NrfConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default = "default_ttl_secs")]
    pub lease_ttl_secs: u64,
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_ttl_secs() -> u64 {
    30
}

fn default_sweep_interval_secs() -> u64 {
    5
}
