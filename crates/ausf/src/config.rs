//! AUSF config: the common surface plus the auth-context sweep interval.

use common::config::CommonConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AusfConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(rename = "contextSweepIntervalSecs", default = "default_sweep_interval_secs")]
    pub context_sweep_interval_secs: u64,
}

fn default_sweep_interval_secs() -> u64 {
    10
}
