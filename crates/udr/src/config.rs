//! UDR config: the common surface plus a seed-data path for lab
//! provisioning (§6.4, §6.5).

use crate::model::{AuthCredential, SmSubscription, Subscriber};
use common::config::CommonConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UdrConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default)]
    pub seed_subscribers_path: Option<String>,
}

/// One entry of the seed-data file referenced by `seed_subscribers_path`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub subscriber: Subscriber,
    pub credential: AuthCredential,
    #[serde(default)]
    pub sm_subscriptions: Vec<SmSubscription>,
}

pub fn load_seed(path: &str) -> anyhow::Result<Vec<SeedEntry>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}
