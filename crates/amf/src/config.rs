//! AMF config: the common surface plus GUAMI/TAI assignment and the
//! registration timer (§6.4, §4.5 "assigns GUAMI from local config and TAI
//! from serving cell" — the serving RAN is out of scope, so TAI is also
//! taken from local config, see DESIGN.md).

use common::config::CommonConfig;
use common::ids::{Guami, Tai};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GuamiConfig {
    #[serde(rename = "amfRegionId")]
    pub amf_region_id: u8,
    #[serde(rename = "amfSetId")]
    pub amf_set_id: u16,
    #[serde(rename = "amfPointer")]
    pub amf_pointer: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaiConfig {
    pub tac: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmfConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    pub guami: GuamiConfig,
    pub tai: TaiConfig,
    #[serde(rename = "t3512Secs", default = "default_t3512_secs")]
    pub t3512_secs: u32,
}

fn default_t3512_secs() -> u32 {
    3600
}

/// The resolved, instance-scoped identity a procedure needs on every call;
/// built once in `main` from config + the registered instance id.
#[derive(Debug, Clone)]
pub struct AmfIdentity {
    pub instance_id: String,
    pub guami: Guami,
    pub tai: Tai,
    pub t3512_secs: u32,
    pub serving_network_name: String,
}

impl AmfConfig {
    pub fn resolve_identity(&self, instance_id: String) -> anyhow::Result<AmfIdentity> {
        let plmn = self
            .common
            .plmn
            .clone()
            .ok_or_else(|| anyhow::anyhow!("amf requires plmn configuration"))?;
        Ok(AmfIdentity {
            instance_id,
            guami: Guami {
                mcc: plmn.mcc.clone(),
                mnc: plmn.mnc.clone(),
                amf_region_id: self.guami.amf_region_id,
                amf_set_id: self.guami.amf_set_id,
                amf_pointer: self.guami.amf_pointer,
            },
            tai: Tai {
                mcc: plmn.mcc.clone(),
                mnc: plmn.mnc.clone(),
                tac: self.tai.tac,
            },
            t3512_secs: self.t3512_secs,
            serving_network_name: format!(
                "5G:mnc{}.mcc{}.3gppnetwork.org",
                plmn.mnc, plmn.mcc
            ),
        })
    }
}
