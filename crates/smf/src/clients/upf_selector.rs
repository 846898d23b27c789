//! UPF selection (§4.6 step 3, §9): discover UPF candidates through the NRF
//! filtered by DNN/S-NSSAI, tie-broken on priority (lower wins) then
//! capacity (higher wins).

use common::error::SbiError;
use common::ids::{Dnn, NfType, Snssai};
use common::registry::{DiscoveryFilter, NfProfile, RegistryClient};
use common::trace::TraceContext;

pub async fn select_upf(
    registry: &RegistryClient,
    dnn: &Dnn,
    snssai: &Snssai,
    trace: &TraceContext,
) -> Result<NfProfile, SbiError> {
    let filter = DiscoveryFilter {
        snssai: Some(*snssai),
        dnn: Some(dnn.to_string()),
    };
    let candidates = registry.discover(NfType::Upf, &filter, trace).await?;
    candidates
        .into_iter()
        .min_by_key(|p| (p.priority, std::cmp::Reverse(p.capacity)))
        .ok_or_else(|| SbiError::Unreachable(format!("no UPF serves dnn {dnn}")))
}
