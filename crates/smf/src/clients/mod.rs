//! Peer clients discovered through the NRF (§9: "SMF depends on UDM, UPF,
//! Registry").

pub mod udm;
pub mod upf_selector;

use common::error::SbiError;
use common::ids::NfType;
use common::registry::{DiscoveryFilter, RegistryClient};
use common::trace::TraceContext;

pub(crate) async fn base_url(
    registry: &RegistryClient,
    nf_type: NfType,
    trace: &TraceContext,
) -> Result<String, SbiError> {
    let profiles = registry
        .discover(nf_type, &DiscoveryFilter::default(), trace)
        .await?;
    let profile = profiles
        .into_iter()
        .next()
        .ok_or_else(|| SbiError::Unreachable(format!("no {nf_type} instance discovered")))?;
    let host = profile
        .ipv4_addresses
        .first()
        .cloned()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    Ok(format!("http://{host}"))
}
