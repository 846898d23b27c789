pub mod ausf;
pub mod smf;
pub mod udm;

use common::error::SbiError;
use common::ids::NfType;
use common::registry::{DiscoveryFilter, RegistryClient};

/// Shared by all three peer clients: first-profile selection over a
/// registry discovery result, per §4.1's ordering and §9's "AMF depends on
/// AUSF, UDM, SMF, Registry" layering.
pub(crate) async fn base_url(
    registry: &RegistryClient,
    nf_type: NfType,
    trace: &common::trace::TraceContext,
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
