//! UDM error kinds (§4.3: not-found, credential-algorithm-unsupported,
//! resync-required, upstream-unavailable).

use common::error::{ErrorKind, IntoProblem, SbiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UdmError {
    #[error("subscriber {0} not found")]
    SubscriberNotFound(String),
    #[error("authentication algorithm {0:?} is not supported")]
    AlgorithmUnsupported(String),
    #[error("ue-reported AUTS requires a new resynchronised vector")]
    ResyncRequired,
    #[error("upstream UDR unavailable: {0}")]
    UpstreamUnavailable(#[from] SbiError),
    #[error("no UDR instance discoverable via NRF")]
    NoUdrAvailable,
}

impl IntoProblem for UdmError {
    fn kind(&self) -> ErrorKind {
        match self {
            UdmError::SubscriberNotFound(_) => ErrorKind::NotFoundOrInvalidState,
            UdmError::AlgorithmUnsupported(_) => ErrorKind::Validation,
            UdmError::ResyncRequired => ErrorKind::AuthenticationFailure,
            UdmError::UpstreamUnavailable(_) | UdmError::NoUdrAvailable => {
                ErrorKind::UpstreamUnavailable
            }
        }
    }

    fn title(&self) -> &'static str {
        match self {
            UdmError::SubscriberNotFound(_) => "subscriber not found",
            UdmError::AlgorithmUnsupported(_) => "credential algorithm unsupported",
            UdmError::ResyncRequired => "resynchronisation required",
            UdmError::UpstreamUnavailable(_) => "upstream UDR unavailable",
            UdmError::NoUdrAvailable => "no UDR instance available",
        }
    }
}
