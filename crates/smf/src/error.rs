//! SMF error kinds (§4.6, §7): subscription-denied, resource-exhausted,
//! upstream-unavailable, protocol/cause-coded, and invalid-state.

use common::error::{ErrorKind, IntoProblem, SbiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmfError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("dnn {0} not permitted by subscription")]
    SubscriptionDenied(String),
    #[error("pdu session {0} not found")]
    SessionNotFound(u8),
    #[error("pdu session {0} is not in a state that permits this operation")]
    InvalidState(u8),
    #[error("no UPF available for dnn {0}")]
    NoUpfAvailable(String),
    #[error("ip pool for dnn {0} is exhausted")]
    IpPoolExhausted(String),
    #[error("udm unavailable: {0}")]
    UdmUnavailable(#[from] SbiError),
    #[error("upf rejected session establishment: {0}")]
    UpfRejected(String),
    #[error("upf unreachable: {0}")]
    UpfUnreachable(String),
}

impl IntoProblem for SmfError {
    fn kind(&self) -> ErrorKind {
        match self {
            SmfError::Validation(_) => ErrorKind::Validation,
            SmfError::SubscriptionDenied(_) => ErrorKind::SubscriptionDenied,
            SmfError::SessionNotFound(_) | SmfError::InvalidState(_) => {
                ErrorKind::NotFoundOrInvalidState
            }
            SmfError::NoUpfAvailable(_) | SmfError::IpPoolExhausted(_) => {
                ErrorKind::ResourceExhausted
            }
            SmfError::UdmUnavailable(_) | SmfError::UpfUnreachable(_) => {
                ErrorKind::UpstreamUnavailable
            }
            SmfError::UpfRejected(_) => ErrorKind::ProtocolCauseCoded,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            SmfError::Validation(_) => "invalid request",
            SmfError::SubscriptionDenied(_) => "dnn not permitted",
            SmfError::SessionNotFound(_) => "pdu session not found",
            SmfError::InvalidState(_) => "invalid session state",
            SmfError::NoUpfAvailable(_) => "no upf available",
            SmfError::IpPoolExhausted(_) => "ip pool exhausted",
            SmfError::UdmUnavailable(_) => "UDM unavailable",
            SmfError::UpfRejected(_) => "upf rejected request",
            SmfError::UpfUnreachable(_) => "upf unreachable",
        }
    }
}
