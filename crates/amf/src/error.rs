//! AMF error kinds (§4.5: not-authenticated, subscription-not-allowed,
//! no-session-resources, upstream-unavailable, invalid-state).

use common::error::{ErrorKind, IntoProblem, SbiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmfError {
    #[error("UE {0} has no active UE context")]
    NoContext(String),
    #[error("UE {0} is not authenticated within the required window")]
    NotAuthenticated(String),
    #[error("pending authentication {expected} does not match confirmed {actual}")]
    AuthContextMismatch { expected: String, actual: String },
    #[error("requested nssai is not allowed for this subscriber")]
    SubscriptionNotAllowed,
    #[error("illegal state transition for UE {0}")]
    InvalidState(String),
    #[error("PDU session {0} not found")]
    PduSessionNotFound(u8),
    #[error("upstream NF unavailable: {0}")]
    UpstreamUnavailable(#[from] SbiError),
}

impl IntoProblem for AmfError {
    fn kind(&self) -> ErrorKind {
        match self {
            AmfError::NoContext(_) | AmfError::PduSessionNotFound(_) => {
                ErrorKind::NotFoundOrInvalidState
            }
            AmfError::NotAuthenticated(_) | AmfError::AuthContextMismatch { .. } => {
                ErrorKind::AuthenticationFailure
            }
            AmfError::SubscriptionNotAllowed => ErrorKind::SubscriptionDenied,
            AmfError::InvalidState(_) => ErrorKind::NotFoundOrInvalidState,
            AmfError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AmfError::NoContext(_) => "no UE context",
            AmfError::PduSessionNotFound(_) => "PDU session not found",
            AmfError::NotAuthenticated(_) => "not authenticated",
            AmfError::AuthContextMismatch { .. } => "authentication context mismatch",
            AmfError::SubscriptionNotAllowed => "subscription not allowed",
            AmfError::InvalidState(_) => "invalid state",
            AmfError::UpstreamUnavailable(_) => "upstream unavailable",
        }
    }
}
