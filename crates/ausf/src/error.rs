//! AUSF error kinds (§4.4: auth-context-not-found, auth-context-expired,
//! udm-unavailable, algorithm-mismatch).

use common::error::{ErrorKind, IntoProblem, SbiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AusfError {
    #[error("auth context {0} not found")]
    ContextNotFound(String),
    #[error("auth context {0} expired")]
    ContextExpired(String),
    #[error("udm unavailable: {0}")]
    UdmUnavailable(#[from] SbiError),
}

impl IntoProblem for AusfError {
    fn kind(&self) -> ErrorKind {
        match self {
            AusfError::ContextNotFound(_) | AusfError::ContextExpired(_) => {
                ErrorKind::NotFoundOrInvalidState
            }
            AusfError::UdmUnavailable(_) => ErrorKind::UpstreamUnavailable,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AusfError::ContextNotFound(_) => "auth context not found",
            AusfError::ContextExpired(_) => "auth context expired",
            AusfError::UdmUnavailable(_) => "UDM unavailable",
        }
    }
}
