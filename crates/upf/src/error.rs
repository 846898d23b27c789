//! UPF error kinds (§4.7, §7): mapped both onto the shared problem+json
//! taxonomy (for the health/metrics HTTP surface) and onto PFCP cause codes
//! (for the N4 response path, via [`UpfError::cause`]).

use common::error::{ErrorKind, IntoProblem};
use pfcp::ie::cause::CauseValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpfError {
    #[error("malformed pfcp message: {0}")]
    MalformedMessage(String),
    #[error("mandatory ie missing: {0}")]
    MandatoryIeMissing(String),
    #[error("invalid f-teid: {0}")]
    InvalidFteid(String),
    #[error("pfcp session {0} not found")]
    SessionNotFound(u64),
    #[error("no pfcp association established with peer {0}")]
    NoAssociation(std::net::SocketAddr),
    #[error("rule creation or modification failed: {0}")]
    RuleCreationFailure(String),
    #[error("rule references unknown far {0}")]
    UnknownFar(u32),
}

impl UpfError {
    /// The PFCP cause code a response to the triggering request should
    /// carry, per 3GPP TS 29.244 Table 8.2.1-1.
    pub fn cause(&self) -> CauseValue {
        match self {
            UpfError::MalformedMessage(_) => CauseValue::MandatoryIeIncorrect,
            UpfError::MandatoryIeMissing(_) => CauseValue::MandatoryIeMissing,
            UpfError::InvalidFteid(_) => CauseValue::InvalidFteid,
            UpfError::SessionNotFound(_) => CauseValue::SessionContextNotFound,
            UpfError::NoAssociation(_) => CauseValue::NoEstablishedPfcpassociation,
            UpfError::RuleCreationFailure(_) | UpfError::UnknownFar(_) => {
                CauseValue::RuleCreationModificationFailure
            }
        }
    }
}

impl IntoProblem for UpfError {
    fn kind(&self) -> ErrorKind {
        match self {
            UpfError::MalformedMessage(_)
            | UpfError::MandatoryIeMissing(_)
            | UpfError::InvalidFteid(_) => ErrorKind::Validation,
            UpfError::SessionNotFound(_) => ErrorKind::NotFoundOrInvalidState,
            UpfError::NoAssociation(_) => ErrorKind::ProtocolCauseCoded,
            UpfError::RuleCreationFailure(_) | UpfError::UnknownFar(_) => {
                ErrorKind::ProtocolCauseCoded
            }
        }
    }

    fn title(&self) -> &'static str {
        match self {
            UpfError::MalformedMessage(_) => "malformed pfcp message",
            UpfError::MandatoryIeMissing(_) => "mandatory ie missing",
            UpfError::InvalidFteid(_) => "invalid f-teid",
            UpfError::SessionNotFound(_) => "pfcp session not found",
            UpfError::NoAssociation(_) => "no pfcp association",
            UpfError::RuleCreationFailure(_) => "rule creation or modification failed",
            UpfError::UnknownFar(_) => "rule creation or modification failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_not_found_maps_to_matching_pfcp_cause() {
        let err = UpfError::SessionNotFound(42);
        assert_eq!(err.cause(), CauseValue::SessionContextNotFound);
    }

    #[test]
    fn no_association_is_protocol_cause_coded() {
        let err = UpfError::NoAssociation("10.0.0.1:8805".parse().unwrap());
        assert_eq!(err.kind(), ErrorKind::ProtocolCauseCoded);
        assert_eq!(err.cause(), CauseValue::NoEstablishedPfcpassociation);
    }
}
