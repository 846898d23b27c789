//! NRF error kinds, mapped onto `common::error::ErrorKind` (§7).

use common::error::{ErrorKind, IntoProblem};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NrfError {
    #[error("nf instance {0} not found")]
    NotFound(String),
    #[error("nf type {0} is not a recognised network function type")]
    InvalidNfType(String),
}

impl IntoProblem for NrfError {
    fn kind(&self) -> ErrorKind {
        match self {
            NrfError::NotFound(_) => ErrorKind::NotFoundOrInvalidState,
            NrfError::InvalidNfType(_) => ErrorKind::Validation,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            NrfError::NotFound(_) => "NF instance not found",
            NrfError::InvalidNfType(_) => "invalid NF type",
        }
    }
}
