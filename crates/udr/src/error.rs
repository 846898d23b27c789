//! UDR error kinds (§4.2: not-found, unauthorised, storage-unavailable).

use common::error::{ErrorKind, IntoProblem};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UdrError {
    #[error("subscriber {0} not found")]
    SubscriberNotFound(String),
    #[error("auth subscription for {0} not found")]
    AuthSubscriptionNotFound(String),
    #[error("no sm subscription for {supi} on dnn {dnn}")]
    SmSubscriptionNotFound { supi: String, dnn: String },
    #[error("sqn sequence space exhausted for {0}")]
    SqnExhausted(String),
}

impl IntoProblem for UdrError {
    fn kind(&self) -> ErrorKind {
        match self {
            UdrError::SqnExhausted(_) => ErrorKind::ResourceExhausted,
            _ => ErrorKind::NotFoundOrInvalidState,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            UdrError::SubscriberNotFound(_) => "subscriber not found",
            UdrError::AuthSubscriptionNotFound(_) => "authentication subscription not found",
            UdrError::SmSubscriptionNotFound { .. } => "sm subscription not found",
            UdrError::SqnExhausted(_) => "sqn sequence space exhausted",
        }
    }
}
