//! RFC 7807 problem+json error surface and the error-kind taxonomy of SPEC_FULL.md §7.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error-kind taxonomy shared by every NF. Each NF's own error enum maps its
/// local variants onto one of these kinds via [`CoreError::kind`]; the kind
/// alone decides the HTTP status and retriability, never the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request, missing mandatory field, enum out of range.
    Validation,
    /// Unknown entity or illegal state transition.
    NotFoundOrInvalidState,
    /// Mismatched RES*, expired AuthContext.
    AuthenticationFailure,
    /// Slice/DNN not allowed for the subscriber.
    SubscriptionDenied,
    /// IP pool full, no eligible UPF, PFCP queue full.
    ResourceExhausted,
    /// Peer NF unreachable or timed out.
    UpstreamUnavailable,
    /// PFCP (or other protocol) cause code propagated verbatim.
    ProtocolCauseCoded,
    /// Unexpected invariant violation.
    Internal,
}

impl ErrorKind {
    /// Whether a caller may retry this error with bounded backoff (§7).
    pub fn retriable(self) -> bool {
        matches!(self, ErrorKind::ResourceExhausted | ErrorKind::UpstreamUnavailable)
    }

    fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFoundOrInvalidState => StatusCode::CONFLICT,
            ErrorKind::AuthenticationFailure => StatusCode::FORBIDDEN,
            ErrorKind::SubscriptionDenied => StatusCode::FORBIDDEN,
            ErrorKind::ResourceExhausted => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::ProtocolCauseCoded => StatusCode::BAD_GATEWAY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// RFC 7807 `application/problem+json` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    pub fn new(kind: ErrorKind, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            problem_type: None,
            title: title.into(),
            status: kind.status().as_u16(),
            detail: detail.into(),
            instance: None,
        }
    }
}

/// Implemented by every NF's error enum to render it as a problem+json body.
pub trait IntoProblem {
    fn kind(&self) -> ErrorKind;
    fn title(&self) -> &'static str;
    fn into_problem(self) -> ProblemDetails
    where
        Self: std::fmt::Display + Sized,
    {
        let kind = self.kind();
        let title = self.title();
        ProblemDetails::new(kind, title, self.to_string())
    }
}

/// A boxed problem-bearing error, used at axum handler boundaries so each NF
/// can `?` its local error type straight into a response.
pub struct ApiError(pub ProblemDetails);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = axum::Json(self.0).into_response();
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert("content-type", "application/problem+json".parse().unwrap());
        response
    }
}

impl<E> From<E> for ApiError
where
    E: IntoProblem + std::fmt::Display,
{
    fn from(err: E) -> Self {
        ApiError(err.into_problem())
    }
}

/// Transport-level error for the SBI client in [`crate::sbi`], shared by all
/// peer-calling NFs so upstream-unavailable handling is consistent.
#[derive(Debug, Error)]
pub enum SbiError {
    #[error("upstream request timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
    #[error("upstream returned {status}: {detail}")]
    Problem { status: u16, detail: String },
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

impl SbiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SbiError::Timeout(_) | SbiError::Unreachable(_) => ErrorKind::UpstreamUnavailable,
            SbiError::Problem { status, .. } if *status == 403 => ErrorKind::SubscriptionDenied,
            SbiError::Problem { .. } => ErrorKind::Internal,
            SbiError::Decode(_) => ErrorKind::Internal,
        }
    }
}
