//! PFCP Error Handling
//!
//! This module provides centralized error message templates for consistent error reporting
//! across the pfcp library.
//!
//! ## Version Strategy
//!
//! - **v0.2.4 (Current)**: Error message constants (this module)
//!   - Centralizes error strings for consistency
//!   - Non-breaking change
//!   - All functions continue to return `std::io::Error`
//!
//! - **v0.3.0 (Future)**: Custom `PfcpError` enum
//!   - Structured error type with variants
//!   - Breaking change (changes error types in signatures)
//!   - Will leverage these message templates in Display implementations
//!   - See `docs/analysis/ongoing/custom-error-type.md` for design
//!
//! ## Usage
//!
//! ```rust
//! use std::io;
//! use pfcp::error::messages;
//!
//! # fn example() -> Result<(), io::Error> {
//! // Before: Hard-coded error strings
//! // return Err(io::Error::new(io::ErrorKind::InvalidData, "Missing PDR ID"));
//!
//! // After: Centralized constants
//! let ie_name = "PDR ID";
//! return Err(io::Error::new(
//!     io::ErrorKind::InvalidData,
//!     format!("{}", messages::missing_mandatory_ie_short(ie_name))
//! ));
//! # }
//! ```

/// Error message templates for consistent error reporting
pub mod messages {
    // ========================================================================
    // Missing IE Errors
    // ========================================================================

    /// Format: "Missing mandatory {ie_name} IE"
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::missing_mandatory_ie_short("PDR ID");
    /// assert_eq!(error_msg, "Missing mandatory PDR ID IE");
    /// ```
    pub fn missing_mandatory_ie_short(ie_name: &str) -> String {
        format!("Missing mandatory {} IE", ie_name)
    }

    /// Format: "Missing {ie_name} IE"
    ///
    /// Used for both mandatory and conditional IEs where context makes it clear.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::missing_ie("Node ID");
    /// assert_eq!(error_msg, "Missing Node ID IE");
    /// ```
    pub fn missing_ie(ie_name: &str) -> String {
        format!("Missing {} IE", ie_name)
    }

    /// Format: "{ie_name} IE not found"
    ///
    /// Alternative phrasing for IE lookup failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::ie_not_found("F-SEID");
    /// assert_eq!(error_msg, "F-SEID IE not found");
    /// ```
    pub fn ie_not_found(ie_name: &str) -> String {
        format!("{} IE not found", ie_name)
    }

    /// Format: "{ie_name} is required"
    ///
    /// Used in builder validation and field checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::ie_required("Cause");
    /// assert_eq!(error_msg, "Cause is required");
    /// ```
    pub fn ie_required(ie_name: &str) -> String {
        format!("{} is required", ie_name)
    }

    /// Format: "{ie_name} IE is mandatory"
    ///
    /// Explicit mandatory IE error for 3GPP compliance messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::ie_is_mandatory("Cause");
    /// assert_eq!(error_msg, "Cause IE is mandatory");
    /// ```
    pub fn ie_is_mandatory(ie_name: &str) -> String {
        format!("{} IE is mandatory", ie_name)
    }

    // ========================================================================
    // Length Errors
    // ========================================================================

    /// Format: "{ie_name} requires at least {min_bytes} byte(s)"
    ///
    /// Used when IE payload is too short.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::requires_at_least_bytes("PDR ID", 2);
    /// assert_eq!(error_msg, "PDR ID requires at least 2 bytes");
    /// ```
    pub fn requires_at_least_bytes(ie_name: &str, min_bytes: usize) -> String {
        let byte_word = if min_bytes == 1 { "byte" } else { "bytes" };
        format!("{} requires at least {} {}", ie_name, min_bytes, byte_word)
    }

    /// Format: "{ie_name} payload too short"
    ///
    /// Concise version for payload length errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::payload_too_short("Reporting Triggers");
    /// assert_eq!(error_msg, "Reporting Triggers payload too short");
    /// ```
    pub fn payload_too_short(ie_name: &str) -> String {
        format!("{} payload too short", ie_name)
    }

    /// Format: "{ie_name} payload too short: expected at least {min_bytes} byte(s)"
    ///
    /// Detailed version with expected length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::payload_too_short_expected("Report Type", 1);
    /// assert_eq!(error_msg, "Report Type payload too short: expected at least 1 byte");
    /// ```
    pub fn payload_too_short_expected(ie_name: &str, min_bytes: usize) -> String {
        let byte_word = if min_bytes == 1 { "byte" } else { "bytes" };
        format!(
            "{} payload too short: expected at least {} {}",
            ie_name, min_bytes, byte_word
        )
    }

    /// Format: "{context} too short"
    ///
    /// Generic "too short" error for headers, payloads, or buffers.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::too_short("Header");
    /// assert_eq!(error_msg, "Header too short");
    /// ```
    pub fn too_short(context: &str) -> String {
        format!("{} too short", context)
    }

    /// Format: "Invalid {ie_name} length: expected at least {expected} bytes, got {actual}"
    ///
    /// Precise length mismatch with both expected and actual values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_length("F-TEID", 9, 5);
    /// assert_eq!(error_msg, "Invalid F-TEID length: expected at least 9 bytes, got 5");
    /// ```
    pub fn invalid_length(ie_name: &str, expected: usize, actual: usize) -> String {
        format!(
            "Invalid {} length: expected at least {} bytes, got {}",
            ie_name, expected, actual
        )
    }

    // ========================================================================
    // Invalid Value Errors
    // ========================================================================

    /// Format: "Invalid {field_name} value"
    ///
    /// Generic invalid value error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_value("DSCP");
    /// assert_eq!(error_msg, "Invalid DSCP value");
    /// ```
    pub fn invalid_value(field_name: &str) -> String {
        format!("Invalid {} value", field_name)
    }

    /// Format: "Invalid {field_name} value: {reason}"
    ///
    /// Invalid value with explanation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_value_reason("gate status", "must be 0-3");
    /// assert_eq!(error_msg, "Invalid gate status value: must be 0-3");
    /// ```
    pub fn invalid_value_reason(field_name: &str, reason: &str) -> String {
        format!("Invalid {} value: {}", field_name, reason)
    }

    // ========================================================================
    // Builder Errors
    // ========================================================================

    /// Format: "{field_name} is required"
    ///
    /// Builder validation: missing required field.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::builder_field_required("pdr_id");
    /// assert_eq!(error_msg, "pdr_id is required");
    /// ```
    pub fn builder_field_required(field_name: &str) -> String {
        format!("{} is required", field_name)
    }

    /// Format: "Builder {builder_type} is missing required field '{field_name}'"
    ///
    /// Detailed builder error with context.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::builder_missing_field("CreatePdrBuilder", "pdr_id");
    /// assert_eq!(
    ///     error_msg,
    ///     "Builder CreatePdrBuilder is missing required field 'pdr_id'"
    /// );
    /// ```
    pub fn builder_missing_field(builder_type: &str, field_name: &str) -> String {
        format!(
            "Builder {} is missing required field '{}'",
            builder_type, field_name
        )
    }

    // ========================================================================
    // Security / Validation Errors
    // ========================================================================

    /// Format: "Zero-length IE not allowed for {ie_name} (IE type: {ie_type}) per 3GPP TS 29.244 R18"
    ///
    /// Security validation: zero-length IE protection.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::zero_length_ie_not_allowed("F-TEID", 21);
    /// assert_eq!(
    ///     error_msg,
    ///     "Zero-length IE not allowed for F-TEID (IE type: 21) per 3GPP TS 29.244 R18"
    /// );
    /// ```
    pub fn zero_length_ie_not_allowed(ie_name: &str, ie_type: u16) -> String {
        format!(
            "Zero-length IE not allowed for {} (IE type: {}) per 3GPP TS 29.244 R18",
            ie_name, ie_type
        )
    }

    // ========================================================================
    // UTF-8 Encoding Errors
    // ========================================================================

    /// Format: "Invalid UTF-8 in {ie_name}"
    ///
    /// UTF-8 decoding failure in IE payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use pfcp::error::messages;
    ///
    /// let error_msg = messages::invalid_utf8("Application ID");
    /// assert_eq!(error_msg, "Invalid UTF-8 in Application ID");
    /// ```
    pub fn invalid_utf8(ie_name: &str) -> String {
        format!("Invalid UTF-8 in {}", ie_name)
    }
}

use std::fmt;

use crate::ie::IeType;
use crate::message::MsgType;

/// Structured error type returned by every IE and message codec in this crate.
///
/// Supersedes the raw `String`/`io::Error` era of this module; variants carry
/// the fields callers need to react programmatically (which IE, which
/// message, expected vs. actual length) while [`fmt::Display`] renders the
/// same wording as the [`messages`] templates above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PfcpError {
    /// A mandatory IE is absent, either from a top-level message or from a
    /// grouped IE's payload (`parent_ie` set in the latter case).
    MissingMandatoryIe {
        ie_type: IeType,
        message_type: Option<MsgType>,
        parent_ie: Option<IeType>,
    },
    /// A fixed-length IE's payload was too short (or, for variable-length
    /// IEs with a minimum, below that minimum).
    InvalidLength {
        ie_name: String,
        ie_type: IeType,
        expected: usize,
        actual: usize,
    },
    /// An IE's payload parsed to the right length but an enumerated or
    /// range-constrained field held a value outside its allowed set.
    InvalidValue {
        ie_name: String,
        value: String,
        reason: String,
    },
    /// A UTF-8 string IE's payload was not valid UTF-8.
    EncodingError {
        ie_name: String,
        ie_type: IeType,
        source: std::str::Utf8Error,
    },
    /// A builder's cross-field consistency check failed (e.g. a threshold
    /// set without the measurement it gates).
    ValidationError {
        builder: String,
        field: String,
        reason: String,
    },
    /// A builder's `build()` was called without a required field set.
    BuilderMissingField {
        field_name: String,
        builder_type: String,
    },
    /// The fixed 8/12-byte PFCP header failed to parse.
    InvalidHeader {
        reason: String,
        position: Option<usize>,
    },
    /// A parsed message violated a message-level constraint (duplicate IE,
    /// incompatible combination of optional IEs, and so on).
    InvalidMessage {
        message_type: MsgType,
        reason: String,
    },
    /// A message body failed to parse below the message-constraint level
    /// (e.g. a duplicate occurrence of an IE while walking the TLV stream).
    MessageParseError {
        message_type: Option<MsgType>,
        reason: String,
    },
}

impl PfcpError {
    pub fn invalid_length(ie_name: impl Into<String>, ie_type: IeType, expected: usize, actual: usize) -> Self {
        PfcpError::InvalidLength {
            ie_name: ie_name.into(),
            ie_type,
            expected,
            actual,
        }
    }

    pub fn invalid_value(ie_name: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PfcpError::InvalidValue {
            ie_name: ie_name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn encoding_error(ie_name: impl Into<String>, ie_type: IeType, source: std::str::Utf8Error) -> Self {
        PfcpError::EncodingError {
            ie_name: ie_name.into(),
            ie_type,
            source,
        }
    }

    pub fn validation_error(builder: impl Into<String>, field: impl Into<String>, reason: impl Into<String>) -> Self {
        PfcpError::ValidationError {
            builder: builder.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for the common "mandatory IE missing from a grouped IE's payload" case.
    pub fn missing_ie_in_grouped(ie_type: IeType, parent_ie: IeType) -> Self {
        PfcpError::MissingMandatoryIe {
            ie_type,
            message_type: None,
            parent_ie: Some(parent_ie),
        }
    }
}

impl fmt::Display for PfcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PfcpError::MissingMandatoryIe { ie_type, parent_ie, .. } => match parent_ie {
                Some(parent) => write!(
                    f,
                    "{}",
                    messages::missing_ie(&format!("{:?} (inside {:?})", ie_type, parent))
                ),
                None => write!(f, "{}", messages::missing_mandatory_ie_short(&format!("{:?}", ie_type))),
            },
            PfcpError::InvalidLength { ie_name, expected, actual, .. } => {
                write!(f, "{}", messages::invalid_length(ie_name, *expected, *actual))
            }
            PfcpError::InvalidValue { ie_name, reason, .. } => {
                write!(f, "{}", messages::invalid_value_reason(ie_name, reason))
            }
            PfcpError::EncodingError { ie_name, source, .. } => {
                write!(f, "{}: {}", messages::invalid_utf8(ie_name), source)
            }
            PfcpError::ValidationError { builder, field, reason } => {
                write!(f, "{} field '{}': {}", builder, field, reason)
            }
            PfcpError::BuilderMissingField { field_name, builder_type } => {
                write!(f, "{}", messages::builder_missing_field(builder_type, field_name))
            }
            PfcpError::InvalidHeader { reason, position } => match position {
                Some(pos) => write!(f, "{} (at byte {})", reason, pos),
                None => write!(f, "{}", reason),
            },
            PfcpError::InvalidMessage { message_type, reason } => {
                write!(f, "invalid {:?}: {}", message_type, reason)
            }
            PfcpError::MessageParseError { message_type, reason } => match message_type {
                Some(mt) => write!(f, "failed to parse {:?}: {}", mt, reason),
                None => write!(f, "failed to parse message: {}", reason),
            },
        }
    }
}

impl std::error::Error for PfcpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PfcpError::EncodingError { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::messages;

    #[test]
    fn test_missing_ie_messages() {
        assert_eq!(
            messages::missing_mandatory_ie_short("PDR ID"),
            "Missing mandatory PDR ID IE"
        );
        assert_eq!(messages::missing_ie("Node ID"), "Missing Node ID IE");
        assert_eq!(messages::ie_not_found("F-SEID"), "F-SEID IE not found");
        assert_eq!(messages::ie_required("Cause"), "Cause is required");
        assert_eq!(
            messages::ie_is_mandatory("Node ID"),
            "Node ID IE is mandatory"
        );
    }

    #[test]
    fn test_length_error_messages() {
        assert_eq!(
            messages::requires_at_least_bytes("PDR ID", 2),
            "PDR ID requires at least 2 bytes"
        );
        assert_eq!(
            messages::requires_at_least_bytes("Cause", 1),
            "Cause requires at least 1 byte"
        );
        assert_eq!(
            messages::payload_too_short("Reporting Triggers"),
            "Reporting Triggers payload too short"
        );
        assert_eq!(
            messages::payload_too_short_expected("Report Type", 1),
            "Report Type payload too short: expected at least 1 byte"
        );
        assert_eq!(messages::too_short("Header"), "Header too short");
        assert_eq!(
            messages::invalid_length("F-TEID", 9, 5),
            "Invalid F-TEID length: expected at least 9 bytes, got 5"
        );
    }

    #[test]
    fn test_invalid_value_messages() {
        assert_eq!(messages::invalid_value("DSCP"), "Invalid DSCP value");
        assert_eq!(
            messages::invalid_value_reason("gate status", "must be 0-3"),
            "Invalid gate status value: must be 0-3"
        );
    }

    #[test]
    fn test_builder_error_messages() {
        assert_eq!(
            messages::builder_field_required("pdr_id"),
            "pdr_id is required"
        );
        assert_eq!(
            messages::builder_missing_field("CreatePdrBuilder", "pdr_id"),
            "Builder CreatePdrBuilder is missing required field 'pdr_id'"
        );
    }

    #[test]
    fn test_security_error_messages() {
        assert_eq!(
            messages::zero_length_ie_not_allowed("F-TEID", 21),
            "Zero-length IE not allowed for F-TEID (IE type: 21) per 3GPP TS 29.244 R18"
        );
    }

    #[test]
    fn test_utf8_error_messages() {
        assert_eq!(
            messages::invalid_utf8("Application ID"),
            "Invalid UTF-8 in Application ID"
        );
    }

    #[test]
    fn test_byte_pluralization() {
        // Test singular "byte"
        assert_eq!(
            messages::requires_at_least_bytes("Test", 1),
            "Test requires at least 1 byte"
        );
        assert_eq!(
            messages::payload_too_short_expected("Test", 1),
            "Test payload too short: expected at least 1 byte"
        );

        // Test plural "bytes"
        assert_eq!(
            messages::requires_at_least_bytes("Test", 2),
            "Test requires at least 2 bytes"
        );
        assert_eq!(
            messages::payload_too_short_expected("Test", 10),
            "Test payload too short: expected at least 10 bytes"
        );
    }
}
