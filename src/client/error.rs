// ABOUTME: Error types covering validation, transport and gateway failure classes
// ABOUTME: Every failure surfaces to callers inside a SendResult entry, never as a panic

use std::str::Utf8Error;
use thiserror::Error;

use crate::datatypes::TransportFault;

/// Failure classes of the send pipeline and callback decoding.
///
/// Validation variants are raised before any transport contact; the
/// transport and gateway variants abort the remaining parts of a batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IpxError {
    /// Message bytes are not well-formed UTF-8
    #[error("message is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// A character falls outside the GSM 7-bit default alphabet
    #[error("character '{character}' (U+{code:04X}) is outside the GSM 7-bit alphabet")]
    Alphabet { character: char, code: u32 },

    /// Segmentation would exceed the per-message part cap
    #[error("message would need {parts} parts, at most {max} are allowed")]
    TooManySegments { parts: usize, max: usize },

    /// SOAP-level fault from the transport collaborator
    #[error("transport fault: {0}")]
    Transport(#[from] TransportFault),

    /// Gateway reported a hard failure for the whole request
    #[error("gateway error {response_code} ({description}): {response_message}")]
    Gateway {
        response_code: i32,
        response_message: String,
        description: &'static str,
        reason_code: Option<i32>,
        reason_description: Option<&'static str>,
    },

    /// A partial-success response whose per-recipient code list cannot be
    /// reconciled with the recipients that were sent to
    #[error("unparseable partial success response: {0:?}")]
    PartialSuccessFormat(String),
}

/// Result type alias for fallible operations of this crate.
pub type IpxResult<T> = Result<T, IpxError>;
