//! Error types for JSON transcoding.

use document_core::SectionError;
use thiserror::Error;

/// Errors that can occur while decoding JSON into a document or encoding a
/// document back to JSON.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// The input was not valid JSON, or did not fit the target type.
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The decode target holds no value (an empty `Option`), so there is
    /// nothing to build a document from.
    #[error("invalid decode target: {type_name} is empty after decoding")]
    InvalidTarget { type_name: &'static str },

    /// The host value or document kind has no JSON document mapping.
    #[error("unsupported type {kind} ({type_name})")]
    UnsupportedType {
        kind: &'static str,
        type_name: &'static str,
    },

    /// serde_json failed to write the projected value.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// NaN and infinities have no JSON number form.
    #[error("non-finite float {0} cannot be encoded as JSON")]
    NonFiniteFloat(f64),

    /// A section rejected an absorb or produce.
    #[error(transparent)]
    Section(#[from] SectionError),
}

/// Convenience alias used throughout document-json.
pub type Result<T> = std::result::Result<T, TranscodeError>;
