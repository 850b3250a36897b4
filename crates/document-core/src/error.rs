//! Error type for absorb/produce contract violations.

use crate::kind::Kind;
use crate::number::Width;
use std::fmt::Display;
use thiserror::Error;

/// Errors raised while building a section from a host value or writing a
/// section back into a host slot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    /// The value handed to a section did not match the section's kind.
    #[error("kind mismatch: section is {expected}, value is {found}")]
    KindMismatch { expected: Kind, found: Kind },

    /// A number of any width was required.
    #[error("expected a number, section is {found}")]
    NotANumber { found: Kind },

    /// An integer does not fit the width it must be stored at.
    #[error("number {value} out of range for {width}")]
    OutOfRange { value: String, width: Width },

    /// NaN and infinities cannot be stored.
    #[error("non-finite float {0}")]
    NonFinite(f64),

    /// Object keys must be strings (or scalars that stringify cleanly).
    #[error("object key must be a string, got {0}")]
    KeyMustBeString(&'static str),

    /// Free-form error raised through serde (`invalid type`, `missing field`, ...).
    #[error("{0}")]
    Message(String),
}

impl serde::ser::Error for SectionError {
    fn custom<T: Display>(msg: T) -> Self {
        SectionError::Message(msg.to_string())
    }
}

impl serde::de::Error for SectionError {
    fn custom<T: Display>(msg: T) -> Self {
        SectionError::Message(msg.to_string())
    }
}

/// Convenience alias used throughout document-core.
pub type Result<T> = std::result::Result<T, SectionError>;
