//! # document-json
//!
//! JSON transcoder for [`document_core`] trees.
//!
//! Decoding reads JSON into a caller-supplied typed target and mirrors that
//! value as a [`Document`](document_core::Document); the target's field
//! types decide each number's width. Encoding projects a document back onto
//! an untyped `serde_json::Value` and writes it out.
//!
//! ## Quick start
//!
//! ```rust
//! use document_core::Kind;
//! use document_json::{marshal, unmarshal};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Default)]
//! struct Reading {
//!     sensor: String,
//!     level: i8,
//! }
//!
//! let mut reading = Reading::default();
//! let doc = unmarshal(br#"{"sensor":"t1","level":-4}"#, &mut reading).unwrap();
//! assert_eq!(reading.level, -4);
//! assert_eq!(doc.root().get("level").unwrap().kind(), Kind::Int8);
//!
//! assert_eq!(marshal(&doc).unwrap(), br#"{"sensor":"t1","level":-4}"#);
//!
//! // 300 does not fit an i8 field.
//! assert!(unmarshal(br#"{"sensor":"t1","level":300}"#, &mut reading).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`classify`] — host value shape → root section
//! - [`decoder`] — JSON bytes → typed target → document
//! - [`encoder`] — document → `serde_json::Value` → JSON bytes
//! - [`transcoder`] — [`JsonTranscoder`] handle over both directions
//! - [`error`] — [`TranscodeError`]

pub mod classify;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod transcoder;

pub use classify::{classify, to_document, Shape};
pub use decoder::{unmarshal, unmarshal_value};
pub use encoder::{marshal, marshal_pretty, to_value};
pub use error::TranscodeError;
pub use transcoder::JsonTranscoder;
