//! # document-core
//!
//! A self-describing, typed document tree. Every node is a [`Section`]: a name
//! plus a [`Node`] drawn from a closed set of kinds (object, array, string,
//! bool, nil, sized numbers and opaque bytes). The tree is built by
//! **absorbing** any `serde::Serialize` value and read back by **producing**
//! into any `serde::Deserialize` slot, so numeric width survives the trip:
//! an `i8` field becomes an `Int8` section and refuses to produce into a
//! slot that cannot hold it.
//!
//! ## Quick start
//!
//! ```rust
//! use document_core::{Document, Kind, Section};
//! use std::collections::BTreeMap;
//!
//! let mut scores = BTreeMap::new();
//! scores.insert("alice", 95i32);
//! scores.insert("bob", 87i32);
//!
//! let mut root = Section::new_object("");
//! root.absorb(&scores).unwrap();
//! let doc = Document::new(root);
//!
//! assert_eq!(doc.kind(), Kind::Object);
//! assert_eq!(doc.root().get("alice").unwrap().kind(), Kind::Int32);
//!
//! let back: BTreeMap<String, i32> = doc.root().produce_value().unwrap();
//! assert_eq!(back["bob"], 87);
//! ```
//!
//! ## Modules
//!
//! - [`document`] — the immutable [`Document`] wrapper and its typed accessors
//! - [`section`] — [`Section`], [`Node`] and the absorb/produce operations
//! - [`number`] — [`Number`] with its [`Width`] tag
//! - [`kind`] — the closed [`Kind`] tag
//! - [`error`] — [`SectionError`]

mod de;
pub mod document;
pub mod error;
pub mod kind;
pub mod number;
pub mod section;
mod ser;

pub use document::Document;
pub use error::SectionError;
pub use kind::Kind;
pub use number::{widen_f32, Number, Width};
pub use section::{Node, Section};
