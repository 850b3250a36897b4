//! Sections: the named, tagged nodes of a document tree.
//!
//! A section is created empty (or seeded) for one [`Kind`] and then filled by
//! [`Section::absorb`], which accepts any `Serialize` value whose shape
//! matches that kind. [`Section::produce`] goes the other way, writing the
//! stored payload into any `Deserialize` slot.

use crate::error::{Result, SectionError};
use crate::kind::Kind;
use crate::number::Number;
use crate::ser::NodeSerializer;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Payload of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Children keyed by their own [`Section::name`].
    Object(Vec<Section>),
    /// Ordered children; names are empty.
    Array(Vec<Section>),
    String(String),
    Bool(bool),
    Nil,
    Number(Number),
    Bytes(Vec<u8>),
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Object(_) => Kind::Object,
            Node::Array(_) => Kind::Array,
            Node::String(_) => Kind::String,
            Node::Bool(_) => Kind::Bool,
            Node::Nil => Kind::Nil,
            Node::Number(n) => n.kind(),
            Node::Bytes(_) => Kind::Bytes,
        }
    }
}

/// A named node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    node: Node,
}

impl Section {
    pub fn new_object(name: impl Into<String>) -> Self {
        Self::with_node(name, Node::Object(Vec::new()))
    }

    pub fn new_array(name: impl Into<String>) -> Self {
        Self::with_node(name, Node::Array(Vec::new()))
    }

    pub fn new_string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_node(name, Node::String(value.into()))
    }

    pub fn new_bool(name: impl Into<String>, value: bool) -> Self {
        Self::with_node(name, Node::Bool(value))
    }

    pub fn new_nil(name: impl Into<String>) -> Self {
        Self::with_node(name, Node::Nil)
    }

    pub fn new_number(name: impl Into<String>, value: Number) -> Self {
        Self::with_node(name, Node::Number(value))
    }

    pub fn new_bytes(name: impl Into<String>, value: Vec<u8>) -> Self {
        Self::with_node(name, Node::Bytes(value))
    }

    pub(crate) fn with_node(name: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }

    /// Key of this section inside its parent object; empty for roots and
    /// array elements.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.node.kind()
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Child of an object section by key.
    pub fn get(&self, key: &str) -> Option<&Section> {
        match &self.node {
            Node::Object(children) => children.iter().find(|c| c.name == key),
            _ => None,
        }
    }

    /// Children of an object or array; empty for leaves.
    pub fn children(&self) -> &[Section] {
        match &self.node {
            Node::Object(children) | Node::Array(children) => children,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// Validate `value` against this section's kind and store it.
    ///
    /// The value is converted in full before anything is stored, so a failed
    /// absorb leaves the section unchanged. A value of a different kind fails
    /// with [`SectionError::KindMismatch`] instead of retagging the section.
    pub fn absorb<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let node = value.serialize(NodeSerializer)?;
        let (expected, found) = (self.kind(), node.kind());
        if expected != found {
            return Err(SectionError::KindMismatch { expected, found });
        }
        self.node = node;
        Ok(())
    }

    /// Write this section's payload into `slot`.
    ///
    /// `slot` is only overwritten on success.
    pub fn produce<T: DeserializeOwned>(&self, slot: &mut T) -> Result<()> {
        *slot = self.produce_value()?;
        Ok(())
    }

    /// Returning form of [`Section::produce`].
    pub fn produce_value<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(self)
    }
}
