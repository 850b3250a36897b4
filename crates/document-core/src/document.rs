//! The immutable document wrapper.

use crate::error::{Result, SectionError};
use crate::kind::Kind;
use crate::section::Section;

/// A document: exactly one root [`Section`], read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Section,
}

impl Document {
    pub fn new(root: Section) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Section {
        &self.root
    }

    pub fn into_root(self) -> Section {
        self.root
    }

    /// Kind of the root section.
    pub fn kind(&self) -> Kind {
        self.root.kind()
    }

    pub fn as_object(&self) -> Result<&Section> {
        self.expect(Kind::Object)
    }

    pub fn as_array(&self) -> Result<&Section> {
        self.expect(Kind::Array)
    }

    pub fn as_string(&self) -> Result<&Section> {
        self.expect(Kind::String)
    }

    pub fn as_bool(&self) -> Result<&Section> {
        self.expect(Kind::Bool)
    }

    pub fn as_nil(&self) -> Result<&Section> {
        self.expect(Kind::Nil)
    }

    pub fn as_bytes(&self) -> Result<&Section> {
        self.expect(Kind::Bytes)
    }

    /// Root section if it holds a number of any width.
    pub fn as_number(&self) -> Result<&Section> {
        if self.kind().is_number() {
            Ok(&self.root)
        } else {
            Err(SectionError::NotANumber { found: self.kind() })
        }
    }

    fn expect(&self, expected: Kind) -> Result<&Section> {
        let found = self.kind();
        if found == expected {
            Ok(&self.root)
        } else {
            Err(SectionError::KindMismatch { expected, found })
        }
    }
}

impl From<Section> for Document {
    fn from(root: Section) -> Self {
        Self::new(root)
    }
}
