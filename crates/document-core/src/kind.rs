//! The closed set of node kinds a [`Section`](crate::Section) can carry.

use std::fmt;

/// Tag of a document node. Fixed when the section is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Bool,
    Nil,
    /// Platform-sized signed integer.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    /// Opaque byte payload. Has no JSON representation.
    Bytes,
}

impl Kind {
    /// Lower-case name used in error messages and tree dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Nil => "nil",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Bytes => "bytes",
        }
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            Kind::Int
                | Kind::Int8
                | Kind::Int16
                | Kind::Int32
                | Kind::Int64
                | Kind::Float32
                | Kind::Float64
        )
    }

    /// Object and array sections hold children; everything else is a leaf.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Object | Kind::Array)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
