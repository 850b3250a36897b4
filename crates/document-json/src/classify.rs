//! Value classifier: decides which document kind a host value maps to and
//! builds the root section for it.
//!
//! Classification only looks at the outermost shape. `Some(x)` and newtype
//! wrappers are transparent, so `Option<Vec<i32>>` holding a vector classifies
//! as a sequence. Elements of containers are never visited here; the section
//! absorbs them afterwards.

use crate::error::{Result, TranscodeError};
use document_core::{Document, Number, Section, SectionError, Width};
use serde::ser::{self, Serialize};
use std::any::type_name;
use std::fmt;

/// Outermost shape of a host value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Map,
    Struct,
    /// Externally tagged enum carrying data (`{ "Variant": ... }`).
    Variant,
    Seq,
    String(String),
    Bool(bool),
    Number(Width),
    Bytes,
    /// `()` and unit structs.
    Unit,
    /// An empty `Option`.
    Null,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Map => "map",
            Shape::Struct => "struct",
            Shape::Variant => "enum variant",
            Shape::Seq => "sequence",
            Shape::String(_) => "string",
            Shape::Bool(_) => "bool",
            Shape::Number(width) => width.kind().as_str(),
            Shape::Bytes => "bytes",
            Shape::Unit => "unit",
            Shape::Null => "null",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify the outermost shape of `value`.
pub fn classify<T: ?Sized + Serialize>(value: &T) -> Result<Shape> {
    Ok(value.serialize(Classifier)?)
}

/// Build a document from a host value.
///
/// Maps, structs and data-carrying enum variants become `Object` roots,
/// sequences become `Array` roots, strings and bools become scalar roots.
/// An empty `Option` is an [`TranscodeError::InvalidTarget`]; every other
/// shape is [`TranscodeError::UnsupportedType`].
pub fn to_document<T: ?Sized + Serialize>(value: &T) -> Result<Document> {
    let mut root = match classify(value)? {
        Shape::Map | Shape::Struct | Shape::Variant => Section::new_object(""),
        Shape::Seq => Section::new_array(""),
        Shape::String(s) => Section::new_string("", s),
        Shape::Bool(b) => Section::new_bool("", b),
        Shape::Null => {
            return Err(TranscodeError::InvalidTarget {
                type_name: type_name::<T>(),
            })
        }
        other => {
            return Err(TranscodeError::UnsupportedType {
                kind: other.name(),
                type_name: type_name::<T>(),
            })
        }
    };
    root.absorb(value)?;
    Ok(Document::new(root))
}

type Classified<T> = std::result::Result<T, SectionError>;

struct Classifier;

impl ser::Serializer for Classifier {
    type Ok = Shape;
    type Error = SectionError;

    type SerializeSeq = Skip;
    type SerializeTuple = Skip;
    type SerializeTupleStruct = Skip;
    type SerializeTupleVariant = Skip;
    type SerializeMap = Skip;
    type SerializeStruct = Skip;
    type SerializeStructVariant = Skip;

    fn serialize_bool(self, v: bool) -> Classified<Shape> {
        Ok(Shape::Bool(v))
    }

    fn serialize_i8(self, _v: i8) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int8))
    }

    fn serialize_i16(self, _v: i16) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int16))
    }

    fn serialize_i32(self, _v: i32) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int32))
    }

    fn serialize_i64(self, _v: i64) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int64))
    }

    fn serialize_i128(self, v: i128) -> Classified<Shape> {
        Ok(Shape::Number(Number::from_i128(v).width()))
    }

    fn serialize_u8(self, _v: u8) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int16))
    }

    fn serialize_u16(self, _v: u16) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int32))
    }

    fn serialize_u32(self, _v: u32) -> Classified<Shape> {
        Ok(Shape::Number(Width::Int64))
    }

    fn serialize_u64(self, v: u64) -> Classified<Shape> {
        Ok(Shape::Number(Number::from_u64(v).width()))
    }

    fn serialize_u128(self, v: u128) -> Classified<Shape> {
        Ok(Shape::Number(Number::from_u128(v).width()))
    }

    fn serialize_f32(self, _v: f32) -> Classified<Shape> {
        Ok(Shape::Number(Width::Float32))
    }

    fn serialize_f64(self, _v: f64) -> Classified<Shape> {
        Ok(Shape::Number(Width::Float64))
    }

    fn serialize_char(self, v: char) -> Classified<Shape> {
        Ok(Shape::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Classified<Shape> {
        Ok(Shape::String(v.to_owned()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Classified<Shape> {
        Ok(Shape::Bytes)
    }

    fn serialize_none(self) -> Classified<Shape> {
        Ok(Shape::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(
        self,
        value: &T,
    ) -> Classified<Shape> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Classified<Shape> {
        Ok(Shape::Unit)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Classified<Shape> {
        Ok(Shape::Unit)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Classified<Shape> {
        Ok(Shape::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Classified<Shape> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Classified<Shape> {
        Ok(Shape::Variant)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Classified<Skip> {
        Ok(Skip(Shape::Seq))
    }

    fn serialize_tuple(self, _len: usize) -> Classified<Skip> {
        Ok(Skip(Shape::Seq))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Classified<Skip> {
        Ok(Skip(Shape::Seq))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Classified<Skip> {
        Ok(Skip(Shape::Variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Classified<Skip> {
        Ok(Skip(Shape::Map))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Classified<Skip> {
        Ok(Skip(Shape::Struct))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Classified<Skip> {
        Ok(Skip(Shape::Variant))
    }
}

/// Compound serializer that ignores its contents and reports the shape it
/// was opened with.
struct Skip(Shape);

macro_rules! impl_skip {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl ser::$trait for Skip {
                type Ok = Shape;
                type Error = SectionError;

                fn $method<T: ?Sized + Serialize>(
                    &mut self,
                    _value: &T,
                ) -> Classified<()> {
                    Ok(())
                }

                fn end(self) -> Classified<Shape> {
                    Ok(self.0)
                }
            }
        )*
    };
}

impl_skip! {
    SerializeSeq::serialize_element,
    SerializeTuple::serialize_element,
    SerializeTupleStruct::serialize_field,
    SerializeTupleVariant::serialize_field,
}

impl ser::SerializeMap for Skip {
    type Ok = Shape;
    type Error = SectionError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, _key: &T) -> Classified<()> {
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(
        &mut self,
        _value: &T,
    ) -> Classified<()> {
        Ok(())
    }

    fn end(self) -> Classified<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeStruct for Skip {
    type Ok = Shape;
    type Error = SectionError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Classified<()> {
        Ok(())
    }

    fn end(self) -> Classified<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeStructVariant for Skip {
    type Ok = Shape;
    type Error = SectionError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Classified<()> {
        Ok(())
    }

    fn end(self) -> Classified<Shape> {
        Ok(self.0)
    }
}
