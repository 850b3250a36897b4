//! Absorb: a `serde::Serializer` that turns any host value into a [`Node`].
//!
//! Width is taken from the serde method that fires (`serialize_i8` yields an
//! `Int8` number). Unsigned widths move up to the next signed width so no
//! value is lost; `u64`/`i128`/`u128` land in `Int64`, or in `Float64` when
//! they do not fit.

use crate::error::{Result, SectionError};
use crate::number::Number;
use crate::section::{Node, Section};
use serde::ser::{self, Impossible, Serialize};

pub(crate) struct NodeSerializer;

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = SectionError;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Node> {
        Ok(Node::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node> {
        Ok(Node::Number(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Node> {
        Ok(Node::Number(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Node> {
        Ok(Node::Number(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Node> {
        Ok(Node::Number(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Node> {
        Ok(Node::Number(Number::from_i128(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Node> {
        Ok(Node::Number(i16::from(v).into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Node> {
        Ok(Node::Number(i32::from(v).into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Node> {
        Ok(Node::Number(i64::from(v).into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Node> {
        Ok(Node::Number(Number::from_u64(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Node> {
        Ok(Node::Number(Number::from_u128(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Node> {
        Number::float32(v).map(Node::Number)
    }

    fn serialize_f64(self, v: f64) -> Result<Node> {
        Number::float64(v).map(Node::Number)
    }

    fn serialize_char(self, v: char) -> Result<Node> {
        Ok(Node::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Node> {
        Ok(Node::String(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node> {
        Ok(Node::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Node> {
        Ok(Node::Nil)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Node> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node> {
        Ok(Node::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node> {
        Ok(Node::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Node> {
        Ok(Node::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Node> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Node> {
        let inner = value.serialize(NodeSerializer)?;
        Ok(tagged(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray> {
        Ok(SerializeArray {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArray> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeArray> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeObject> {
        Ok(SerializeObject {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeObject> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            entries: Vec::with_capacity(len),
        })
    }
}

/// Externally tagged enum payload: `{ variant: inner }`.
fn tagged(variant: &str, inner: Node) -> Node {
    Node::Object(vec![Section::with_node(variant, inner)])
}

fn element<T: ?Sized + Serialize>(value: &T) -> Result<Section> {
    Ok(Section::with_node("", value.serialize(NodeSerializer)?))
}

pub(crate) struct SerializeArray {
    items: Vec<Section>,
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(element(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeArray {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

pub(crate) struct SerializeTupleVariant {
    variant: &'static str,
    items: Vec<Section>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(element(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(tagged(self.variant, Node::Array(self.items)))
    }
}

pub(crate) struct SerializeObject {
    entries: Vec<Section>,
    next_key: Option<String>,
}

impl ser::SerializeMap for SerializeObject {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| SectionError::Message("map value without a key".into()))?;
        self.entries
            .push(Section::with_node(key, value.serialize(NodeSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Object(self.entries))
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.entries
            .push(Section::with_node(key, value.serialize(NodeSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Object(self.entries))
    }
}

pub(crate) struct SerializeStructVariant {
    variant: &'static str,
    entries: Vec<Section>,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Node;
    type Error = SectionError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.entries
            .push(Section::with_node(key, value.serialize(NodeSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(tagged(self.variant, Node::Object(self.entries)))
    }
}

/// Map keys: strings pass through, scalars are stringified the way JSON
/// encoders do, anything else is rejected.
struct KeySerializer;

macro_rules! key_to_string {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<String> {
                Ok(v.to_string())
            }
        )*
    };
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = SectionError;

    type SerializeSeq = Impossible<String, SectionError>;
    type SerializeTuple = Impossible<String, SectionError>;
    type SerializeTupleStruct = Impossible<String, SectionError>;
    type SerializeTupleVariant = Impossible<String, SectionError>;
    type SerializeMap = Impossible<String, SectionError>;
    type SerializeStruct = Impossible<String, SectionError>;
    type SerializeStructVariant = Impossible<String, SectionError>;

    key_to_string! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_char: char,
        serialize_str: &str,
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(SectionError::KeyMustBeString("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(SectionError::KeyMustBeString("float"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(SectionError::KeyMustBeString("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(SectionError::KeyMustBeString("none"))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(SectionError::KeyMustBeString("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(SectionError::KeyMustBeString("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String> {
        Err(SectionError::KeyMustBeString("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(SectionError::KeyMustBeString("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(SectionError::KeyMustBeString("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(SectionError::KeyMustBeString("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(SectionError::KeyMustBeString("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(SectionError::KeyMustBeString("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(SectionError::KeyMustBeString("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(SectionError::KeyMustBeString("enum"))
    }
}
