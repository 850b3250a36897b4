//! Produce: `&Section` as a `serde::Deserializer`, so a section can be read
//! into any `Deserialize` slot. Widths are surfaced exactly (`Int8` visits
//! `visit_i8`), which lets the slot's own visitor reject values it cannot
//! hold instead of this crate coercing them.

use crate::error::{Result, SectionError};
use crate::number::{Number, Width};
use crate::section::{Node, Section};
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, DeserializeSeed, Unexpected, Visitor};
use serde::forward_to_deserialize_any;
use std::slice;

impl<'de> de::Deserializer<'de> for &'de Section {
    type Error = SectionError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.node() {
            Node::Object(children) => {
                let mut access = ObjectAccess {
                    entries: children.iter(),
                    value: None,
                };
                visitor.visit_map(&mut access)
            }
            Node::Array(items) => {
                let mut access = ArrayAccess {
                    items: items.iter(),
                };
                visitor.visit_seq(&mut access)
            }
            Node::String(s) => visitor.visit_borrowed_str(s),
            Node::Bool(b) => visitor.visit_bool(*b),
            Node::Nil => visitor.visit_unit(),
            Node::Number(n) => visit_number(n, visitor),
            Node::Bytes(b) => visitor.visit_borrowed_bytes(b),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.node() {
            Node::Nil => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        match self.node() {
            Node::String(s) => visitor.visit_enum(BorrowedStrDeserializer::new(s)),
            Node::Object(children) if children.len() == 1 => {
                visitor.visit_enum(EnumAccess {
                    variant: &children[0],
                })
            }
            _ => Err(de::Error::invalid_type(unexpected(self), &"enum")),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

fn visit_number<'de, V: Visitor<'de>>(number: &Number, visitor: V) -> Result<V::Value> {
    let width = number.width();
    let Some(v) = number.as_i64() else {
        // Float32 arrives already widened to its shortest decimal.
        return visitor.visit_f64(number.as_f64());
    };
    match width {
        Width::Int8 => visitor.visit_i8(narrow(v, width)?),
        Width::Int16 => visitor.visit_i16(narrow(v, width)?),
        Width::Int32 => visitor.visit_i32(narrow(v, width)?),
        _ => visitor.visit_i64(v),
    }
}

fn narrow<T: TryFrom<i64>>(v: i64, width: Width) -> Result<T> {
    T::try_from(v).map_err(|_| SectionError::OutOfRange {
        value: v.to_string(),
        width,
    })
}

fn unexpected(section: &Section) -> Unexpected<'_> {
    match section.node() {
        Node::Object(_) => Unexpected::Map,
        Node::Array(_) => Unexpected::Seq,
        Node::String(s) => Unexpected::Str(s),
        Node::Bool(b) => Unexpected::Bool(*b),
        Node::Nil => Unexpected::Unit,
        Node::Number(n) => match n.as_i64() {
            Some(v) => Unexpected::Signed(v),
            None => Unexpected::Float(n.as_f64()),
        },
        Node::Bytes(b) => Unexpected::Bytes(b),
    }
}

struct ObjectAccess<'de> {
    entries: slice::Iter<'de, Section>,
    value: Option<&'de Section>,
}

impl<'de> de::MapAccess<'de> for ObjectAccess<'de> {
    type Error = SectionError;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        let Some(entry) = self.entries.next() else {
            return Ok(None);
        };
        self.value = Some(entry);
        seed.deserialize(KeyDeserializer { key: entry.name() })
            .map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value> {
        let entry = self
            .value
            .take()
            .ok_or_else(|| SectionError::Message("value requested before key".into()))?;
        seed.deserialize(entry)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

/// Object keys are stored as text. Integer, bool and char key slots parse
/// them back, undoing the stringification absorb applies.
struct KeyDeserializer<'de> {
    key: &'de str,
}

macro_rules! deserialize_parsed_key {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
                match self.key.parse::<$ty>() {
                    Ok(v) => visitor.$visit(v),
                    Err(_) => Err(de::Error::invalid_value(
                        Unexpected::Str(self.key),
                        &visitor,
                    )),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for KeyDeserializer<'de> {
    type Error = SectionError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_borrowed_str(self.key)
    }

    deserialize_parsed_key! {
        deserialize_bool => visit_bool: bool,
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_char => visit_char: char,
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_enum(BorrowedStrDeserializer::new(self.key))
    }

    forward_to_deserialize_any! {
        f32 f64 str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct ArrayAccess<'de> {
    items: slice::Iter<'de, Section>,
}

impl<'de> de::SeqAccess<'de> for ArrayAccess<'de> {
    type Error = SectionError;

    fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>> {
        match self.items.next() {
            Some(item) => seed.deserialize(item).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

/// `{ variant: payload }` object read as an externally tagged enum.
struct EnumAccess<'de> {
    variant: &'de Section,
}

impl<'de> de::EnumAccess<'de> for EnumAccess<'de> {
    type Error = SectionError;
    type Variant = Self;

    fn variant_seed<V: DeserializeSeed<'de>>(self, seed: V) -> Result<(V::Value, Self)> {
        let tag = seed.deserialize(BorrowedStrDeserializer::<SectionError>::new(
            self.variant.name(),
        ))?;
        Ok((tag, self))
    }
}

impl<'de> de::VariantAccess<'de> for EnumAccess<'de> {
    type Error = SectionError;

    fn unit_variant(self) -> Result<()> {
        match self.variant.node() {
            Node::Nil => Ok(()),
            _ => Err(de::Error::invalid_type(
                unexpected(self.variant),
                &"unit variant",
            )),
        }
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value> {
        seed.deserialize(self.variant)
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value> {
        de::Deserializer::deserialize_seq(self.variant, visitor)
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        de::Deserializer::deserialize_map(self.variant, visitor)
    }
}
