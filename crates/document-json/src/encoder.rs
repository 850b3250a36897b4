//! [`Document`] → untyped JSON value → bytes.
//!
//! The root kind picks the slot the root section produces into. Numeric
//! sections produce into a slot of their exact width and are then widened to
//! a JSON number, so the width tag itself does not survive encoding: only the
//! value does.

use crate::error::{Result, TranscodeError};
use document_core::{widen_f32, Document, Kind};
use serde_json::{Map, Value};
use std::any::type_name;

/// Project a document onto an untyped JSON value.
pub fn to_value(doc: &Document) -> Result<Value> {
    let value = match doc.kind() {
        Kind::Object => {
            let mut map = Map::new();
            doc.as_object()?.produce(&mut map)?;
            Value::Object(map)
        }
        Kind::Array => {
            let mut items: Vec<Value> = Vec::new();
            doc.as_array()?.produce(&mut items)?;
            Value::Array(items)
        }
        Kind::String => {
            let mut s = String::new();
            doc.as_string()?.produce(&mut s)?;
            Value::String(s)
        }
        Kind::Bool => {
            let mut b = false;
            doc.as_bool()?.produce(&mut b)?;
            Value::Bool(b)
        }
        Kind::Nil => {
            let mut nil: Option<Value> = None;
            doc.as_nil()?.produce(&mut nil)?;
            Value::from(nil)
        }
        Kind::Int => Value::from(doc.as_number()?.produce_value::<isize>()?),
        Kind::Int8 => Value::from(doc.as_number()?.produce_value::<i8>()?),
        Kind::Int16 => Value::from(doc.as_number()?.produce_value::<i16>()?),
        Kind::Int32 => Value::from(doc.as_number()?.produce_value::<i32>()?),
        Kind::Int64 => Value::from(doc.as_number()?.produce_value::<i64>()?),
        Kind::Float32 => float(widen_f32(doc.as_number()?.produce_value::<f32>()?))?,
        Kind::Float64 => float(doc.as_number()?.produce_value::<f64>()?)?,
        Kind::Bytes => {
            return Err(TranscodeError::UnsupportedType {
                kind: Kind::Bytes.as_str(),
                type_name: type_name::<Document>(),
            })
        }
    };
    Ok(value)
}

/// Encode a document as compact JSON.
///
/// # Example
/// ```
/// use document_core::{Document, Section};
/// use document_json::marshal;
///
/// let doc = Document::new(Section::new_string("", "hello"));
/// assert_eq!(marshal(&doc).unwrap(), br#""hello""#);
/// ```
pub fn marshal(doc: &Document) -> Result<Vec<u8>> {
    let value = to_value(doc)?;
    serde_json::to_vec(&value).map_err(TranscodeError::Encode)
}

/// Encode a document as indented JSON.
pub fn marshal_pretty(doc: &Document) -> Result<Vec<u8>> {
    let value = to_value(doc)?;
    serde_json::to_vec_pretty(&value).map_err(TranscodeError::Encode)
}

fn float(v: f64) -> Result<Value> {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .ok_or(TranscodeError::NonFiniteFloat(v))
}
