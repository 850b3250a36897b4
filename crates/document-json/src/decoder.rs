//! JSON bytes → host value → [`Document`].
//!
//! The caller's target type decides how the JSON is read: a `{"x": 300}`
//! input decodes into a struct with an `x: i32` field but fails for `x: i8`.
//! The decoded value is left in the target and mirrored as a document whose
//! number widths follow the target's field types.

use crate::classify::to_document;
use crate::error::{Result, TranscodeError};
use document_core::Document;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Decode `data` into `target` and build the matching document.
///
/// `target` is overwritten only when the JSON decodes successfully. The
/// document root is an object for maps and structs, an array for sequences,
/// a string or bool for those scalars; any other top-level shape is
/// rejected (see [`to_document`]).
///
/// # Example
/// ```
/// use document_core::Kind;
/// use document_json::unmarshal;
///
/// let mut scores: Vec<i32> = Vec::new();
/// let doc = unmarshal(b"[1,2,3]", &mut scores).unwrap();
/// assert_eq!(scores, vec![1, 2, 3]);
/// assert_eq!(doc.kind(), Kind::Array);
/// assert_eq!(doc.root().children()[0].kind(), Kind::Int32);
/// ```
pub fn unmarshal<T>(data: &[u8], target: &mut T) -> Result<Document>
where
    T: Serialize + DeserializeOwned,
{
    *target = serde_json::from_slice(data).map_err(TranscodeError::Decode)?;
    to_document(&*target)
}

/// Decode `data` without a static target shape.
///
/// The untyped [`Value`] is the target, so every number is classified by
/// serde_json's own representation: integers become `Int64`, everything else
/// `Float64`.
pub fn unmarshal_value(data: &[u8]) -> Result<(Value, Document)> {
    let mut value = Value::Null;
    let doc = unmarshal(data, &mut value)?;
    Ok((value, doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_core::Kind;

    #[test]
    fn malformed_json_is_a_decode_error() {
        let mut target = Vec::<i32>::new();
        let err = unmarshal(b"[1,2", &mut target).unwrap_err();
        assert!(matches!(err, TranscodeError::Decode(_)));
        assert!(target.is_empty());
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let mut target = String::new();
        assert!(matches!(
            unmarshal(b"true", &mut target),
            Err(TranscodeError::Decode(_))
        ));
    }

    #[test]
    fn untyped_numbers_are_int64_or_float64() {
        let (value, doc) = unmarshal_value(br#"{"a":1,"b":1.5,"c":-2}"#).unwrap();
        assert_eq!(value["a"], 1);
        let root = doc.root();
        assert_eq!(root.get("a").unwrap().kind(), Kind::Int64);
        assert_eq!(root.get("b").unwrap().kind(), Kind::Float64);
        assert_eq!(root.get("c").unwrap().kind(), Kind::Int64);
    }

    #[test]
    fn untyped_top_level_number_is_unsupported() {
        assert!(matches!(
            unmarshal_value(b"7"),
            Err(TranscodeError::UnsupportedType { kind: "int64", .. })
        ));
    }

    #[test]
    fn untyped_null_is_unsupported() {
        // serde_json::Value::Null serializes as unit, not as an empty Option.
        assert!(matches!(
            unmarshal_value(b"null"),
            Err(TranscodeError::UnsupportedType { kind: "unit", .. })
        ));
    }
}
