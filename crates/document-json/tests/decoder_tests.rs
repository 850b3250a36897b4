use document_core::{Kind, Node, Number, Section};
use document_json::{unmarshal, TranscodeError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
struct Narrow {
    x: i8,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
struct Wide {
    x: i32,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
struct Server {
    host: String,
    port: u16,
    tls: bool,
    weight: f32,
    tags: Vec<String>,
    backup: Option<Box<Server>>,
}

// ============================================================================
// Object roots
// ============================================================================

#[test]
fn decode_map_into_object() {
    let mut target: HashMap<String, i64> = HashMap::new();
    let doc = unmarshal(br#"{"a":1,"b":2}"#, &mut target).unwrap();

    assert_eq!(target["b"], 2);
    assert_eq!(doc.kind(), Kind::Object);
    assert_eq!(doc.root().len(), 2);
    assert_eq!(
        doc.root().get("a").unwrap().node(),
        &Node::Number(Number::from(1i64))
    );
}

#[test]
fn decode_struct_into_object_with_field_widths() {
    let mut server = Server::default();
    let json = br#"{"host":"db","port":5432,"tls":true,"weight":0.5,"tags":["a","b"],"backup":null}"#;
    let doc = unmarshal(json, &mut server).unwrap();

    assert_eq!(server.port, 5432);
    let root = doc.as_object().unwrap();
    assert_eq!(root.get("host").unwrap().kind(), Kind::String);
    assert_eq!(root.get("port").unwrap().kind(), Kind::Int32);
    assert_eq!(root.get("tls").unwrap().kind(), Kind::Bool);
    assert_eq!(root.get("weight").unwrap().kind(), Kind::Float32);
    assert_eq!(root.get("tags").unwrap().kind(), Kind::Array);
    assert_eq!(root.get("tags").unwrap().len(), 2);
    assert_eq!(root.get("backup").unwrap().kind(), Kind::Nil);
}

#[test]
fn decode_nested_struct() {
    let mut server = Server::default();
    let json = br#"{"host":"a","port":1,"tls":false,"weight":1,"tags":[],
        "backup":{"host":"b","port":2,"tls":true,"weight":2,"tags":[],"backup":null}}"#;
    let doc = unmarshal(json, &mut server).unwrap();

    let backup = doc.root().get("backup").unwrap();
    assert_eq!(backup.kind(), Kind::Object);
    assert_eq!(
        backup.get("host").unwrap().node(),
        &Node::String("b".into())
    );
}

// ============================================================================
// Array roots
// ============================================================================

#[test]
fn decode_array_returns_populated_array_document() {
    let mut target: Vec<i64> = Vec::new();
    let doc = unmarshal(b"[1,2,3]", &mut target).unwrap();

    assert_eq!(doc.kind(), Kind::Array);
    let children = doc.root().children();
    assert_eq!(children.len(), 3);
    assert!(children.iter().all(|c| c.kind().is_number()));
    assert_eq!(children[2].node(), &Node::Number(Number::from(3i64)));
}

#[test]
fn decode_empty_array() {
    let mut target: Vec<String> = vec!["stale".into()];
    let doc = unmarshal(b"[]", &mut target).unwrap();
    assert!(target.is_empty());
    assert_eq!(doc.kind(), Kind::Array);
    assert!(doc.root().is_empty());
}

#[test]
fn decode_fixed_array_and_tuple() {
    let mut fixed = [0u8; 3];
    let doc = unmarshal(b"[7,8,9]", &mut fixed).unwrap();
    assert_eq!(doc.kind(), Kind::Array);
    assert_eq!(doc.root().children()[0].kind(), Kind::Int16);

    let mut pair: (String, bool) = Default::default();
    let doc = unmarshal(br#"["on",true]"#, &mut pair).unwrap();
    assert_eq!(doc.kind(), Kind::Array);
    assert_eq!(doc.root().children()[1].kind(), Kind::Bool);
}

// ============================================================================
// Scalar roots
// ============================================================================

#[test]
fn decode_string_root() {
    let mut s = String::new();
    let doc = unmarshal(br#""hello""#, &mut s).unwrap();
    assert_eq!(s, "hello");
    assert_eq!(doc.root(), &Section::new_string("", "hello"));
}

#[test]
fn decode_bool_root() {
    let mut b = true;
    let doc = unmarshal(b"false", &mut b).unwrap();
    assert!(!b);
    assert_eq!(doc.root(), &Section::new_bool("", false));
}

#[test]
fn decode_option_some_is_transparent() {
    let mut target: Option<Vec<i32>> = None;
    let doc = unmarshal(b"[4]", &mut target).unwrap();
    assert_eq!(target, Some(vec![4]));
    assert_eq!(doc.kind(), Kind::Array);
}

// ============================================================================
// Width fidelity
// ============================================================================

#[test]
fn decode_300_into_i8_field_fails() {
    let mut target = Narrow::default();
    let err = unmarshal(br#"{"x":300}"#, &mut target).unwrap_err();
    assert!(matches!(err, TranscodeError::Decode(_)));
    assert_eq!(target, Narrow::default());
}

#[test]
fn decode_300_into_i32_field_succeeds() {
    let mut target = Wide::default();
    let doc = unmarshal(br#"{"x":300}"#, &mut target).unwrap();
    assert_eq!(target.x, 300);
    assert_eq!(
        doc.root().get("x").unwrap().node(),
        &Node::Number(Number::from(300i32))
    );
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn decode_number_root_is_unsupported() {
    let mut n = 0i32;
    let err = unmarshal(b"5", &mut n).unwrap_err();
    match err {
        TranscodeError::UnsupportedType { kind, type_name } => {
            assert_eq!(kind, "int32");
            assert_eq!(type_name, "i32");
        }
        other => panic!("expected UnsupportedType, got {other:?}"),
    }
    // Decoding itself succeeded; only the document was refused.
    assert_eq!(n, 5);
}

#[test]
fn decode_unit_root_is_unsupported() {
    let mut unit = ();
    assert!(matches!(
        unmarshal(b"null", &mut unit),
        Err(TranscodeError::UnsupportedType { kind: "unit", .. })
    ));
}

#[test]
fn decode_bytes_root_is_unsupported() {
    let mut buf = serde_bytes::ByteBuf::new();
    assert!(matches!(
        unmarshal(b"[1,2]", &mut buf),
        Err(TranscodeError::UnsupportedType { kind: "bytes", .. })
    ));
}

#[test]
fn decode_null_into_option_is_invalid_target() {
    let mut target: Option<Vec<i32>> = Some(vec![1]);
    let err = unmarshal(b"null", &mut target).unwrap_err();
    assert!(matches!(err, TranscodeError::InvalidTarget { .. }));
    assert!(err.to_string().contains("Option"));
}

#[test]
fn decode_malformed_input() {
    let mut target: HashMap<String, String> = HashMap::new();
    let err = unmarshal(br#"{"a":"#, &mut target).unwrap_err();
    assert!(matches!(err, TranscodeError::Decode(_)));
    assert!(err.to_string().starts_with("JSON decode error"));
}

#[test]
fn decode_non_finite_f32_propagates_section_error() {
    // 1e39 overflows f32 to infinity; the section refuses to store it.
    let mut target: Vec<f32> = Vec::new();
    let err = unmarshal(b"[1e39]", &mut target).unwrap_err();
    assert!(matches!(
        err,
        TranscodeError::Section(document_core::SectionError::NonFinite(_))
    ));
}
