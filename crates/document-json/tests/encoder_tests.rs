use document_core::{Document, Number, Section, Width};
use document_json::{marshal, to_value, TranscodeError};
use serde::Serialize;
use serde_json::{json, Value};

fn encode_str(doc: &Document) -> String {
    String::from_utf8(marshal(doc).expect("encode failed")).expect("utf-8")
}

fn object<T: Serialize>(value: &T) -> Document {
    let mut root = Section::new_object("");
    root.absorb(value).expect("absorb failed");
    Document::new(root)
}

// ============================================================================
// Per-kind projection
// ============================================================================

#[test]
fn encode_object() {
    #[derive(Serialize)]
    struct Config {
        name: &'static str,
        retries: i16,
        ratio: f64,
        enabled: bool,
        owner: Option<String>,
    }
    let doc = object(&Config {
        name: "svc",
        retries: 3,
        ratio: 0.25,
        enabled: true,
        owner: None,
    });
    assert_eq!(
        encode_str(&doc),
        r#"{"name":"svc","retries":3,"ratio":0.25,"enabled":true,"owner":null}"#
    );
}

#[test]
fn encode_array() {
    let mut root = Section::new_array("");
    root.absorb(&(1i8, "two", 3.5f64, false)).unwrap();
    assert_eq!(encode_str(&Document::new(root)), r#"[1,"two",3.5,false]"#);
}

#[test]
fn encode_empty_containers() {
    assert_eq!(encode_str(&Document::new(Section::new_object(""))), "{}");
    assert_eq!(encode_str(&Document::new(Section::new_array(""))), "[]");
}

#[test]
fn encode_string_with_escapes() {
    let doc = Document::new(Section::new_string("", "say \"hi\"\n"));
    assert_eq!(encode_str(&doc), r#""say \"hi\"\n""#);
}

#[test]
fn encode_bool_and_nil() {
    assert_eq!(encode_str(&Document::new(Section::new_bool("", false))), "false");
    assert_eq!(encode_str(&Document::new(Section::new_nil(""))), "null");
}

#[test]
fn encode_integer_extremes() {
    let cases = [
        (Number::from(i8::MIN), "-128"),
        (Number::from(i16::MAX), "32767"),
        (Number::from(i32::MIN), "-2147483648"),
        (Number::from(i64::MAX), "9223372036854775807"),
        (Number::from(0isize), "0"),
    ];
    for (number, expected) in cases {
        let doc = Document::new(Section::new_number("", number));
        assert_eq!(encode_str(&doc), expected, "{}", number.width());
    }
}

#[test]
fn encode_floats() {
    let doc = Document::new(Section::new_number("", Number::float32(3.14).unwrap()));
    assert_eq!(encode_str(&doc), "3.14");
    let doc = Document::new(Section::new_number("", Number::float64(1e-7).unwrap()));
    assert_eq!(to_value(&doc).unwrap(), json!(1e-7));
}

#[test]
fn encode_nested_float32_uses_short_decimal() {
    let mut root = Section::new_array("");
    root.absorb(&vec![0.1f32, 0.2f32]).unwrap();
    assert_eq!(encode_str(&Document::new(root)), "[0.1,0.2]");
}

#[test]
fn encode_enum_variants() {
    #[derive(Serialize)]
    enum Op {
        Stop,
        Jump(u32),
        Move { dx: i8, dy: i8 },
    }
    let mut root = Section::new_array("");
    root.absorb(&vec![Op::Stop, Op::Jump(9), Op::Move { dx: 1, dy: -1 }])
        .unwrap();
    assert_eq!(
        encode_str(&Document::new(root)),
        r#"["Stop",{"Jump":9},{"Move":{"dx":1,"dy":-1}}]"#
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn encode_bytes_root_is_unsupported_not_null() {
    let doc = Document::new(Section::new_bytes("", vec![0xde, 0xad]));
    match marshal(&doc) {
        Err(TranscodeError::UnsupportedType { kind, type_name }) => {
            assert_eq!(kind, "bytes");
            assert!(type_name.ends_with("Document"));
        }
        other => panic!("expected UnsupportedType, got {other:?}"),
    }
}

#[test]
fn to_value_matches_marshal() {
    let doc = object(&json!({"k": [1, "x", null]}));
    let value = to_value(&doc).unwrap();
    let bytes = marshal(&doc).unwrap();
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), value);
}

#[test]
fn width_is_not_preserved_by_encoding() {
    let doc = Document::new(Section::new_number(
        "",
        Number::new_int(Width::Int8, 42).unwrap(),
    ));
    let other = Document::new(Section::new_number(
        "",
        Number::new_int(Width::Int64, 42).unwrap(),
    ));
    assert_eq!(marshal(&doc).unwrap(), marshal(&other).unwrap());
}
