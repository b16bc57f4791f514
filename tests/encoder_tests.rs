//! Encoder form selection, quoting, and option handling.

use toon_codec::{encode, toon, Delimiter, EncodeOptions, KeyFolding, ToonEncodeError, ToonValue};

fn enc(value: &ToonValue) -> String {
    encode(value, &EncodeOptions::default()).unwrap()
}

#[test]
fn empty_object_is_empty_document() {
    assert_eq!(enc(&toon!({})), "");
}

#[test]
fn empty_array_has_zero_header() {
    assert_eq!(enc(&toon!({ "xs": [] })), "xs[0]:");
    assert_eq!(enc(&toon!([])), "[0]:");
}

#[test]
fn flat_object() {
    let value = toon!({
        "name": "Alice",
        "age": 30,
        "active": true,
        "manager": null
    });
    assert_eq!(enc(&value), "name: Alice\nage: 30\nactive: true\nmanager: null");
}

#[test]
fn nested_objects_indent() {
    let value = toon!({
        "user": {
            "name": "Alice",
            "address": {
                "city": "Lisbon"
            }
        }
    });
    assert_eq!(enc(&value), "user:\n  name: Alice\n  address:\n    city: Lisbon");
}

#[test]
fn empty_object_field() {
    assert_eq!(enc(&toon!({ "meta": {} })), "meta:");
}

#[test]
fn inline_array_of_primitives() {
    let value = toon!({ "tags": ["admin", "ops", "dev"] });
    assert_eq!(enc(&value), "tags[3]: admin,ops,dev");
}

#[test]
fn tabular_array_of_uniform_objects() {
    let value = toon!({
        "users": [
            {"id": 1, "name": "Alice", "role": "admin"},
            {"id": 2, "name": "Bob", "role": "user"}
        ]
    });
    assert_eq!(
        enc(&value),
        "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user"
    );
}

#[test]
fn mixed_array_uses_list_form() {
    let value = toon!({ "items": [1, {"k": "v"}, [2, 3]] });
    assert_eq!(enc(&value), "items[3]:\n  - 1\n  - k: v\n  - [2]: 2,3");
}

#[test]
fn list_item_object_fields_align_under_marker() {
    let value = toon!({
        "items": [
            {"name": "Alice", "role": "admin"}
        ]
    });
    // Uniform single-object arrays still go tabular; force list form with
    // a nested value
    let value2 = toon!({
        "items": [
            {"name": "Alice", "tags": [1, 2]}
        ]
    });
    assert_eq!(enc(&value), "items[1]{name,role}:\n  Alice,admin");
    assert_eq!(enc(&value2), "items[1]:\n  - name: Alice\n    tags[2]: 1,2");
}

#[test]
fn root_array_forms() {
    assert_eq!(enc(&toon!([1, 2, 3])), "[3]: 1,2,3");
    assert_eq!(
        enc(&toon!([{"id": 1}, {"id": 2}])),
        "[2]{id}:\n  1\n  2"
    );
}

#[test]
fn root_primitive() {
    assert_eq!(enc(&toon!("hello")), "hello");
    assert_eq!(enc(&toon!(42)), "42");
    assert_eq!(enc(&toon!(null)), "null");
    assert_eq!(enc(&ToonValue::String("a: b".into())), "\"a: b\"");
}

#[test]
fn string_quoting_in_values() {
    let value = toon!({
        "normal": "hello world",
        "reserved": "true",
        "numeric": "123",
        "leading_zero": "007",
        "empty": "",
        "padded": " x ",
        "colon": "a:b",
        "bracket": "[5]",
        "marker": "- item"
    });
    let text = enc(&value);
    assert!(text.contains("normal: hello world"));
    assert!(text.contains("reserved: \"true\""));
    assert!(text.contains("numeric: \"123\""));
    assert!(text.contains("leading_zero: \"007\""));
    assert!(text.contains("empty: \"\""));
    assert!(text.contains("padded: \" x \""));
    assert!(text.contains("colon: \"a:b\""));
    assert!(text.contains("bracket: \"[5]\""));
    assert!(text.contains("marker: \"- item\""));
}

#[test]
fn key_quoting() {
    let value = toon!({
        "user-id": 1,
        "2nd": 2,
        "a b": 3,
        "dotted.path": 4
    });
    let text = enc(&value);
    assert!(text.contains("\"user-id\": 1"));
    assert!(text.contains("\"2nd\": 2"));
    assert!(text.contains("\"a b\": 3"));
    // Dots are key-safe; no quotes
    assert!(text.contains("dotted.path: 4"));
}

#[test]
fn escape_sequences_in_quoted_strings() {
    let value = toon!({ "s": "a\"b\\c\nd\te\rf" });
    assert_eq!(enc(&value), "s: \"a\\\"b\\\\c\\nd\\te\\rf\"");
}

#[test]
fn pipe_delimiter_announced_in_header() {
    let value = toon!({ "tags": ["a", "b", "c,d"] });
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    // Comma is safe under a pipe delimiter; an embedded pipe would not be
    assert_eq!(encode(&value, &options).unwrap(), "tags[3|]: a|b|c,d");

    let value = toon!({ "tags": ["a|b"] });
    assert_eq!(encode(&value, &options).unwrap(), "tags[1|]: \"a|b\"");
}

#[test]
fn tab_delimiter_in_tabular_form() {
    let value = toon!({
        "rows": [
            {"sku": "A1", "qty": 2},
            {"sku": "B2", "qty": 1}
        ]
    });
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    assert_eq!(
        encode(&value, &options).unwrap(),
        "rows[2\t]{sku\tqty}:\n  A1\t2\n  B2\t1"
    );
}

#[test]
fn comma_forces_quoting_only_when_active() {
    let value = toon!({ "xs": ["a,b"] });
    assert_eq!(enc(&value), "xs[1]: \"a,b\"");
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    assert_eq!(encode(&value, &options).unwrap(), "xs[1\t]: a,b");
}

#[test]
fn numbers_normalize() {
    let value = toon!({
        "zero": (-0.0),
        "int": 5.0,
        "frac": 2.5,
        "big": 1e10
    });
    assert_eq!(enc(&value), "zero: 0\nint: 5\nfrac: 2.5\nbig: 10000000000");
}

#[test]
fn non_finite_numbers() {
    let value = toon!({ "x": (f64::NAN) });
    assert_eq!(enc(&value), "x: null");

    let options = EncodeOptions::new().with_strict(true);
    assert!(matches!(
        encode(&value, &options),
        Err(ToonEncodeError::NonFiniteNumber(_))
    ));
}

#[test]
fn key_folding_collapses_single_key_chains() {
    let value = toon!({ "a": {"b": {"c": 1}} });
    let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
    assert_eq!(encode(&value, &options).unwrap(), "a.b.c: 1");
    // Off by default
    assert_eq!(enc(&value), "a:\n  b:\n    c: 1");
}

#[test]
fn key_folding_stops_at_branching() {
    let value = toon!({ "a": {"b": {"x": 1, "y": 2}} });
    let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
    assert_eq!(encode(&value, &options).unwrap(), "a.b:\n  x: 1\n  y: 2");
}

#[test]
fn custom_indent_unit() {
    let value = toon!({ "a": {"b": 1} });
    let options = EncodeOptions::new().with_indent(4);
    assert_eq!(encode(&value, &options).unwrap(), "a:\n    b: 1");
}

#[test]
fn output_is_deterministic() {
    let value = toon!({
        "z": 1,
        "a": 2,
        "m": [{"k": 1}, {"k": 2}]
    });
    let first = enc(&value);
    for _ in 0..10 {
        assert_eq!(enc(&value), first);
    }
    // Insertion order, not alphabetical
    assert!(first.starts_with("z: 1\na: 2"));
}
