//! Decoder coverage: root shapes, the three array forms, strict-mode
//! validation, error reporting, and path expansion.

use toon_codec::{
    decode, toon, DecodeOptions, PathExpansion, ToonDecodeError, ToonMap, ToonValue,
};

fn dec(input: &str) -> ToonValue {
    decode(input, &DecodeOptions::default()).unwrap()
}

fn dec_strict(input: &str) -> Result<ToonValue, ToonDecodeError> {
    decode(input, &DecodeOptions::new().with_strict(true))
}

#[test]
fn empty_document_is_empty_object() {
    assert_eq!(dec(""), ToonValue::Object(ToonMap::new()));
    assert_eq!(dec("\n  \n"), ToonValue::Object(ToonMap::new()));
}

#[test]
fn root_primitives() {
    assert_eq!(dec("hello"), toon!("hello"));
    assert_eq!(dec("42"), toon!(42));
    assert_eq!(dec("-2.5E-3"), ToonValue::Number(-0.0025));
    assert_eq!(dec("true"), toon!(true));
    assert_eq!(dec("null"), toon!(null));
    assert_eq!(dec("\"quoted: text\""), toon!("quoted: text"));
}

#[test]
fn flat_object() {
    let value = dec("name: Alice\nage: 30\nactive: true\nmanager: null");
    assert_eq!(
        value,
        toon!({"name": "Alice", "age": 30, "active": true, "manager": null})
    );
}

#[test]
fn nested_objects_by_indentation() {
    let value = dec("user:\n  name: Alice\n  address:\n    city: Lisbon\nok: true");
    assert_eq!(
        value,
        toon!({
            "user": {"name": "Alice", "address": {"city": "Lisbon"}},
            "ok": true
        })
    );
}

#[test]
fn empty_object_field() {
    assert_eq!(dec("meta:"), toon!({"meta": {}}));
    assert_eq!(dec("meta:\nnext: 1"), toon!({"meta": {}, "next": 1}));
}

#[test]
fn inline_arrays() {
    assert_eq!(dec("xs[3]: 1,2,3"), toon!({"xs": [1, 2, 3]}));
    assert_eq!(dec("xs[0]:"), toon!({"xs": []}));
    assert_eq!(
        dec("xs[2]: \"a,b\",c"),
        toon!({"xs": ["a,b", "c"]})
    );
}

#[test]
fn tabular_arrays() {
    let value = dec("users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user");
    assert_eq!(
        value,
        toon!({
            "users": [
                {"id": 1, "name": "Alice", "role": "admin"},
                {"id": 2, "name": "Bob", "role": "user"}
            ]
        })
    );
}

#[test]
fn list_arrays_with_mixed_items() {
    let value = dec("items[3]:\n  - 1\n  - k: v\n  - [2]: 2,3");
    assert_eq!(value, toon!({"items": [1, {"k": "v"}, [2, 3]]}));
}

#[test]
fn list_item_objects_with_continuation_fields() {
    let value = dec("items[2]:\n  - name: Alice\n    role: admin\n  - name: Bob\n    role: user");
    assert_eq!(
        value,
        toon!({
            "items": [
                {"name": "Alice", "role": "admin"},
                {"name": "Bob", "role": "user"}
            ]
        })
    );
}

#[test]
fn bare_hyphen_is_empty_object_item() {
    assert_eq!(dec("xs[2]:\n  -\n  - 1"), toon!({"xs": [{}, 1]}));
}

#[test]
fn multiline_primitive_block() {
    assert_eq!(dec("xs[3]:\n  1\n  2\n  3"), toon!({"xs": [1, 2, 3]}));
}

#[test]
fn root_arrays() {
    assert_eq!(dec("[3]: a,b,c"), toon!(["a", "b", "c"]));
    assert_eq!(dec("[0]:"), toon!([]));
    assert_eq!(
        dec("[2]{id}:\n  1\n  2"),
        toon!([{"id": 1}, {"id": 2}])
    );
    assert_eq!(dec("[2]:\n  - 1\n  - x: y"), toon!([1, {"x": "y"}]));
}

#[test]
fn delimiter_indicator_in_header() {
    assert_eq!(dec("tags[3|]: a|b|c,d"), toon!({"tags": ["a", "b", "c,d"]}));
    assert_eq!(dec("tags[2\t]: a\tb"), toon!({"tags": ["a", "b"]}));
    let value = dec("rows[2|]{sku|qty}:\n  A1|2\n  B2|1");
    assert_eq!(
        value,
        toon!({"rows": [{"sku": "A1", "qty": 2}, {"sku": "B2", "qty": 1}]})
    );
}

#[test]
fn primitive_coercions() {
    let value = dec("a: \"007\"\nb: 007\nc: 0x1\nd: -0\ne: 1e10");
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("a"), Some(&toon!("007")));
    // Leading-zero lexemes stay strings even unquoted
    assert_eq!(obj.get("b"), Some(&toon!("007")));
    assert_eq!(obj.get("c"), Some(&toon!("0x1")));
    assert_eq!(obj.get("d"), Some(&ToonValue::Number(0.0)));
    assert_eq!(obj.get("e"), Some(&ToonValue::Number(1e10)));
}

#[test]
fn quoted_keys() {
    let value = dec("\"user-id\": 1\n\"a b\": 2\n\"\": 3");
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("user-id"), Some(&toon!(1)));
    assert_eq!(obj.get("a b"), Some(&toon!(2)));
    assert_eq!(obj.get(""), Some(&toon!(3)));
}

#[test]
fn count_mismatch_inline() {
    let err = decode("xs[3]: 1,2", &DecodeOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ToonDecodeError::CountMismatch {
            line: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn count_mismatch_list_and_tabular() {
    let err = decode("xs[3]:\n  - 1\n  - 2", &DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ToonDecodeError::CountMismatch {
            expected: 3,
            found: 2,
            ..
        }
    ));

    let err = decode("t[2]{a}:\n  1", &DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ToonDecodeError::CountMismatch {
            expected: 2,
            found: 1,
            ..
        }
    ));
}

#[test]
fn tabular_field_count_mismatch_cites_row() {
    let err = decode("t[1]{a,b}:\n  1,2,3", &DecodeOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ToonDecodeError::CountMismatch {
            line: 2,
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn extra_rows_rejected() {
    let err = decode("xs[1]:\n  - 1\n  - 2", &DecodeOptions::default()).unwrap_err();
    assert_eq!(err, ToonDecodeError::ExtraRows { line: 3 });

    let err = decode("t[1]{a}:\n  1\n  2", &DecodeOptions::default()).unwrap_err();
    assert_eq!(err, ToonDecodeError::ExtraRows { line: 3 });
}

#[test]
fn root_array_rejects_trailing_content() {
    let err = decode("[1]: 1\nx: 2", &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, ToonDecodeError::ExtraRows { line: 2 }));
}

#[test]
fn missing_colon() {
    let err = decode("a: 1\njunk", &DecodeOptions::default()).unwrap_err();
    assert_eq!(err, ToonDecodeError::MissingColon { line: 2 });
}

#[test]
fn invalid_array_headers() {
    for doc in ["xs[]: 1", "xs[x]: 1", "xs[1", "xs[1]{a} 1", "xs[1]x: 1"] {
        let err = decode(doc, &DecodeOptions::default()).unwrap_err();
        assert!(
            matches!(err, ToonDecodeError::InvalidArrayHeader { line: 1, .. }),
            "{doc}: {err}"
        );
    }
}

#[test]
fn unterminated_strings() {
    let err = decode("a: \"open", &DecodeOptions::default()).unwrap_err();
    assert_eq!(err, ToonDecodeError::UnterminatedString { line: 1 });

    let err = decode("\"open: 1", &DecodeOptions::default()).unwrap_err();
    assert_eq!(err, ToonDecodeError::UnterminatedString { line: 1 });
}

#[test]
fn invalid_escape_sequences() {
    let err = decode("a: \"bad\\qescape\"", &DecodeOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ToonDecodeError::InvalidEscape {
            line: 1,
            found: 'q'
        }
    );
}

#[test]
fn strict_indentation_rules() {
    // Indent not a multiple of the unit
    let err = dec_strict("  a: 1\n a: 2").unwrap_err();
    assert!(matches!(err, ToonDecodeError::BadIndentation { line: 2, .. }));

    // Tabs in indentation
    let err = dec_strict("\ta: 1").unwrap_err();
    assert!(matches!(err, ToonDecodeError::BadIndentation { line: 1, .. }));

    // Lenient mode accepts both
    assert!(decode("\ta: 1", &DecodeOptions::default()).is_ok());

    // Four-space unit validates against four
    let options = DecodeOptions::new().with_strict(true).with_indent(4);
    assert!(decode("a:\n    b: 1", &options).is_ok());
    assert!(decode("a:\n  b: 1", &options).is_err());
}

#[test]
fn strict_accepts_marker_anchored_continuation_lines() {
    // Continuation fields sit two columns past the marker, a width fixed
    // by the literal `- ` prefix rather than the indent unit
    let options = DecodeOptions::new().with_strict(true).with_indent(4);
    let text = "items[2]:\n    - a: 1\n    - a: 1\n      b: 2";
    let value = decode(text, &options).unwrap();
    assert_eq!(
        value,
        toon!({"items": [{"a": 1}, {"a": 1, "b": 2}]})
    );

    // Nested blocks under a continuation field measure from the shifted grid
    let text = "items[1]:\n    - a:\n          x: 1\n      b: 2";
    let value = decode(text, &options).unwrap();
    assert_eq!(value, toon!({"items": [{"a": {"x": 1}, "b": 2}]}));

    // A nested block that ignores the shifted grid is still rejected
    let text = "items[1]:\n    - a:\n         x: 1";
    let err = decode(text, &options).unwrap_err();
    assert!(matches!(err, ToonDecodeError::BadIndentation { line: 3, .. }));
}

#[test]
fn strict_blank_lines_in_arrays() {
    let err = dec_strict("xs[2]:\n  - 1\n\n  - 2").unwrap_err();
    assert_eq!(err, ToonDecodeError::BlankLineInArray { line: 3 });

    let err = dec_strict("t[2]{a}:\n  1\n\n  2").unwrap_err();
    assert_eq!(err, ToonDecodeError::BlankLineInArray { line: 3 });

    // Lenient mode skips them
    assert_eq!(
        dec("xs[2]:\n  - 1\n\n  - 2"),
        toon!({"xs": [1, 2]})
    );
}

#[test]
fn strict_duplicate_keys() {
    let err = dec_strict("a: 1\na: 2").unwrap_err();
    assert_eq!(
        err,
        ToonDecodeError::DuplicateKey {
            line: 2,
            key: "a".to_string()
        }
    );
    // Lenient mode: last occurrence wins
    assert_eq!(dec("a: 1\na: 2"), toon!({"a": 2}));
}

#[test]
fn strict_multiple_root_primitives() {
    let err = dec_strict("one\ntwo").unwrap_err();
    assert_eq!(err, ToonDecodeError::MultiplePrimitives { line: 2 });
}

#[test]
fn path_expansion_off_by_default() {
    let value = dec("a.b.c: 1\na.b.d: 2");
    assert_eq!(value, toon!({"a.b.c": 1, "a.b.d": 2}));
}

#[test]
fn path_expansion_safe() {
    let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    let value = decode("a.b.c: 1\na.b.d: 2", &options).unwrap();
    assert_eq!(value, toon!({"a": {"b": {"c": 1, "d": 2}}}));
}

#[test]
fn path_expansion_skips_quoted_keys() {
    let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    let value = decode("\"a.b\": 1\nc.d: 2", &options).unwrap();
    assert_eq!(value, toon!({"a.b": 1, "c": {"d": 2}}));
}

#[test]
fn path_expansion_skips_non_identifier_segments() {
    let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    let value = decode("a.2b: 1\nx..y: 2", &options).unwrap();
    assert_eq!(value, toon!({"a.2b": 1, "x..y": 2}));
}

#[test]
fn path_expansion_conflicts() {
    let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    // Lenient: last writer wins
    let value = decode("a.b: 1\na.b.c: 2", &options).unwrap();
    assert_eq!(value, toon!({"a": {"b": {"c": 2}}}));

    let strict = DecodeOptions::new()
        .with_expand_paths(PathExpansion::Safe)
        .with_strict(true);
    let err = decode("a.b: 1\na.b.c: 2", &strict).unwrap_err();
    assert_eq!(
        err,
        ToonDecodeError::PathExpansionConflict {
            line: 2,
            path: "a.b".to_string()
        }
    );
}

#[test]
fn path_expansion_applies_inside_nested_objects() {
    let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    let value = decode("outer:\n  a.b: 1", &options).unwrap();
    assert_eq!(value, toon!({"outer": {"a": {"b": 1}}}));
}

#[test]
fn blank_lines_between_fields_are_fine() {
    let value = dec("a: 1\n\nb: 2");
    assert_eq!(value, toon!({"a": 1, "b": 2}));
}

#[test]
fn deeply_nested_list_items() {
    let value = dec("items[1]:\n  - user:\n      name: Alice\n    ok: true");
    assert_eq!(
        value,
        toon!({"items": [{"user": {"name": "Alice"}, "ok": true}]})
    );
}

#[test]
fn nested_array_inside_list_item() {
    let value = dec("items[1]:\n  - xs[2]:\n      - 1\n      - [0]:");
    assert_eq!(value, toon!({"items": [{"xs": [1, []]}]}));
}

#[test]
fn error_line_accessor() {
    let err = decode("xs[3]: 1,2", &DecodeOptions::default()).unwrap_err();
    assert_eq!(err.line(), Some(1));
    let err = decode("a: 1\n  b: 2\njunk", &DecodeOptions::default()).unwrap_err();
    assert!(err.line().is_some());
}
