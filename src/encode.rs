//! TOON encoder: walks a value tree and emits indented lines.
//!
//! The interesting work is form selection: every array is classified once
//! and emitted in the most compact shape that can represent it losslessly.
//!
//! 1. **Empty**: `key[0]:`
//! 2. **Tabular**: uniform object arrays factor their field names onto the
//!    header, `key[N]{f1,f2}:` followed by one row per element
//! 3. **Inline**: all-primitive arrays on a single line, `key[N]: v1,v2`
//! 4. **List**: anything mixed or nested, `key[N]:` plus `- ` items
//!
//! Output is byte-exact deterministic for a fixed input and options: object
//! iteration is insertion order and nothing hashes.
//!
//! # Example
//! ```
//! use toon_codec::{encode, toon, EncodeOptions};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "scores": [95, 87, 92]
//! });
//! let text = encode(&value, &EncodeOptions::default()).unwrap();
//! assert_eq!(text, "name: Alice\nscores[3]: 95,87,92");
//! ```

use crate::lex;
use crate::{Delimiter, EncodeOptions, KeyFolding, ToonEncodeError, ToonMap, ToonValue};

/// Encode a value tree into a TOON document.
///
/// Total on trees containing only finite numbers. Under
/// [`EncodeOptions::strict`], a `NaN` or infinite number is a
/// [`ToonEncodeError::NonFiniteNumber`]; otherwise it is emitted as `null`.
pub fn encode(value: &ToonValue, options: &EncodeOptions) -> Result<String, ToonEncodeError> {
    let mut out = String::with_capacity(256);
    let encoder = Encoder { options };
    encoder.encode_root(value, &mut out)?;
    Ok(out)
}

/// Quoting context per delimiter-scoping rules: array cells must also quote
/// the active delimiter and `:`, free values follow the base predicate.
#[derive(Clone, Copy, PartialEq)]
enum ValueContext {
    Document,
    ArrayCell,
}

struct Encoder<'a> {
    options: &'a EncodeOptions,
}

impl Encoder<'_> {
    /// Top-level dispatch: objects emit fields, arrays emit root array
    /// syntax, primitives emit one bare scalar. An empty object is an empty
    /// document.
    fn encode_root(&self, value: &ToonValue, out: &mut String) -> Result<(), ToonEncodeError> {
        match value {
            ToonValue::Object(map) => self.encode_object_fields(map, "", out),
            ToonValue::Array(arr) => self.encode_array_value(arr, "", out),
            _ => self.write_scalar(value, ValueContext::Document, out),
        }
    }

    /// Emit all key-value pairs of an object, one per line, at the given
    /// indent prefix.
    fn encode_object_fields(
        &self,
        map: &ToonMap,
        indent: &str,
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(indent);
            let (folded_key, value) = self.fold_key(key, value);
            self.write_key(&folded_key, out);
            self.encode_field_value(value, indent, out)?;
        }
        Ok(())
    }

    /// Collapse a chain of single-key objects into a dotted key when key
    /// folding is on. Folding stops at the first branching object, the
    /// first non-object value, a non-identifier segment, or the configured
    /// depth cap. Every folded key is identifier-safe by construction and
    /// therefore never quoted.
    fn fold_key<'v>(&self, key: &str, value: &'v ToonValue) -> (String, &'v ToonValue) {
        if self.options.key_folding != KeyFolding::Safe || !lex::is_identifier(key) {
            return (key.to_string(), value);
        }
        let mut folded = key.to_string();
        let mut current = value;
        let mut segments = 1;
        while segments < self.options.flatten_depth {
            let ToonValue::Object(map) = current else { break };
            if map.len() != 1 {
                break;
            }
            let (inner_key, inner_value) = map.iter().next().expect("len checked");
            if !lex::is_identifier(inner_key) {
                break;
            }
            folded.push('.');
            folded.push_str(inner_key);
            current = inner_value;
            segments += 1;
        }
        (folded, current)
    }

    /// Dispatch a field's value: `key:` for empty objects, an indented
    /// block for non-empty objects, array syntax for arrays, `key: value`
    /// for primitives.
    fn encode_field_value(
        &self,
        value: &ToonValue,
        indent: &str,
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        match value {
            ToonValue::Object(map) if map.is_empty() => {
                out.push(':');
                Ok(())
            }
            ToonValue::Object(map) => {
                out.push_str(":\n");
                let child = format!("{indent}{}", self.options.indent);
                self.encode_object_fields(map, &child, out)
            }
            ToonValue::Array(arr) => self.encode_array_value(arr, indent, out),
            _ => {
                out.push_str(": ");
                self.write_scalar(value, ValueContext::Document, out)
            }
        }
    }

    /// Emit the bracket header and body for an array, choosing the form.
    /// `indent` is the prefix of the header's own line; multi-line bodies
    /// sit one unit deeper.
    fn encode_array_value(
        &self,
        arr: &[ToonValue],
        indent: &str,
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        if arr.is_empty() {
            out.push_str("[0]:");
            return Ok(());
        }

        // Tabular: shared field schema factored onto the header line
        if let Some(fields) = detect_tabular(arr) {
            self.write_bracket(arr.len(), out);
            out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(self.options.delimiter.as_char());
                }
                self.write_key(field, out);
            }
            out.push_str("}:");
            return self.encode_tabular_rows(arr, indent, out);
        }

        // Inline: every element a primitive, all on the header line
        if arr.iter().all(ToonValue::is_primitive) {
            self.write_bracket(arr.len(), out);
            out.push_str(": ");
            return self.encode_inline_values(arr, out);
        }

        // List: one `- ` item per element
        self.write_bracket(arr.len(), out);
        out.push(':');
        self.encode_list_items(arr, indent, out)
    }

    /// `[N]` with the delimiter character appended for tab and pipe; comma
    /// stays implicit.
    fn write_bracket(&self, len: usize, out: &mut String) {
        out.push('[');
        out.push_str(&len.to_string());
        if self.options.delimiter != Delimiter::Comma {
            out.push(self.options.delimiter.as_char());
        }
        out.push(']');
    }

    fn encode_inline_values(
        &self,
        arr: &[ToonValue],
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                out.push(self.options.delimiter.as_char());
            }
            self.write_scalar(value, ValueContext::ArrayCell, out)?;
        }
        Ok(())
    }

    fn encode_tabular_rows(
        &self,
        arr: &[ToonValue],
        indent: &str,
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        let row_indent = format!("{indent}{}", self.options.indent);
        for element in arr {
            out.push('\n');
            out.push_str(&row_indent);
            let ToonValue::Object(map) = element else {
                unreachable!("tabular detection admits only objects");
            };
            // Detection verified every row shares the header's key sequence,
            // so cells can stream out in iteration order
            for (i, (_, cell)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(self.options.delimiter.as_char());
                }
                self.write_scalar(cell, ValueContext::ArrayCell, out)?;
            }
        }
        Ok(())
    }

    /// Emit `- ` items. An item may be a primitive, a nested array (its
    /// header follows the marker), or an object whose first field shares
    /// the marker line and whose later fields sit two columns deeper,
    /// aligned under the marker content.
    fn encode_list_items(
        &self,
        arr: &[ToonValue],
        indent: &str,
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        let item_indent = format!("{indent}{}", self.options.indent);
        let cont_indent = format!("{item_indent}  ");
        for item in arr {
            out.push('\n');
            out.push_str(&item_indent);
            match item {
                ToonValue::Object(map) if map.is_empty() => {
                    out.push('-');
                }
                ToonValue::Object(map) => {
                    out.push_str("- ");
                    for (i, (key, value)) in map.iter().enumerate() {
                        if i > 0 {
                            out.push('\n');
                            out.push_str(&cont_indent);
                        }
                        let (folded_key, value) = self.fold_key(key, value);
                        self.write_key(&folded_key, out);
                        self.encode_field_value(value, &cont_indent, out)?;
                    }
                }
                ToonValue::Array(inner) => {
                    out.push_str("- ");
                    self.encode_array_value(inner, &cont_indent, out)?;
                }
                _ => {
                    out.push_str("- ");
                    self.write_scalar(item, ValueContext::Document, out)?;
                }
            }
        }
        Ok(())
    }

    /// Emit an object key or tabular header field, quoting when the bare
    /// form would collide with header syntax.
    fn write_key(&self, key: &str, out: &mut String) {
        if lex::needs_quoting_as_key(key) {
            out.push('"');
            out.push_str(&lex::escape(key));
            out.push('"');
        } else {
            out.push_str(key);
        }
    }

    /// Emit one primitive. Strings consult the context-appropriate quoting
    /// predicate; numbers use the canonical double form.
    fn write_scalar(
        &self,
        value: &ToonValue,
        context: ValueContext,
        out: &mut String,
    ) -> Result<(), ToonEncodeError> {
        match value {
            ToonValue::Null => out.push_str("null"),
            ToonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            ToonValue::Number(n) => {
                if !n.is_finite() {
                    if self.options.strict {
                        return Err(ToonEncodeError::NonFiniteNumber(*n));
                    }
                    out.push_str("null");
                } else {
                    out.push_str(&lex::format_number(*n));
                }
            }
            ToonValue::String(s) => {
                let quote = match context {
                    ValueContext::Document => lex::needs_quoting(s, self.options.delimiter),
                    ValueContext::ArrayCell => {
                        lex::needs_quoting_in_array(s, self.options.delimiter)
                    }
                };
                if quote {
                    out.push('"');
                    out.push_str(&lex::escape(s));
                    out.push('"');
                } else {
                    out.push_str(s);
                }
            }
            ToonValue::Array(_) | ToonValue::Object(_) => {
                unreachable!("containers are dispatched before scalar emission")
            }
        }
        Ok(())
    }
}

/// Detect the tabular shape: every element a non-empty object, all sharing
/// the first element's key sequence (order included), every leaf primitive.
fn detect_tabular(arr: &[ToonValue]) -> Option<Vec<String>> {
    let ToonValue::Object(first) = arr.first()? else {
        return None;
    };
    if first.is_empty() {
        return None;
    }
    let fields: Vec<String> = first.keys().cloned().collect();
    for element in arr {
        let ToonValue::Object(map) = element else {
            return None;
        };
        if map.len() != fields.len() {
            return None;
        }
        for (field, (key, value)) in fields.iter().zip(map.iter()) {
            if field != key || !value.is_primitive() {
                return None;
            }
        }
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    fn enc(value: &ToonValue) -> String {
        encode(value, &EncodeOptions::default()).unwrap()
    }

    #[test]
    fn tabular_needs_matching_key_order() {
        let uniform = toon!([
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"}
        ]);
        assert_eq!(enc(&uniform), "[2]{id,name}:\n  1,a\n  2,b");

        let reordered = toon!([
            {"id": 1, "name": "a"},
            {"name": "b", "id": 2}
        ]);
        assert!(enc(&reordered).contains("- "));
    }

    #[test]
    fn nested_leaves_block_tabular() {
        let value = toon!([
            {"id": 1, "tags": [1, 2]},
            {"id": 2, "tags": [3]}
        ]);
        let text = enc(&value);
        assert!(text.starts_with("[2]:"));
        assert!(text.contains("- id: 1"));
        assert!(text.contains("tags[2]: 1,2"));
    }

    #[test]
    fn strict_rejects_non_finite() {
        let value = ToonValue::Number(f64::NAN);
        let options = EncodeOptions::new().with_strict(true);
        assert!(matches!(
            encode(&value, &options),
            Err(ToonEncodeError::NonFiniteNumber(_))
        ));
        // Lenient mode falls back to null
        assert_eq!(enc(&value), "null");
        assert_eq!(enc(&ToonValue::Number(f64::INFINITY)), "null");
    }

    #[test]
    fn folding_respects_depth_cap() {
        let value = toon!({"a": {"b": {"c": {"d": 1}}}});
        let options = EncodeOptions::new()
            .with_key_folding(KeyFolding::Safe)
            .with_flatten_depth(2);
        assert_eq!(encode(&value, &options).unwrap(), "a.b:\n  c.d: 1");
    }

    #[test]
    fn folding_skips_non_identifier_segments() {
        let value = toon!({"a": {"x-y": {"c": 1}}});
        let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        assert_eq!(encode(&value, &options).unwrap(), "a:\n  \"x-y\":\n    c: 1");
    }
}
