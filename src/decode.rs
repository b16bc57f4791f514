//! TOON decoder: recursive descent over a grid of lines and columns.
//!
//! The document is split into lines once; every line carries its indent
//! width and 1-based number. Nesting is resolved by indentation lookahead
//! rather than by brackets: a parser takes the indent column it owns and
//! consumes lines until one surfaces at a shallower column.
//!
//! Content lines classify into four header shapes, checked in order:
//!
//! 1. `key[N]: v1,v2` (inline array)
//! 2. `key[N]{f1,f2}:` (tabular header, rows follow)
//! 3. `key[N]:` (multi-line array, `- ` items or one primitive per line)
//! 4. `key: value` / `key:` (assignment or nested block)
//!
//! Declared counts are load-bearing: every array form verifies that exactly
//! `N` elements were observed, and surplus content at array indentation is
//! rejected. Strict mode adds indentation validation, blank-line rejection
//! inside arrays, and duplicate-key rejection.
//!
//! Each object entry carries the `was_quoted` flag from the key scanner so
//! path expansion can honor the author's intent: quoted dotted keys stay
//! literal, unquoted ones may expand into nested objects.

use crate::lex::{self, ParsedKey};
use crate::{DecodeOptions, Delimiter, PathExpansion, ToonDecodeError, ToonMap, ToonValue};

/// Decode a TOON document into a value tree.
///
/// Fails with a [`ToonDecodeError`] carrying a 1-based line number on
/// malformed input. An empty (or all-blank) document decodes to `{}`.
pub fn decode(input: &str, options: &DecodeOptions) -> Result<ToonValue, ToonDecodeError> {
    let lines = scan_lines(input, options)?;
    let mut parser = Parser {
        lines,
        pos: 0,
        options,
    };
    parser.parse_document()
}

/// One source line: indent width in columns, 1-based number, and the
/// content with surrounding whitespace stripped. Blank lines keep an empty
/// content slice.
struct Line<'a> {
    indent: usize,
    number: usize,
    content: &'a str,
}

impl Line<'_> {
    fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Split the input and, in strict mode, reject tab characters in any
/// non-blank line's indentation. Width validation happens during parsing,
/// where the grid offset introduced by `- ` markers is known; see
/// [`Parser::check_grid`].
fn scan_lines<'a>(
    input: &'a str,
    options: &DecodeOptions,
) -> Result<Vec<Line<'a>>, ToonDecodeError> {
    let mut lines = Vec::new();
    for (i, raw) in input.split('\n').enumerate() {
        let number = i + 1;
        let rest = raw.trim_start_matches(|c| c == ' ' || c == '\t');
        let indent = raw.len() - rest.len();
        let content = rest.trim_end();
        if options.strict && !content.is_empty() && raw[..indent].contains('\t') {
            return Err(ToonDecodeError::BadIndentation {
                line: number,
                message: "tab character in indentation".to_string(),
            });
        }
        lines.push(Line {
            indent,
            number,
            content,
        });
    }
    Ok(lines)
}

/// One parsed object field, pre-assembly. The raw key, its quoting flag,
/// and the originating line travel together so duplicate detection and
/// path expansion can report precisely.
struct Entry {
    key: String,
    was_quoted: bool,
    line: usize,
    value: ToonValue,
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
    options: &'a DecodeOptions,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Line<'a>> {
        self.lines.get(self.pos)
    }

    /// First non-blank line at or after the cursor, without consuming
    /// anything.
    fn peek_nonblank(&self) -> Option<&Line<'a>> {
        self.lines[self.pos..].iter().find(|l| !l.is_blank())
    }

    fn skip_blanks(&mut self) {
        while self.peek().is_some_and(Line::is_blank) {
            self.pos += 1;
        }
    }

    /// Root dispatch: empty document, root array, root primitive, or
    /// object.
    fn parse_document(&mut self) -> Result<ToonValue, ToonDecodeError> {
        self.skip_blanks();
        let Some(first) = self.peek() else {
            return Ok(ToonValue::Object(ToonMap::new()));
        };
        let first_indent = first.indent;
        let first_number = first.number;
        let first_content = first.content;
        self.check_grid(first_indent, 0, first_number)?;

        if first_content.starts_with('[') {
            let value = self.parse_array_header(first_content, first_number, first_indent, 0)?;
            if let Some(extra) = self.peek_nonblank() {
                return Err(ToonDecodeError::ExtraRows { line: extra.number });
            }
            return Ok(value);
        }

        let nonblank: Vec<&Line<'a>> = self.lines[self.pos..]
            .iter()
            .filter(|l| !l.is_blank())
            .collect();
        if nonblank.len() == 1 && line_is_bare_primitive(nonblank[0].content) {
            let line = nonblank[0];
            return lex::parse_primitive(line.content)
                .map_err(|e| ToonDecodeError::from_lex(e, line.number));
        }
        if self.options.strict
            && nonblank.len() > 1
            && nonblank
                .iter()
                .all(|l| line_is_bare_primitive(l.content) && !l.content.starts_with('['))
        {
            return Err(ToonDecodeError::MultiplePrimitives {
                line: nonblank[1].number,
            });
        }

        let value = self.parse_object(first_indent, 0)?;
        if let Some(extra) = self.peek_nonblank() {
            return Err(ToonDecodeError::BadIndentation {
                line: extra.number,
                message: "content dedents below the document root".to_string(),
            });
        }
        Ok(value)
    }

    /// Strict-mode grid validation: a consumed line's indent must sit a
    /// whole number of indent units past `offset`. The offset starts at
    /// zero and grows by two for each enclosing `- ` marker, whose literal
    /// width shifts everything below it off the plain unit multiples.
    fn check_grid(
        &self,
        indent: usize,
        offset: usize,
        number: usize,
    ) -> Result<(), ToonDecodeError> {
        if !self.options.strict || self.options.indent == 0 {
            return Ok(());
        }
        let unit = self.options.indent as i64;
        if (indent as i64 - offset as i64).rem_euclid(unit) != 0 {
            return Err(ToonDecodeError::BadIndentation {
                line: number,
                message: format!(
                    "indent of {indent} does not align with the {}-column grid",
                    self.options.indent
                ),
            });
        }
        Ok(())
    }

    /// Parse an object whose fields sit at exactly `base_indent`, then
    /// assemble it (duplicate handling, optional path expansion).
    fn parse_object(
        &mut self,
        base_indent: usize,
        offset: usize,
    ) -> Result<ToonValue, ToonDecodeError> {
        let entries = self.parse_object_entries(base_indent, offset)?;
        self.assemble_object(entries)
    }

    fn parse_object_entries(
        &mut self,
        base_indent: usize,
        offset: usize,
    ) -> Result<Vec<Entry>, ToonDecodeError> {
        let mut entries = Vec::new();
        loop {
            self.skip_blanks();
            let Some(line) = self.peek() else { break };
            if line.indent < base_indent {
                break;
            }
            if line.indent > base_indent {
                // A deeper line here was not consumed by any field's block
                if self.options.strict {
                    return Err(ToonDecodeError::BadIndentation {
                        line: line.number,
                        message: "unexpected indentation".to_string(),
                    });
                }
                self.pos += 1;
                continue;
            }
            let content = line.content;
            let number = line.number;
            self.check_grid(base_indent, offset, number)?;
            entries.push(self.parse_field(content, number, base_indent, offset)?);
        }
        Ok(entries)
    }

    /// Parse one field starting at `content` (the trimmed text of the
    /// current line, or the text after a `- ` marker). Consumes the current
    /// line and any block belonging to the field's value. `base_indent` is
    /// the column the field sits at; nested content lies deeper, measured
    /// from `offset` on the strict grid.
    fn parse_field(
        &mut self,
        content: &str,
        number: usize,
        base_indent: usize,
        offset: usize,
    ) -> Result<Entry, ToonDecodeError> {
        let ParsedKey {
            key,
            rest,
            was_quoted,
        } = lex::parse_key(content).map_err(|e| ToonDecodeError::from_lex(e, number))?;
        if key.is_empty() && !was_quoted {
            return Err(ToonDecodeError::MissingColon { line: number });
        }

        if rest.starts_with('[') {
            let value = self.parse_array_header(rest, number, base_indent, offset)?;
            return Ok(Entry {
                key,
                was_quoted,
                line: number,
                value,
            });
        }

        let Some(after) = rest.strip_prefix(':') else {
            return Err(ToonDecodeError::MissingColon { line: number });
        };
        let after = after.trim();
        self.pos += 1;

        let value = if after.is_empty() {
            // Nested block or empty object, decided by the next line's depth
            match self.peek_nonblank() {
                Some(next) if next.indent > base_indent => {
                    let child_indent = next.indent;
                    self.parse_object(child_indent, offset)?
                }
                _ => ToonValue::Object(ToonMap::new()),
            }
        } else {
            lex::parse_primitive(after).map_err(|e| ToonDecodeError::from_lex(e, number))?
        };

        Ok(Entry {
            key,
            was_quoted,
            line: number,
            value,
        })
    }

    /// Parse an array from its bracket header onward. `rest` starts at the
    /// `[`; the cursor still points at the header's line. Dispatches to the
    /// inline, tabular, or multi-line sub-parser and consumes the body.
    fn parse_array_header(
        &mut self,
        rest: &str,
        number: usize,
        base_indent: usize,
        offset: usize,
    ) -> Result<ToonValue, ToonDecodeError> {
        let (len, delimiter, after) = parse_bracket_segment(rest, number)?;

        if let Some(brace_rest) = after.strip_prefix('{') {
            let close = find_unquoted(brace_rest, '}').ok_or_else(|| {
                ToonDecodeError::InvalidArrayHeader {
                    line: number,
                    message: "unterminated field list".to_string(),
                }
            })?;
            let fields_text = &brace_rest[..close];
            let tail = &brace_rest[close + 1..];
            if tail.trim() != ":" {
                return Err(ToonDecodeError::InvalidArrayHeader {
                    line: number,
                    message: "expected ':' after field list".to_string(),
                });
            }
            let fields = parse_header_fields(fields_text, delimiter, number)?;
            self.pos += 1;
            return self.parse_tabular(len, &fields, delimiter, number, base_indent, offset);
        }

        let Some(tail) = after.strip_prefix(':') else {
            return Err(ToonDecodeError::InvalidArrayHeader {
                line: number,
                message: "expected ':' after bracket".to_string(),
            });
        };
        let tail = tail.trim();

        if !tail.is_empty() {
            // Inline form: the whole array lives on the header line
            self.pos += 1;
            let cells = lex::split_by_delimiter(tail, delimiter);
            if cells.len() != len {
                return Err(ToonDecodeError::CountMismatch {
                    line: number,
                    expected: len,
                    found: cells.len(),
                });
            }
            let mut values = Vec::with_capacity(cells.len());
            for cell in &cells {
                values.push(
                    lex::parse_primitive(cell)
                        .map_err(|e| ToonDecodeError::from_lex(e, number))?,
                );
            }
            return Ok(ToonValue::Array(values));
        }

        self.pos += 1;
        if len == 0 {
            if let Some(next) = self.peek_nonblank() {
                if next.indent > base_indent {
                    return Err(ToonDecodeError::ExtraRows { line: next.number });
                }
            }
            return Ok(ToonValue::Array(Vec::new()));
        }

        // Multi-line form: peek the first body line to pick the sub-shape
        match self.peek_nonblank() {
            Some(next) if next.indent > base_indent => {
                let item_indent = next.indent;
                if next.content == "-" || next.content.starts_with("- ") {
                    self.parse_list(len, item_indent, number, base_indent, offset)
                } else {
                    self.parse_primitive_block(len, item_indent, number, base_indent, offset)
                }
            }
            _ => Err(ToonDecodeError::CountMismatch {
                line: number,
                expected: len,
                found: 0,
            }),
        }
    }

    /// Read exactly `len` delimiter-separated rows below a tabular header,
    /// building one record per row with keys from the header field list.
    fn parse_tabular(
        &mut self,
        len: usize,
        fields: &[(String, bool)],
        delimiter: Delimiter,
        header_line: usize,
        base_indent: usize,
        offset: usize,
    ) -> Result<ToonValue, ToonDecodeError> {
        let mut rows = Vec::with_capacity(len);
        let mut row_indent = None;

        while rows.len() < len {
            let Some(line) = self.peek() else {
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: rows.len(),
                });
            };
            if line.is_blank() {
                if self.options.strict && !rows.is_empty() {
                    return Err(ToonDecodeError::BlankLineInArray { line: line.number });
                }
                self.pos += 1;
                continue;
            }
            if line.indent <= base_indent {
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: rows.len(),
                });
            }
            let expected_indent = *row_indent.get_or_insert(line.indent);
            if self.options.strict && line.indent != expected_indent {
                return Err(ToonDecodeError::BadIndentation {
                    line: line.number,
                    message: "tabular rows must share one indentation".to_string(),
                });
            }
            self.check_grid(line.indent, offset, line.number)?;

            let number = line.number;
            let cells = lex::split_by_delimiter(line.content, delimiter);
            if cells.len() != fields.len() {
                return Err(ToonDecodeError::CountMismatch {
                    line: number,
                    expected: fields.len(),
                    found: cells.len(),
                });
            }
            let mut entries = Vec::with_capacity(fields.len());
            for ((field, was_quoted), cell) in fields.iter().zip(&cells) {
                entries.push(Entry {
                    key: field.clone(),
                    was_quoted: *was_quoted,
                    line: number,
                    value: lex::parse_primitive(cell)
                        .map_err(|e| ToonDecodeError::from_lex(e, number))?,
                });
            }
            self.pos += 1;
            rows.push(self.assemble_object(entries)?);
        }

        self.reject_surplus(base_indent)?;
        Ok(ToonValue::Array(rows))
    }

    /// The bare multi-line form: `len` lines, one primitive each, at a
    /// common indentation.
    fn parse_primitive_block(
        &mut self,
        len: usize,
        block_indent: usize,
        header_line: usize,
        base_indent: usize,
        offset: usize,
    ) -> Result<ToonValue, ToonDecodeError> {
        let mut values = Vec::with_capacity(len);
        while values.len() < len {
            let Some(line) = self.peek() else {
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: values.len(),
                });
            };
            if line.is_blank() {
                if self.options.strict && !values.is_empty() {
                    return Err(ToonDecodeError::BlankLineInArray { line: line.number });
                }
                self.pos += 1;
                continue;
            }
            if line.indent <= base_indent {
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: values.len(),
                });
            }
            if line.indent != block_indent {
                return Err(ToonDecodeError::BadIndentation {
                    line: line.number,
                    message: "array elements must share one indentation".to_string(),
                });
            }
            self.check_grid(block_indent, offset, line.number)?;
            values.push(
                lex::parse_primitive(line.content)
                    .map_err(|e| ToonDecodeError::from_lex(e, line.number))?,
            );
            self.pos += 1;
        }
        self.reject_surplus(base_indent)?;
        Ok(ToonValue::Array(values))
    }

    /// Read exactly `len` hyphen-marked items at `item_indent`.
    fn parse_list(
        &mut self,
        len: usize,
        item_indent: usize,
        header_line: usize,
        base_indent: usize,
        offset: usize,
    ) -> Result<ToonValue, ToonDecodeError> {
        let mut items = Vec::with_capacity(len);
        while items.len() < len {
            let Some(line) = self.peek() else {
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: items.len(),
                });
            };
            if line.is_blank() {
                if self.options.strict && !items.is_empty() {
                    return Err(ToonDecodeError::BlankLineInArray { line: line.number });
                }
                self.pos += 1;
                continue;
            }
            if line.indent < item_indent {
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: items.len(),
                });
            }
            if line.indent > item_indent {
                // A stray deep line not consumed by the previous item
                if self.options.strict {
                    return Err(ToonDecodeError::BadIndentation {
                        line: line.number,
                        message: "unexpected indentation".to_string(),
                    });
                }
                self.pos += 1;
                continue;
            }

            let number = line.number;
            let content = line.content;
            self.check_grid(item_indent, offset, number)?;
            if content == "-" {
                self.pos += 1;
                items.push(ToonValue::Object(ToonMap::new()));
                continue;
            }
            let Some(rest) = content.strip_prefix("- ") else {
                // A non-item line at item indentation terminates the list
                return Err(ToonDecodeError::CountMismatch {
                    line: header_line,
                    expected: len,
                    found: items.len(),
                });
            };
            let rest = rest.trim();

            // Content after the marker is anchored two columns past it, so
            // everything below measures from a shifted grid
            let item = if rest.starts_with('[') {
                self.parse_array_header(rest, number, item_indent, offset + 2)?
            } else if starts_with_key(rest) {
                self.parse_list_item_object(rest, number, item_indent, offset)?
            } else {
                self.pos += 1;
                lex::parse_primitive(rest).map_err(|e| ToonDecodeError::from_lex(e, number))?
            };
            items.push(item);
        }
        self.reject_surplus(base_indent)?;
        Ok(ToonValue::Array(items))
    }

    /// An object introduced on a `- ` line: its first field shares the
    /// marker line, later fields sit two columns deeper, aligned under the
    /// marker content. That column is fixed by the literal marker width,
    /// not by the indent unit, so continuation lines are exempt from the
    /// grid check and the scope below them measures from a shifted grid.
    /// The classifier for the first field is the same one
    /// `parse_object_entries` uses for ordinary lines.
    fn parse_list_item_object(
        &mut self,
        first_content: &str,
        number: usize,
        item_indent: usize,
        offset: usize,
    ) -> Result<ToonValue, ToonDecodeError> {
        let cont_indent = item_indent + 2;
        let cont_offset = offset + 2;
        let mut entries = vec![self.parse_field(first_content, number, cont_indent, cont_offset)?];
        loop {
            self.skip_blanks();
            let Some(line) = self.peek() else { break };
            if line.indent != cont_indent {
                break;
            }
            let content = line.content;
            let line_number = line.number;
            entries.push(self.parse_field(content, line_number, cont_indent, cont_offset)?);
        }
        self.assemble_object(entries)
    }

    /// After a declared count is satisfied, anything still indented past
    /// the array header is surplus.
    fn reject_surplus(&self, base_indent: usize) -> Result<(), ToonDecodeError> {
        if let Some(next) = self.peek_nonblank() {
            if next.indent > base_indent {
                return Err(ToonDecodeError::ExtraRows { line: next.number });
            }
        }
        Ok(())
    }

    /// Turn parsed entries into an object value: strict duplicate
    /// detection, then plain insertion or path expansion.
    fn assemble_object(&self, entries: Vec<Entry>) -> Result<ToonValue, ToonDecodeError> {
        if self.options.strict {
            for (i, entry) in entries.iter().enumerate() {
                if entries[..i].iter().any(|e| e.key == entry.key) {
                    return Err(ToonDecodeError::DuplicateKey {
                        line: entry.line,
                        key: entry.key.clone(),
                    });
                }
            }
        }

        let mut map = ToonMap::with_capacity(entries.len());
        let expand = self.options.expand_paths == PathExpansion::Safe;
        for entry in entries {
            let parts: Vec<&str> = if expand && !entry.was_quoted && entry.key.contains('.') {
                let segments: Vec<&str> = entry.key.split('.').collect();
                if segments.iter().all(|s| lex::is_identifier(s)) {
                    segments
                } else {
                    vec![]
                }
            } else {
                vec![]
            };
            if parts.len() >= 2 {
                self.insert_path(&mut map, &parts, entry.value, entry.line)?;
            } else if expand {
                // Single-segment inserts share the merge rules so literal
                // and expanded keys interact consistently
                self.insert_path(&mut map, &[entry.key.as_str()], entry.value, entry.line)?;
            } else {
                map.insert(entry.key, entry.value);
            }
        }
        Ok(ToonValue::Object(map))
    }

    /// Insert a value at a dotted path, creating intermediate objects.
    /// Object-into-object leaves shallow-merge (new keys win); any other
    /// collision is a conflict in strict mode and last-writer-wins
    /// otherwise.
    fn insert_path(
        &self,
        map: &mut ToonMap,
        parts: &[&str],
        value: ToonValue,
        line: usize,
    ) -> Result<(), ToonDecodeError> {
        let mut current = map;
        for (depth, part) in parts[..parts.len() - 1].iter().enumerate() {
            if !current.contains_key(*part)
                || !matches!(current.get(*part), Some(ToonValue::Object(_)))
            {
                if current.contains_key(*part) && self.options.strict {
                    return Err(ToonDecodeError::PathExpansionConflict {
                        line,
                        path: parts[..=depth].join("."),
                    });
                }
                current.insert(part.to_string(), ToonValue::Object(ToonMap::new()));
            }
            let Some(ToonValue::Object(child)) = current.get_mut(*part) else {
                unreachable!("slot was just normalized to an object");
            };
            current = child;
        }

        let leaf = parts[parts.len() - 1];
        let existing_is_object = matches!(current.get(leaf), Some(ToonValue::Object(_)));
        if existing_is_object {
            if let ToonValue::Object(incoming) = value {
                let Some(ToonValue::Object(existing)) = current.get_mut(leaf) else {
                    unreachable!("checked just above");
                };
                for (k, v) in incoming {
                    existing.insert(k, v);
                }
                return Ok(());
            }
            if self.options.strict {
                return Err(ToonDecodeError::PathExpansionConflict {
                    line,
                    path: parts.join("."),
                });
            }
        } else if current.contains_key(leaf) && self.options.strict {
            return Err(ToonDecodeError::PathExpansionConflict {
                line,
                path: parts.join("."),
            });
        }
        current.insert(leaf.to_string(), value);
        Ok(())
    }
}

/// `[N]` with an optional trailing delimiter indicator. Returns the
/// declared count, the active delimiter, and the text after `]`.
fn parse_bracket_segment(
    rest: &str,
    number: usize,
) -> Result<(usize, Delimiter, &str), ToonDecodeError> {
    let invalid = |message: &str| ToonDecodeError::InvalidArrayHeader {
        line: number,
        message: message.to_string(),
    };
    let inner = rest
        .strip_prefix('[')
        .ok_or_else(|| invalid("expected '['"))?;
    let close = inner.find(']').ok_or_else(|| invalid("missing ']'"))?;
    let mut segment = &inner[..close];
    let after = &inner[close + 1..];

    let mut delimiter = Delimiter::Comma;
    if let Some(last) = segment.chars().last() {
        if let Some(d) = Delimiter::from_indicator(last) {
            delimiter = d;
            segment = &segment[..segment.len() - last.len_utf8()];
        }
    }
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("count must be a decimal integer"));
    }
    let len = segment
        .parse::<usize>()
        .map_err(|_| invalid("count out of range"))?;
    Ok((len, delimiter, after))
}

/// Split and unquote the field names of a tabular header, keeping each
/// field's quoting flag for path expansion downstream.
fn parse_header_fields(
    text: &str,
    delimiter: Delimiter,
    number: usize,
) -> Result<Vec<(String, bool)>, ToonDecodeError> {
    let raw = lex::split_by_delimiter(text, delimiter);
    let mut fields = Vec::with_capacity(raw.len());
    for token in &raw {
        if token.is_empty() {
            return Err(ToonDecodeError::InvalidArrayHeader {
                line: number,
                message: "empty field name".to_string(),
            });
        }
        if let Some(inner) = token.strip_prefix('"') {
            let end = lex::find_closing_quote(inner, 0)
                .ok_or(ToonDecodeError::UnterminatedString { line: number })?;
            if end != inner.len() - 1 {
                return Err(ToonDecodeError::InvalidArrayHeader {
                    line: number,
                    message: "trailing characters after quoted field".to_string(),
                });
            }
            let key = lex::unescape(&inner[..end])
                .map_err(|e| ToonDecodeError::from_lex(e, number))?;
            fields.push((key, true));
        } else {
            fields.push((token.clone(), false));
        }
    }
    Ok(fields)
}

/// True when a trimmed line can only be a primitive: a complete quoted
/// string, or anything carrying no colon at all.
fn line_is_bare_primitive(content: &str) -> bool {
    if let Some(inner) = content.strip_prefix('"') {
        return matches!(lex::find_closing_quote(inner, 0), Some(end) if end == inner.len() - 1);
    }
    !content.contains(':')
}

/// Does the text after a `- ` marker open an object field? True when a key
/// token followed by `:` or a bracket header can be scanned off its front.
fn starts_with_key(content: &str) -> bool {
    match lex::parse_key(content) {
        Ok(pk) => {
            (!pk.key.is_empty() || pk.was_quoted)
                && (pk.rest.starts_with(':') || pk.rest.starts_with('['))
        }
        Err(_) => false,
    }
}

/// Byte index of `target` outside any quoted span.
fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = lex::find_closing_quote(s, i + 1)? + 1;
            }
            b if b == target as u8 => return Some(i),
            _ => i += 1,
        }
    }
    None
}
