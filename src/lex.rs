//! Lexical rules shared by both halves of the codec.
//!
//! One theory of "which characters are safe where" drives everything: the
//! encoder consults the quoting predicates before emitting a bare string,
//! and the decoder's bare-lexeme acceptance is the mirror image of the same
//! rules. Keeping both sides in this module is what makes the discipline
//! symmetric: a string the encoder leaves unquoted is guaranteed to come
//! back verbatim from [`parse_primitive`].
//!
//! The other residents are the escape/unescape pair, the delimiter-aware
//! field splitter, the key scanner, and the primitive codec.

use crate::error::LexError;
use crate::{Delimiter, ToonValue};

/// Reports whether `s`, appearing as a free value, must be quoted.
///
/// True when the bare form would be misread as a keyword, a number, a
/// structural token, or would lose characters to trimming. The active
/// delimiter matters only for rule nine: comma is a safe payload character
/// whenever it is not the separator in force.
pub(crate) fn needs_quoting(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    if s == "true" || s == "false" || s == "null" {
        return true;
    }
    if is_number_lexeme(s) {
        return true;
    }
    if has_forbidden_leading_zero(s) {
        return true;
    }
    if s.contains('[') || s.contains('{') {
        return true;
    }
    // A lone hyphen, or hyphen-then-whitespace, reads as a list marker
    if s == "-" {
        return true;
    }
    if let Some(rest) = s.strip_prefix('-') {
        if rest.chars().next().is_some_and(char::is_whitespace) {
            return true;
        }
    }
    if s.contains('\n') || s.contains('\r') || s.contains('\t') || s.contains('\\') || s.contains('"')
    {
        return true;
    }
    if s.trim() != s || s.chars().all(char::is_whitespace) {
        return true;
    }
    s.chars().any(|c| !is_safe_char(c, delimiter))
}

/// Stricter predicate for values inside inline arrays and tabular rows:
/// the active delimiter and `:` must additionally be quoted away.
pub(crate) fn needs_quoting_in_array(s: &str, delimiter: Delimiter) -> bool {
    needs_quoting(s, delimiter) || s.contains(delimiter.as_char()) || s.contains(':')
}

/// Reports whether an object key must be quoted.
///
/// Keys are a narrower lexical space than values: the bare-key scanner
/// accepts only word characters, dots, and hyphens, so anything outside
/// that set must be quoted to scan back at all. Hyphens are scannable but
/// still quoted (they read as list markers or signs), as are all-digit
/// keys (they read as numbers).
pub(crate) fn needs_quoting_as_key(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if s.contains('-') {
        return true;
    }
    s.chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
}

fn is_safe_char(c: char, delimiter: Delimiter) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || (c as u32) >= 0x80
        || (c == ',' && delimiter != Delimiter::Comma)
}

/// Escapes a string for emission between double quotes.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape`]. Rejects any backslash not followed by one of
/// `n`, `r`, `t`, `"`, `\`.
pub(crate) fn unescape(s: &str) -> Result<String, LexError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => return Err(LexError::InvalidEscape(other)),
                None => return Err(LexError::UnterminatedString),
            }
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Splits a line on the active delimiter, honoring quotes and escapes.
///
/// Quote characters are retained in the field text; [`parse_primitive`]
/// strips them later. Fields come back trimmed.
pub(crate) fn split_by_delimiter(s: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == '\\' {
            current.push(ch);
            escaped = true;
        } else if ch == '"' {
            current.push(ch);
            in_quotes = !in_quotes;
        } else if ch == delim && !in_quotes {
            fields.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Byte index of the closing `"` for a quote opened just before `start`,
/// skipping over `\`-escaped characters.
pub(crate) fn find_closing_quote(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// A key extracted from the front of a content line.
pub(crate) struct ParsedKey<'a> {
    pub key: String,
    /// Unconsumed remainder, beginning with `[`, `:`, or whatever stopped
    /// the scan.
    pub rest: &'a str,
    /// Quoted keys are exempt from path expansion, so the flag travels with
    /// the key through the decoder.
    pub was_quoted: bool,
}

/// Extracts the next key token from a trimmed content line.
///
/// A leading `"` starts a quoted key scanned with escape awareness; an
/// unclosed quote is a failure. Otherwise the key is the longest prefix of
/// word characters, `.`, and `-`, stopping at `[`, `:`, or end of line.
pub(crate) fn parse_key(line: &str) -> Result<ParsedKey<'_>, LexError> {
    if let Some(rest) = line.strip_prefix('"') {
        let end = find_closing_quote(rest, 0).ok_or(LexError::UnterminatedString)?;
        let key = unescape(&rest[..end])?;
        Ok(ParsedKey {
            key,
            rest: &rest[end + 1..],
            was_quoted: true,
        })
    } else {
        let end = line
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
            .map_or(line.len(), |(i, _)| i);
        Ok(ParsedKey {
            key: line[..end].to_string(),
            rest: &line[end..],
            was_quoted: false,
        })
    }
}

/// Converts a lexeme to a primitive value.
///
/// Resolution order: quoted string, keyword, number, bare string. A lexeme
/// that looks numeric but carries a forbidden leading zero (`007`) stays a
/// string, mirroring the quoting rules on the encode side.
pub(crate) fn parse_primitive(lexeme: &str) -> Result<ToonValue, LexError> {
    if lexeme.starts_with('"') {
        if lexeme.len() < 2 || !lexeme.ends_with('"') {
            return Err(LexError::UnterminatedString);
        }
        let inner = &lexeme[1..lexeme.len() - 1];
        return Ok(ToonValue::String(unescape(inner)?));
    }
    match lexeme {
        "true" => return Ok(ToonValue::Bool(true)),
        "false" => return Ok(ToonValue::Bool(false)),
        "null" => return Ok(ToonValue::Null),
        _ => {}
    }
    if is_number_lexeme(lexeme) && !has_forbidden_leading_zero(lexeme) {
        if let Ok(f) = lexeme.parse::<f64>() {
            // Overflowing exponents parse to infinity; those lexemes are
            // unrepresentable as numbers and fall through to strings
            if f.is_finite() {
                let f = if f == 0.0 { 0.0 } else { f };
                return Ok(ToonValue::Number(f));
            }
        }
    }
    Ok(ToonValue::String(lexeme.to_string()))
}

/// Canonical text for a finite double: shortest round-trip form, `-0`
/// folded to `0`. Callers screen out non-finite values first.
pub(crate) fn format_number(f: f64) -> String {
    let f = if f == 0.0 { 0.0 } else { f };
    f.to_string()
}

/// Matches an optionally-signed decimal with optional fraction and
/// optional exponent: `-?\d+(\.\d+)?([eE][+-]?\d+)?`.
pub(crate) fn is_number_lexeme(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i = 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// `0` followed by another digit (after an optional sign) is not a
/// legitimate number lexeme.
pub(crate) fn has_forbidden_leading_zero(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let bytes = digits.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

/// `[A-Za-z_][A-Za-z0-9_]*`, the segment shape required for key folding
/// and path expansion.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
