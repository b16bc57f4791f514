//! The TOON dialect implemented by this crate.
//!
//! TOON (Token-Oriented Object Notation) represents the JSON data model
//! with substantially fewer tokens: indentation instead of braces, bare
//! strings wherever unambiguous, and a tabular array form that factors a
//! shared field schema out of uniform record arrays.
//!
//! # Objects
//!
//! Newline-delimited key-value pairs with colon separation; nesting by
//! indentation (two spaces per level by default):
//!
//! ```text
//! name: Alice
//! address:
//!   city: Lisbon
//!   zip: "1000-001"
//! ```
//!
//! Keys are unquoted when they consist of word characters and dots and are
//! not all digits. Anything else (spaces, hyphens, colons, brackets) is
//! quoted: `"user-id": 7`.
//!
//! # Primitives
//!
//! | Type | Syntax |
//! |------|--------|
//! | Null | `null` |
//! | Boolean | `true`, `false` |
//! | Number | `-?digits(.digits)?([eE][+-]?digits)?`, IEEE-754 double |
//! | String | bare or `"quoted"` |
//!
//! `-0` decodes and re-encodes as `0`. Leading-zero lexemes such as `007`
//! are not numbers; they stay strings and are quoted on output.
//!
//! Strings appear bare unless ambiguity forces quotes: reserved words,
//! numeric lexemes, structural characters (`[`, `{`, `:`), the active
//! delimiter, list-marker lookalikes, leading or trailing whitespace, or
//! any character outside the safe class (word characters, whitespace, and
//! everything at or above U+0080). Escapes inside quoted strings are
//! exactly `\\`, `\"`, `\n`, `\r`, `\t`.
//!
//! # Array forms
//!
//! Every array header declares its element count, which the decoder
//! verifies. Three body shapes exist:
//!
//! **Inline**: all elements primitive.
//!
//! ```text
//! tags[3]: admin,ops,dev
//! ```
//!
//! **Tabular**: uniform object arrays; field names move to the header and
//! each element becomes one delimiter-separated row:
//!
//! ```text
//! users[2]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//! ```
//!
//! **List**: anything mixed or nested; one `- ` item per element. An
//! object item puts its first field on the marker line and later fields
//! two columns deeper:
//!
//! ```text
//! items[3]:
//!   - 1
//!   - k: v
//!     extra: true
//!   - [2]: 2,3
//! ```
//!
//! An empty array is just its header: `xs[0]:`.
//!
//! # Delimiters
//!
//! Comma is the default. Tab and pipe are announced inside the bracket so
//! documents stay self-describing:
//!
//! ```text
//! tags[3|]: a|b|c,d
//! ```
//!
//! The row above holds exactly three elements; the comma in `c,d` is
//! ordinary text because pipe is the separator in force.
//!
//! The quoting rules track the choice: a comma is a plain payload
//! character whenever it is not the separator in force, while the active
//! delimiter always forces quotes inside array cells.
//!
//! # Key folding and path expansion
//!
//! With key folding enabled, chains of single-key objects collapse into
//! dotted keys on encode: `{a: {b: {c: 1}}}` becomes `a.b.c: 1`. The
//! decoder's path expansion is the inverse: unquoted dotted keys whose
//! segments are all identifiers grow back into nested objects. Quoted keys
//! never participate, so `"a.b": 1` survives a round trip literally.
//!
//! ```text
//! a.b.c: 1
//! a.b.d: 2
//! ```
//!
//! expands to `{a: {b: {c: 1, d: 2}}}`.
//!
//! # Strict mode
//!
//! Strict decoding additionally rejects tabs in indentation, indent widths
//! that are not a multiple of the configured unit (measured from the
//! two-column offset of any enclosing `- ` marker, whose width is fixed by
//! the marker itself), blank lines between array elements or rows,
//! duplicate keys within one object, and path expansion collisions. Strict
//! encoding refuses `NaN` and infinities instead of emitting `null`.

// This module contains only documentation; no implementation code
