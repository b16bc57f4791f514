//! Configuration options for the TOON codec.
//!
//! Two independent option records configure the two directions:
//!
//! - [`EncodeOptions`]: indentation, delimiter, key folding, strictness
//! - [`DecodeOptions`]: strictness, expected indent width, path expansion
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode, Delimiter, EncodeOptions, ToonValue};
//!
//! let value = ToonValue::Array(vec![
//!     ToonValue::from("a"),
//!     ToonValue::from("b"),
//! ]);
//!
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(encode(&value, &options).unwrap(), "[2|]: a|b");
//! ```

/// Delimiter choice for inline arrays and tabular rows.
///
/// The chosen delimiter is announced inside the bracket header (`[3|]`,
/// `[3\t]`) so the decoder needs no out-of-band configuration. Comma is the
/// default and is left implicit in headers.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Recognizes a delimiter indicator character from a bracket header.
    #[must_use]
    pub(crate) fn from_indicator(ch: char) -> Option<Self> {
        match ch {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Key folding mode for the encoder.
///
/// When enabled, chains of single-key objects collapse into a dotted key:
/// `{a: {b: {c: 1}}}` becomes `a.b.c: 1`. Only identifier-safe segments are
/// folded, so the output always survives [`PathExpansion::Safe`] on decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyFolding {
    /// No key folding.
    #[default]
    Off,
    /// Fold chains whose every segment matches `[A-Za-z_][A-Za-z0-9_]*`.
    Safe,
}

/// Path expansion mode for the decoder.
///
/// When enabled, unquoted dotted keys are expanded back into nested objects:
/// `a.b.c: 1` decodes as `{a: {b: {c: 1}}}`. Quoted keys never expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathExpansion {
    /// No path expansion; dotted keys stay literal.
    #[default]
    Off,
    /// Expand unquoted keys whose segments all match `[A-Za-z_][A-Za-z0-9_]*`.
    Safe,
}

/// Configuration options for encoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Delimiter, EncodeOptions, KeyFolding};
///
/// // Defaults: two-space indent, comma delimiter, no folding, lenient
/// let options = EncodeOptions::new();
///
/// // Custom configuration
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab)
///     .with_key_folding(KeyFolding::Safe)
///     .with_flatten_depth(3)
///     .with_strict(true);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Whitespace emitted per nesting level.
    pub indent: String,
    /// Separator inside bracket headers and array rows.
    pub delimiter: Delimiter,
    /// Whether single-key object chains collapse into dotted keys.
    pub key_folding: KeyFolding,
    /// Maximum number of segments a folded key may accumulate.
    pub flatten_depth: usize,
    /// When set, non-finite numbers are rejected instead of emitted as `null`.
    pub strict: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: "  ".to_string(),
            delimiter: Delimiter::default(),
            key_folding: KeyFolding::default(),
            flatten_depth: usize::MAX,
            strict: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width in spaces per nesting level.
    #[must_use]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Sets the indentation unit to an arbitrary whitespace string.
    #[must_use]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent = unit.into();
        self
    }

    /// Sets the delimiter for inline arrays and tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the key folding mode.
    #[must_use]
    pub fn with_key_folding(mut self, key_folding: KeyFolding) -> Self {
        self.key_folding = key_folding;
        self
    }

    /// Caps the number of segments a folded key may accumulate.
    #[must_use]
    pub fn with_flatten_depth(mut self, depth: usize) -> Self {
        self.flatten_depth = depth;
        self
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Configuration options for decoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{DecodeOptions, PathExpansion};
///
/// let options = DecodeOptions::new()
///     .with_strict(true)
///     .with_expand_paths(PathExpansion::Safe);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Enables indentation validation, blank-line rejection inside arrays,
    /// duplicate-key rejection, and path-conflict errors.
    pub strict: bool,
    /// Expected indent width; strict mode requires every indent to be a
    /// multiple of this, measured from the two-column offset of any
    /// enclosing `- ` marker.
    pub indent: usize,
    /// Whether unquoted dotted keys expand into nested objects.
    pub expand_paths: PathExpansion,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict: false,
            indent: 2,
            expand_paths: PathExpansion::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates default options (lenient, two-space indent, no expansion).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the expected indent width used by strict validation.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the path expansion mode.
    #[must_use]
    pub fn with_expand_paths(mut self, expand_paths: PathExpansion) -> Self {
        self.expand_paths = expand_paths;
        self
    }
}
