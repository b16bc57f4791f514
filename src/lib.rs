//! # toon_codec
//!
//! Encoder and decoder for **TOON** (Token-Oriented Object Notation), a
//! compact, indentation-sensitive, human-readable serialization format. It
//! represents the same data model as JSON with substantially fewer tokens
//! when consumed by language models: braces give way to indentation,
//! strings are bare wherever unambiguous, and uniform record arrays factor
//! their field names onto a single tabular header line.
//!
//! ## Quick start
//!
//! ```rust
//! use toon_codec::{decode, encode, toon, DecodeOptions, EncodeOptions};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "scores": [95, 87, 92]
//! });
//!
//! let text = encode(&value, &EncodeOptions::default()).unwrap();
//! assert_eq!(text, "name: Alice\nscores[3]: 95,87,92");
//!
//! let back = decode(&text, &DecodeOptions::default()).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ## Tabular arrays
//!
//! Arrays of records sharing one field schema compress best of all:
//!
//! ```rust
//! use toon_codec::{encode, toon, EncodeOptions};
//!
//! let users = toon!({
//!     "users": [
//!         {"id": 1, "name": "Alice", "role": "admin"},
//!         {"id": 2, "name": "Bob", "role": "user"}
//!     ]
//! });
//! let text = encode(&users, &EncodeOptions::default()).unwrap();
//! assert_eq!(text, "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user");
//! ```
//!
//! ## Serde integration
//!
//! Any `Serialize`/`Deserialize` type can round-trip through the value
//! tree:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Design notes
//!
//! - Both directions are pure functions of their inputs and options: no
//!   global state, no caches, trivially reentrant.
//! - Output is byte-exact deterministic; objects keep insertion order.
//! - Numeric fidelity is IEEE-754 double precision, with `-0.0` folded to
//!   `0.0`. Non-finite numbers never appear in output.
//! - Errors carry 1-based line numbers on the decode side; see
//!   [`ToonDecodeError`].
//!
//! The dialect itself is documented in the [`spec`] module.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
mod lex;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod spec;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use decode::decode;
pub use encode::encode;
pub use error::{ToonDecodeError, ToonEncodeError};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, EncodeOptions, KeyFolding, PathExpansion};
pub use ser::{to_value, ToonValueSerializer};
pub use value::ToonValue;

use serde::{de::DeserializeOwned, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be lowered into the TOON data
/// model (non-string map keys, payload-carrying enum variants).
pub fn to_string<T>(value: &T) -> Result<String, ToonEncodeError>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a TOON string with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_string_with_options, Delimiter, EncodeOptions};
///
/// let tags = vec!["a", "b", "c|d"];
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// assert_eq!(
///     to_string_with_options(&tags, &options).unwrap(),
///     "[3|]: a|b|\"c|d\""
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be lowered into the TOON data
/// model, or (in strict mode) contains a non-finite number.
pub fn to_string_with_options<T>(
    value: &T,
    options: &EncodeOptions,
) -> Result<String, ToonEncodeError>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    encode(&tree, options)
}

/// Serialize any `T: Serialize` to a writer in TOON format.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer does.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<(), ToonEncodeError>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer in TOON format with custom
/// options.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer does.
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<(), ToonEncodeError>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| ToonEncodeError::Message(e.to_string()))
}

/// Deserialize a `T` from TOON text with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error with a 1-based line number if the input is not valid
/// TOON, or without one if the tree cannot deserialize into `T`.
pub fn from_str<T>(s: &str) -> Result<T, ToonDecodeError>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserialize a `T` from TOON text with custom options.
///
/// # Errors
///
/// Returns an error if the input is not valid TOON under the given options
/// or cannot deserialize into `T`.
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T, ToonDecodeError>
where
    T: DeserializeOwned,
{
    let tree = decode(s, options)?;
    from_value(tree)
}

/// Deserialize a `T` from an I/O stream of TOON text.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid TOON, or the
/// data cannot deserialize into `T`.
pub fn from_reader<R, T>(mut reader: R) -> Result<T, ToonDecodeError>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| ToonDecodeError::Message(e.to_string()))?;
    from_str(&text)
}

/// Deserialize a `T` from bytes of TOON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or
/// cannot deserialize into `T`.
pub fn from_slice<T>(v: &[u8]) -> Result<T, ToonDecodeError>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| ToonDecodeError::Message(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        let back: User = from_str(&text).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_writer_reader_round_trip() {
        let user = User {
            id: 7,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        };

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &user).unwrap();
        let back: User = from_reader(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_from_slice() {
        let point: Vec<i32> = from_slice(b"[3]: 1,2,3").unwrap();
        assert_eq!(point, vec![1, 2, 3]);
    }

    #[test]
    fn test_to_value() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            active: true,
            tags: vec!["x".to_string()],
        };
        let value = to_value(&user).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("id"), Some(&ToonValue::Number(1.0)));
        assert_eq!(obj.get("name"), Some(&ToonValue::String("Ada".to_string())));
    }
}
