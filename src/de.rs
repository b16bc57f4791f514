//! Conversion from [`ToonValue`] trees into serde-deserializable types.
//!
//! [`ValueDeserializer`] implements `serde::Deserializer` over an owned
//! value tree. The high-level [`from_str`](crate::from_str) routes through
//! [`decode`](crate::decode()) and then through here.
//!
//! ```rust
//! use serde::Deserialize;
//! use toon_codec::from_str;
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let point: Point = from_str("x: 1\ny: 2").unwrap();
//! assert_eq!(point, Point { x: 1, y: 2 });
//! ```

use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

use crate::{ToonDecodeError, ToonValue};

type Result<T> = std::result::Result<T, ToonDecodeError>;

/// Deserialize a `T` from an already-decoded value tree.
///
/// # Errors
///
/// Returns an error when the tree's shape does not match what `T` expects.
pub fn from_value<T>(value: ToonValue) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// A `serde::Deserializer` reading from an owned [`ToonValue`].
pub struct ValueDeserializer {
    value: ToonValue,
}

impl ValueDeserializer {
    pub fn new(value: ToonValue) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = ToonDecodeError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            ToonValue::Null => visitor.visit_unit(),
            ToonValue::Bool(b) => visitor.visit_bool(b),
            ToonValue::Number(n) => visit_number(n, visitor),
            ToonValue::String(s) => visitor.visit_string(s),
            ToonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            ToonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            ToonValue::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            ToonValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            ToonValue::Object(obj) => {
                if obj.len() == 1 {
                    let (variant, value) = obj.into_iter().next().expect("len checked");
                    visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    })
                } else {
                    Err(de::Error::custom(
                        "expected an object with a single variant key",
                    ))
                }
            }
            other => Err(de::Error::custom(format!(
                "expected enum, found {other:?}"
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

/// Whole numbers in the exactly-representable window visit as integers so
/// integer-typed fields accept them; everything else visits as `f64`.
fn visit_number<'de, V>(n: f64, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    if n.fract() == 0.0 && n.is_finite() && n.abs() <= 9_007_199_254_740_992.0 {
        if n >= 0.0 {
            return visitor.visit_u64(n as u64);
        }
        return visitor.visit_i64(n as i64);
    }
    visitor.visit_f64(n)
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<ToonValue>,
}

impl SeqDeserializer {
    fn new(vec: Vec<ToonValue>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = ToonDecodeError;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, ToonValue>,
    value: Option<ToonValue>,
}

impl MapDeserializer {
    fn new(map: crate::ToonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = ToonDecodeError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(ToonValue::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(de::Error::custom(
                "next_value_seed called before next_key_seed",
            )),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<ToonValue>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = ToonDecodeError;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant =
            seed.deserialize(ValueDeserializer::new(ToonValue::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<ToonValue>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = ToonDecodeError;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(ToonValue::Null) | None => Ok(()),
            _ => Err(de::Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(de::Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(ToonValue::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(de::Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(ToonValue::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(de::Error::custom("expected struct variant")),
        }
    }
}
