//! The [`toon!`] macro for building [`ToonValue`](crate::ToonValue) trees
//! with JSON-like syntax.

/// Construct a [`ToonValue`](crate::ToonValue) from a literal layout.
///
/// ```rust
/// use toon_codec::toon;
///
/// let data = toon!({
///     "name": "Alice",
///     "scores": [95, 87, 92],
///     "active": true,
///     "manager": null
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::ToonValue::Null
    };

    (true) => {
        $crate::ToonValue::Bool(true)
    };

    (false) => {
        $crate::ToonValue::Bool(false)
    };

    ([]) => {
        $crate::ToonValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::ToonValue::Array(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::ToonValue::Object($crate::ToonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::ToonValue::Object(object)
    }};

    // Fallback: any expression convertible through serde
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::ToonValue::Null)
    };
}
