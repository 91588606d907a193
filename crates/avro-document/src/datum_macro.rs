/// A declarative macro for building datums, inspired by serde_json's `json!` macro.
///
/// - `null` creates [`Value::Null`](crate::Value::Null)
/// - `[a, b, ...]` creates an array
/// - `{"key": value, ...}` creates a string-keyed map
/// - anything else is converted with `Value::from`
///
/// Elements are single token trees, so negative numbers and other compound
/// expressions need parentheses: `[(-1), (i64::MAX)]`.
///
/// # Examples
///
/// ```
/// use avro_document::{datum, Value};
///
/// let value = datum!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "age": null,
///     "score": (-3),
/// });
/// assert_eq!(value.get("name"), Some(&Value::from("Alice")));
/// ```
#[macro_export]
macro_rules! datum {
    (null) => {
        $crate::value::Value::Null
    };

    ([]) => {
        $crate::value::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::value::Value::Array(::std::vec![ $( $crate::datum!($elem) ),+ ])
    };

    ({}) => {
        $crate::value::Value::Map($crate::value::Map::new())
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut map = $crate::value::Map::new();
        $(
            map.insert($crate::value::ObjectKey::from($key), $crate::datum!($value));
        )+
        $crate::value::Value::Map(map)
    }};

    ($other:expr) => {
        $crate::value::Value::from($other)
    };
}
