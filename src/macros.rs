/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Values in object and array position are matched as single token trees.
/// Negative numbers and other multi-token expressions must therefore be
/// parenthesized: `(-3.5)`, `(format!("{}", n))`.
///
/// ## Examples
///
/// ```rust
/// use toonkit::toon;
///
/// let value = toon!({
///     "name": "Alice",
///     "tags": ["admin", "ops"],
///     "active": true,
///     "score": 9.5,
///     "offset": (-12),
///     "manager": null
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::ToonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: any expression with a `From` conversion into Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, ToonMap, Value};

    #[test]
    fn test_toon_macro_primitives() {
        assert_eq!(toon!(null), Value::Null);
        assert_eq!(toon!(true), Value::Bool(true));
        assert_eq!(toon!(false), Value::Bool(false));
        assert_eq!(toon!(42), Value::Number(Number::Integer(42)));
        assert_eq!(toon!(-7), Value::Number(Number::Integer(-7)));
        assert_eq!(toon!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(toon!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_toon_macro_arrays() {
        assert_eq!(toon!([]), Value::Array(vec![]));

        let arr = toon!([1, "two", null]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::String("two".to_string()));
                assert_eq!(vec[2], Value::Null);
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_toon_macro_objects() {
        assert_eq!(toon!({}), Value::Object(ToonMap::new()));

        let obj = toon!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_toon_macro_negative_numbers() {
        // Bare at the top level, parenthesized in object and array position.
        assert_eq!(toon!(-3.5), Value::Number(Number::Float(-3.5)));

        let obj = toon!({ "temp": (-40), "delta": (-0.5) });
        match obj {
            Value::Object(map) => {
                assert_eq!(map.get("temp"), Some(&Value::Number(Number::Integer(-40))));
                assert_eq!(map.get("delta"), Some(&Value::Number(Number::Float(-0.5))));
            }
            _ => panic!("Expected object"),
        }

        assert_eq!(
            toon!([(-1), 2]),
            Value::Array(vec![
                Value::Number(Number::Integer(-1)),
                Value::Number(Number::Integer(2)),
            ])
        );
    }

    #[test]
    fn test_toon_macro_nested() {
        let value = toon!({
            "users": [
                { "id": 1, "name": "Alice" },
                { "id": 2, "name": "Bob" }
            ]
        });
        let users = value
            .as_object()
            .and_then(|obj| obj.get("users"))
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(users.len(), 2);
    }
}
