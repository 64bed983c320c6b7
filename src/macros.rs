/// Builds a [`Value`](crate::Value) with PHP-like array syntax.
///
/// Keys must be literals; string and numeric keys are stored in their string
/// form. `(@raw "TEXT")` produces a raw fragment.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::{php_array, render};
///
/// let value = php_array!([
///     "name" => "app",
///     "debug" => (@raw "APP_DEBUG"),
///     "ports" => [80, 443]
/// ]);
///
/// assert_eq!(
///     render(&value, 0),
///     "[\n    'name' => 'app',\n    'debug' => APP_DEBUG,\n    'ports' => [\n        80,\n        443\n    ]\n]"
/// );
/// ```
#[macro_export]
macro_rules! php_array {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    (@raw $text:expr) => {
        $crate::Value::Raw(::std::string::ToString::to_string(&$text))
    };

    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($key:literal => $value:tt),+ $(,)? ]) => {{
        let mut map = $crate::ArrayMap::new();
        $(
            map.insert(::std::string::ToString::to_string(&$key), $crate::php_array!($value));
        )+
        $crate::Value::Map(map)
    }};

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::List(vec![$($crate::php_array!($elem)),+])
    };

    (( $($inner:tt)+ )) => {
        $crate::php_array!($($inner)+)
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{ArrayMap, Number, Value};

    #[test]
    fn test_php_array_scalars() {
        assert_eq!(php_array!(null), Value::Null);
        assert_eq!(php_array!(true), Value::Bool(true));
        assert_eq!(php_array!(42), Value::Number(Number::Integer(42)));
        assert_eq!(php_array!(2.5), Value::Number(Number::Float(2.5)));
        assert_eq!(php_array!("hi"), Value::String("hi".to_string()));
        assert_eq!(php_array!(@raw "FOO"), Value::Raw("FOO".to_string()));
    }

    #[test]
    fn test_php_array_list() {
        assert_eq!(php_array!([]), Value::List(vec![]));
        assert_eq!(
            php_array!([1, "a", null, (@raw "X")]),
            Value::List(vec![
                Value::from(1),
                Value::from("a"),
                Value::Null,
                Value::Raw("X".to_string()),
            ])
        );
    }

    #[test]
    fn test_php_array_map() {
        let value = php_array!(["b" => 1, 0 => ["x" => true],]);

        let mut inner = ArrayMap::new();
        inner.insert("x".to_string(), Value::Bool(true));
        let mut expected = ArrayMap::new();
        expected.insert("b".to_string(), Value::from(1));
        expected.insert("0".to_string(), Value::Map(inner));

        assert_eq!(value, Value::Map(expected));
    }
}
