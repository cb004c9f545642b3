/// Builds a [`Value`](crate::Value) from a literal, list or block syntax.
///
/// Strings become scalars, `[...]` becomes a list and `{ "key": value }`
/// becomes a block. Repeated block keys keep their first position.
///
/// # Examples
///
/// ```rust
/// use uplang::{up, Value};
///
/// let server = up!({
///     "host": "localhost",
///     "ports": ["80", "443"]
/// });
///
/// let ports = server.as_block().and_then(|b| b.get("ports")).unwrap();
/// assert_eq!(ports, &up!(["80", "443"]));
/// ```
#[macro_export]
macro_rules! up {
    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::up!($elem)),*])
    };

    // Handle empty block
    ({}) => {
        $crate::Value::Block($crate::Block::new())
    };

    // Handle non-empty block
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut block = $crate::Block::new();
        $(
            block.insert($key.to_string(), $crate::up!($value));
        )*
        $crate::Value::Block(block)
    }};

    // Scalars
    ($s:expr) => {
        $crate::Value::Scalar(::std::string::ToString::to_string(&$s))
    };
}
