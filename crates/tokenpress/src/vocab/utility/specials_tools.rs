//! # Special Tokens Tools

/// Generate a "<|$name|>" string literal.
#[macro_export]
macro_rules! carrot_str {
    ($value:literal) => {
        concat!("<|", $value, "|>")
    };
}

/// Declare special token constants with [`carrot_str!()`].
///
/// Declare 1:
/// - ``declare_carrot_special!(CONST_NAME, "value");``
///
/// Declare many:
/// - ``declare_carrot_special!( (N1, V1), (N2, V2), ... );``
#[macro_export]
macro_rules! declare_carrot_special {
    ($name:ident, $value:literal $(,)?) => {
        #[doc = concat!("Special token: ", $crate::carrot_str!($value))]
        pub const $name: &str = $crate::carrot_str!($value);
    };

    (($name:ident, $value:literal) $(,)?) => {
        $crate::declare_carrot_special!($name, $value);
    };

    (($name:ident, $value:literal), $($rest:tt)*) => {
        $crate::declare_carrot_special!($name, $value);
        $crate::declare_carrot_special!($($rest)*);
    };
}

#[cfg(test)]
mod tests {
    declare_carrot_special!((TEST_START, "start"), (TEST_STOP, "stop"));

    #[test]
    fn test_specials_tools() {
        assert_eq!(carrot_str!("endoftext"), "<|endoftext|>");
        assert_eq!(TEST_START, "<|start|>");
        assert_eq!(TEST_STOP, "<|stop|>");
    }
}
