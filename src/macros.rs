/// Concatenates any number of `Display` values into one `String`.
///
/// Values are appended in argument order with no separators, no quoting, and
/// no recursion into container structure. `cat!()` with no arguments yields
/// an empty string.
///
/// # Examples
///
/// ```rust
/// use strkit::cat;
///
/// assert_eq!(cat!("hello ", 23), "hello 23");
/// assert_eq!(cat!("127.0.0.1", ':', 7777), "127.0.0.1:7777");
/// assert_eq!(cat!(), "");
/// ```
#[macro_export]
macro_rules! cat {
    () => {
        ::std::string::String::new()
    };

    ($($value:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::with_capacity(64);
        $($crate::cat::append(&mut out, $value);)+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cat_empty() {
        assert_eq!(cat!(), "");
    }

    #[test]
    fn test_cat_mixed_types() {
        assert_eq!(cat!("hello ", 23), "hello 23");
        assert_eq!(cat!(1, '+', 1, "=", 2), "1+1=2");
        assert_eq!(cat!(true, ' ', 0.5), "true 0.5");
    }

    #[test]
    fn test_cat_trailing_comma() {
        assert_eq!(cat!("a", "b",), "ab");
    }

    #[test]
    fn test_cat_no_separators_no_quotes() {
        let host = String::from("db");
        assert_eq!(cat!(host, ':', 5432u16), "db:5432");
    }
}
