#[macro_export]
macro_rules! assert_ok {
    ( $expression:expr ) => {
        let result = $expression;
        match result {
            Ok(result) => result,
            Err(error) => {
                panic!(
                    "Operation '{}' should be successful but it failed with: {}",
                    stringify!($expression),
                    error
                );
            }
        }
    };
}

#[macro_export]
macro_rules! assert_code {
    ($actual:expr, $expected:expr) => {
        let actual = $actual
            .unwrap_or_else(|error| panic!("Expected generated code but got an error: {}", error));
        assert_eq!(actual, $expected, "Generated code mismatch");
    };
}
