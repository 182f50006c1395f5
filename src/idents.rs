use std::sync::LazyLock;

static IDENTIFIER: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Identifier regex should be valid")
});

// Dotted qualified name, optionally followed by a generic argument list and
// array suffixes. Nothing more is attempted; the model treats type names as
// opaque and this check only exists for names typed on the command line.
static TYPE_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*(<[A-Za-z0-9_$.,<>\[\] ?]+>)?(\[\])*$",
    )
    .expect("Type name regex should be valid")
});

/// Checks that a string is usable as a variable name in the target syntax.
pub fn validate_variable_name(name: &str) -> crate::Result<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(crate::CodescribeError::InvalidIdentifier(name.to_string()))
    }
}

/// Checks that a string is usable as a type name in the target syntax.
pub fn validate_type_name(name: &str) -> crate::Result<()> {
    if TYPE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(crate::CodescribeError::InvalidTypeName(name.to_string()))
    }
}
