//! Shared token predicates used by every stage of flag parsing.

/// True if the token starts or ends with a whitespace character.
pub fn has_leading_or_trailing_whitespace(token: &str) -> bool {
    token.starts_with(char::is_whitespace) || token.ends_with(char::is_whitespace)
}

/// A token is usable when it is non-empty and not padded with whitespace.
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !has_leading_or_trailing_whitespace(token)
}
