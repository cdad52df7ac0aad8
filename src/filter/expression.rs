use super::error::FlagParseError;
use super::validate::is_valid_token;

/// Components of a dotted filter path such as `openat.data.pathname`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParts<'a> {
    /// Event name (first segment)
    pub name: &'a str,
    /// Option category (second segment), e.g. "scope" or "data"
    pub category: &'a str,
    /// Option field (third segment), empty when absent
    pub field: &'a str,
}

/// Split a dotted filter expression into its parts, validating them.
///
/// Valid formats are `name.category` and `name.category.field`. Errors
/// report `flag`, the complete user input, rather than `expression`.
pub fn split_filter_expression<'a>(
    expression: &'a str,
    flag: &str,
) -> Result<FilterParts<'a>, FlagParseError> {
    let segments: Vec<&str> = expression.split('.').collect();

    let (name, category, field) = match segments.as_slice() {
        [name, category] => (*name, *category, ""),
        [name, category, field] => {
            if !is_valid_token(field) {
                return Err(FlagParseError::invalid_format(flag));
            }
            (*name, *category, *field)
        }
        _ => return Err(FlagParseError::invalid_format(flag)),
    };

    if !is_valid_token(name) || !is_valid_token(category) {
        return Err(FlagParseError::invalid_format(flag));
    }

    Ok(FilterParts {
        name,
        category,
        field,
    })
}
