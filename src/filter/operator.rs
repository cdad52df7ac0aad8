use super::error::FlagParseError;
use super::validate::has_leading_or_trailing_whitespace;
use serde::{Serialize, Serializer};
use std::fmt;

/// Characters that can start a comparison operator
pub const OPERATOR_CHARS: [char; 4] = ['=', '!', '<', '>'];

/// Operator attached to an event flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Plain selection, no comparison
    #[default]
    None,
    /// Exclusion of a previously selected event (`-name`)
    Unset,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl Operator {
    /// Textual form as it appears on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Unset => "-",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
        }
    }

    /// Whether this operator compares against values
    pub fn is_comparison(&self) -> bool {
        !matches!(self, Operator::None | Operator::Unset)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Operator token and value text taken from a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorParts<'a> {
    pub operator: Operator,
    /// Everything after the operator token, possibly empty
    pub values: &'a str,
    /// Verbatim suffix of the flag starting at the operator
    pub operator_and_values: &'a str,
}

/// Find the byte index of the first operator character in `flag`.
pub fn find_operator(flag: &str) -> Option<usize> {
    flag.find(OPERATOR_CHARS)
}

/// Determine the operator starting at `op_idx` and the values following it.
///
/// `op_idx` only marks the first operator character, so two-character
/// operators are resolved by peeking at the next byte. A `!` not followed
/// by `=` is rejected. Values may be empty but must not be padded with
/// whitespace.
pub fn extract_operator_and_values(
    flag: &str,
    op_idx: usize,
) -> Result<OperatorParts<'_>, FlagParseError> {
    let operator_and_values = flag
        .get(op_idx..)
        .ok_or_else(|| FlagParseError::invalid_format(flag))?;

    let followed_by_eq = operator_and_values
        .get(1..)
        .is_some_and(|rest| rest.starts_with('='));

    let (operator, token_len) = match operator_and_values.chars().next() {
        Some('=') => (Operator::Equal, 1),
        Some('!') if followed_by_eq => (Operator::NotEqual, 2),
        Some('<') if followed_by_eq => (Operator::LessEqual, 2),
        Some('<') => (Operator::Less, 1),
        Some('>') if followed_by_eq => (Operator::GreaterEqual, 2),
        Some('>') => (Operator::Greater, 1),
        _ => return Err(FlagParseError::invalid_format(flag)),
    };

    let values = &operator_and_values[token_len..];
    if has_leading_or_trailing_whitespace(values) {
        return Err(FlagParseError::invalid_format(flag));
    }

    Ok(OperatorParts {
        operator,
        values,
        operator_and_values,
    })
}
