use thiserror::Error;

/// Errors that can occur when parsing `--events` flags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagParseError {
    #[error("event flag cannot be empty")]
    EmptyFlag,

    /// Always carries the complete flag text, never the failing fragment.
    #[error("invalid filter flag format: {0}")]
    InvalidFilterFlagFormat(String),
}

impl FlagParseError {
    pub(crate) fn invalid_format(flag: &str) -> Self {
        FlagParseError::InvalidFilterFlagFormat(flag.to_string())
    }
}
