//! Error types used across mountopts.
use thiserror::Error;

/// High-level error categories. Parse errors abort `parse_append`; value
/// errors come from explicit decoding steps a consumer invokes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("parse error")]
    Parse,
    #[error("value error")]
    Value,
}

/// Errors reported by the option engine.
///
/// An unknown option name is not an error: the entry is kept with no map
/// reference and an empty classification mask.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("option '{name}' requires a value")]
    MissingRequiredValue { name: String },
    #[error("option '{name}' does not take a value")]
    UnexpectedValue { name: String },
    #[error("malformed option token '{token}': {reason}")]
    MalformedToken { token: String, reason: &'static str },
    #[error("invalid value '{value}' for option '{name}'")]
    InvalidEnumValue { name: String, value: String },
    #[error("option '{name}' is not an enumerated option")]
    NotEnum { name: String },
    #[error("option '{name}' has a non-numeric value '{value}'")]
    InvalidNumber { name: String, value: String },
}

impl OptionError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            OptionError::MissingRequiredValue { .. }
            | OptionError::UnexpectedValue { .. }
            | OptionError::MalformedToken { .. } => ErrorKind::Parse,
            OptionError::InvalidEnumValue { .. }
            | OptionError::NotEnum { .. }
            | OptionError::InvalidNumber { .. } => ErrorKind::Value,
        }
    }

    pub(crate) fn malformed(token: &str, reason: &'static str) -> Self {
        OptionError::MalformedToken {
            token: token.to_string(),
            reason,
        }
    }
}

/// Convenient alias for results returning an `OptionError`.
pub type Result<T> = std::result::Result<T, OptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_value_errors_are_grouped() {
        let e = OptionError::MissingRequiredValue { name: "size".into() };
        assert_eq!(e.kind(), ErrorKind::Parse);
        assert_eq!(e.to_string(), "option 'size' requires a value");

        let e = OptionError::InvalidEnumValue {
            name: "data".into(),
            value: "bogus".into(),
        };
        assert_eq!(e.kind(), ErrorKind::Value);
    }
}
