//! Declaration Errors
//!
//! Every failure the validator can report. Messages are a compatibility
//! contract with downstream callers and must not be reworded.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclError {
    /// The variables argument itself was not object- or map-shaped.
    #[error("must be an object whose attributes represent the bash variables to declare")]
    NotAnObject,

    #[error("cannot use empty string as a bash variable name")]
    EmptyName,

    #[error("cannot use \"{0}\" as a bash variable name")]
    InvalidName(String),

    #[error("invalid value for \"{0}\": Bash supports only strings, whole numbers, lists of strings, and maps of strings")]
    UnsupportedType(String),

    #[error("invalid value for \"{0}\": must be a whole number between {} and {}", i64::MIN, i64::MAX)]
    NotAWholeNumber(String),

    #[error("invalid value for \"{0}\": elements must not be null")]
    NullElement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DeclError::NotAnObject.to_string(),
            "must be an object whose attributes represent the bash variables to declare"
        );
        assert_eq!(
            DeclError::EmptyName.to_string(),
            "cannot use empty string as a bash variable name"
        );
        assert_eq!(
            DeclError::InvalidName("2fast".to_string()).to_string(),
            "cannot use \"2fast\" as a bash variable name"
        );
        assert_eq!(
            DeclError::UnsupportedType("invalid".to_string()).to_string(),
            "invalid value for \"invalid\": Bash supports only strings, whole numbers, lists of strings, and maps of strings"
        );
        assert_eq!(
            DeclError::NotAWholeNumber("num".to_string()).to_string(),
            "invalid value for \"num\": must be a whole number between -9223372036854775808 and 9223372036854775807"
        );
        assert_eq!(
            DeclError::NullElement("names".to_string()).to_string(),
            "invalid value for \"names\": elements must not be null"
        );
    }
}
