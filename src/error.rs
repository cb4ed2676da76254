// error.rs

use thiserror::Error;

use crate::base::Base;

/// Why a conversion was refused. Every variant is recoverable and meant to be
/// shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("enter a number to convert")]
    EmptyInput,

    #[error("input is {len} characters, maximum length is {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("unsupported base {0}, choose one of 2, 8, 10, 16")]
    UnsupportedBase(u32),

    #[error("illegal digit '{ch}' for base {base}, allowed: {}", .base.allowed())]
    IllegalDigit { ch: char, base: Base },

    #[error("select both a source and a target base")]
    BasesNotSelected,

    #[error("conversion failed while decoding the input")]
    DecodeFailure,
}

/// Problems with a typed command line, before any conversion happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}: command not found")]
    Unknown(String),

    #[error("{command}: missing argument <{what}>")]
    MissingArgument { command: &'static str, what: &'static str },

    #[error("{command}: too many arguments")]
    TooManyArguments { command: &'static str },

    #[error("'{0}' is not a base")]
    InvalidBase(String),

    #[error("{command}: '{value}' is not a number")]
    InvalidNumber { command: &'static str, value: String },

    #[error("{command}: count must be at least 1")]
    ZeroCount { command: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_digit_message_names_allowed_digits() {
        let err = ConvertError::IllegalDigit { ch: 'G', base: Base::Base16 };
        assert_eq!(
            err.to_string(),
            "illegal digit 'G' for base 16, allowed: digits 0-9 and letters A-F"
        );
    }

    #[test]
    fn too_long_message_carries_limit() {
        let err = ConvertError::InputTooLong { len: 21, max: 20 };
        assert!(err.to_string().contains("maximum length is 20"));
    }
}
