// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

//! Error types for normalization, parsing and simplification.

use std::collections::BTreeSet;

use itertools::Itertools;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Characters outside the accepted alphabet.
    Validation,
    /// The text is not a well-formed expression.
    Syntax,
    /// Nothing left to parse after trimming.
    EmptyInput,
    /// A resource bound (nesting depth or step cap) was hit.
    Resource,
}

/// Errors produced while turning text into a simplified expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Characters that are not part of the alphabet remain after alias
    /// substitution. The set is sorted.
    #[error("invalid symbols found: {}", format_chars(.0))]
    InvalidSymbols(BTreeSet<char>),

    /// The expression is blank.
    #[error("empty expression")]
    EmptyInput,

    /// The tokenizer met a character it cannot lex.
    #[error("invalid character '{ch}' at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    /// A `)` without its `(`, or a `(` never closed.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// A `!` with nothing to negate.
    #[error("negation without operand")]
    MissingOperand,

    /// A binary operator with fewer than two operands available.
    #[error("operator '{0}' lacks operands")]
    InsufficientOperands(char),

    /// Parsing finished with a number of operands other than one.
    #[error("malformed expression: {0} operands left after parsing")]
    MalformedExpression(usize),

    /// The input nests operators or parentheses deeper than the configured
    /// limit.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// The rewrite loop did not reach a fixpoint within the configured cap.
    #[error("no fixpoint reached within {limit} steps")]
    StepLimitExceeded { limit: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidSymbols(_) => ErrorKind::Validation,
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::InvalidCharacter { .. }
            | Error::UnbalancedParentheses
            | Error::MissingOperand
            | Error::InsufficientOperands(_)
            | Error::MalformedExpression(_) => ErrorKind::Syntax,
            Error::NestingTooDeep { .. } | Error::StepLimitExceeded { .. } => {
                ErrorKind::Resource
            }
        }
    }

    /// The offending characters of a validation failure, if this is one.
    pub fn invalid_chars(&self) -> Option<&BTreeSet<char>> {
        match self {
            Error::InvalidSymbols(chars) => Some(chars),
            _ => None,
        }
    }
}

fn format_chars(chars: &BTreeSet<char>) -> String {
    chars.iter().map(|c| format!("'{}'", c)).join(", ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(Error::UnbalancedParentheses.kind(), ErrorKind::Syntax);
        assert_eq!(Error::MalformedExpression(2).kind(), ErrorKind::Syntax);
        assert_eq!(
            Error::StepLimitExceeded { limit: 3 }.kind(),
            ErrorKind::Resource
        );
        assert_eq!(
            Error::NestingTooDeep { limit: 8 }.kind(),
            ErrorKind::Resource
        );
    }

    #[test]
    fn invalid_symbols_message() {
        let err = Error::InvalidSymbols(['$', '#'].iter().cloned().collect());
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "invalid symbols found: '#', '$'");
        assert_eq!(err.invalid_chars().map(|s| s.len()), Some(2));
    }
}
