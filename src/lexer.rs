// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use crate::{Error, Result};

/// A lexical token of a normalized expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Not,
    And,
    Or,
    LParen,
    RParen,
    /// `0` or `1`.
    Literal(bool),
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident(String),
}

/// Splits normalized text into tokens, skipping whitespace.
///
/// Every character outside the expression alphabet fails with
/// `Error::InvalidCharacter`, including digits other than `0` and `1`
/// that do not continue an identifier.
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = s.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        let tok = match ch {
            c if c.is_whitespace() => continue,
            '!' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0' => Token::Literal(false),
            '1' => Token::Literal(true),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = c.to_string();
                while let Some(&(_, next)) = chars.peek() {
                    if !(next.is_ascii_alphanumeric() || next == '_') {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                Token::Ident(name)
            }
            c => return Err(Error::InvalidCharacter { ch: c, offset }),
        };
        tokens.push(tok);
    }
    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}
