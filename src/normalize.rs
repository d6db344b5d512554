// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::{Error, Result};

/// Single-character aliases and the canonical operator they stand for.
const SYMBOL_ALIASES: &[(char, char)] = &[
    ('∧', '&'),
    ('•', '&'),
    ('*', '&'),
    ('⋅', '&'),
    ('∨', '|'),
    ('+', '|'),
    ('¬', '!'),
    ('~', '!'),
];

/// Word aliases, matched case-insensitively as whole words.
const WORD_ALIASES: &[(&str, char)] = &[("and", '&'), ("not", '!'), ("or", '|')];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '&' | '|' | '!' | '(' | ')' | ' ')
}

/// Rewrites alias notations into the canonical operator characters `&`,
/// `|` and `!`, collapses whitespace runs into single spaces and trims the
/// ends.
///
/// Symbol aliases are `∧ • * ⋅` for AND, `∨ +` for OR and `¬ ~` for NOT.
/// The words `AND`, `OR` and `NOT` are recognized in any letter case, but
/// only as whole words, so a variable such as `Motor` is left alone.
///
/// Fails with `Error::InvalidSymbols` carrying every character outside the
/// accepted alphabet (letters, digits, `_`, space, `& | ! ( )`).
///
/// ```
/// use boolean_laws::normalize_symbols;
///
/// assert_eq!(normalize_symbols("  A and  ¬B + c ").unwrap(), "A & !B | c");
/// assert!(normalize_symbols("A # B").is_err());
/// ```
pub fn normalize_symbols(raw: &str) -> Result<String> {
    let mut replaced = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if is_word_char(c) {
            let mut word = String::new();
            word.push(c);
            while let Some(&next) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                word.push(next);
                chars.next();
            }
            match WORD_ALIASES
                .iter()
                .find(|(alias, _)| word.eq_ignore_ascii_case(alias))
            {
                Some(&(_, op)) => replaced.push(op),
                None => replaced.push_str(&word),
            }
        } else {
            match SYMBOL_ALIASES.iter().find(|&&(alias, _)| alias == c) {
                Some(&(_, op)) => replaced.push(op),
                None => replaced.push(c),
            }
        }
    }

    let normalized = replaced.split_whitespace().join(" ");

    let invalid: BTreeSet<char> = normalized.chars().filter(|&c| !is_allowed(c)).collect();
    if !invalid.is_empty() {
        return Err(Error::InvalidSymbols(invalid));
    }
    Ok(normalized)
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_test(raw: &str, expected: &str) {
        let output = normalize_symbols(raw);
        println!("Normalize: {:?} -> {:?} (expected {:?})", raw, output, expected);
        assert_eq!(output, Ok(expected.to_string()));
    }

    #[test]
    fn symbol_aliases() {
        run_test("A ∧ B • C * D ⋅ E", "A & B & C & D & E");
        run_test("A ∨ B + C", "A | B | C");
        run_test("¬A & ~B", "!A & !B");
    }

    #[test]
    fn word_aliases_any_case() {
        run_test("A AND B and C And D", "A & B & C & D");
        run_test("A OR b or c", "A | b | c");
        run_test("NOT A & not B", "! A & ! B");
        run_test("(A)and(B)", "(A)&(B)");
    }

    #[test]
    fn words_inside_identifiers_are_kept() {
        run_test("Motor & ANDY & note", "Motor & ANDY & note");
        run_test("or_gate | notA", "or_gate | notA");
    }

    #[test]
    fn whitespace_is_collapsed() {
        run_test("  A \t&\n\n B  ", "A & B");
        run_test("", "");
    }

    #[test]
    fn rejects_invalid_characters_sorted() {
        let err = normalize_symbols("A # B $ C # é").unwrap_err();
        let chars: Vec<char> = err.invalid_chars().unwrap().iter().cloned().collect();
        assert_eq!(chars, vec!['#', '$', 'é']);
    }

    #[test]
    fn digits_and_underscores_allowed() {
        run_test("x_1 + 0 * 1", "x_1 | 0 & 1");
    }
}
