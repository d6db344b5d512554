// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Connective, Expr};

// Parenthesization is minimal and asymmetric: a NOT wraps AND/OR children,
// an AND wraps only OR children, an OR wraps only AND children. Output of a
// canonical tree parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(true) => write!(f, "1"),
            Expr::Const(false) => write!(f, "0"),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(x) => {
                if x.connective().is_some() {
                    write!(f, "!({})", x)
                } else {
                    write!(f, "!{}", x)
                }
            }
            Expr::And(xs) => write_joined(f, Connective::And, xs),
            Expr::Or(xs) => write_joined(f, Connective::Or, xs),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter, conn: Connective, xs: &[Expr]) -> fmt::Result {
    for (i, x) in xs.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", conn.symbol())?;
        }
        if x.connective() == Some(conn.dual()) {
            write!(f, "({})", x)?;
        } else {
            write!(f, "{}", x)?;
        }
    }
    Ok(())
}

/// Expressions serialize as their printed infix form.
impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_test(e: Expr, expected: &str) {
        let output = e.to_string();
        println!("Print: {:?} -> {:?} (expected {:?})", e, output, expected);
        assert_eq!(output, expected);
    }

    #[test]
    fn leaves() {
        run_test(Expr::Const(true), "1");
        run_test(Expr::Const(false), "0");
        run_test(Expr::var("foo_1"), "foo_1");
    }

    #[test]
    fn negation_parenthesizes_composites_only() {
        run_test(Expr::not(Expr::var("A")), "!A");
        run_test(Expr::not(Expr::not(Expr::var("A"))), "!!A");
        run_test(
            Expr::not(Expr::and(vec![Expr::var("A"), Expr::var("B")])),
            "!(A & B)",
        );
        run_test(
            Expr::not(Expr::or(vec![Expr::var("A"), Expr::var("B")])),
            "!(A | B)",
        );
    }

    #[test]
    fn and_wraps_or_children() {
        run_test(
            Expr::and(vec![
                Expr::var("A"),
                Expr::or(vec![Expr::var("B"), Expr::var("C")]),
                Expr::not(Expr::var("D")),
            ]),
            "A & (B | C) & !D",
        );
    }

    #[test]
    fn or_wraps_and_children() {
        run_test(
            Expr::or(vec![
                Expr::and(vec![Expr::var("A"), Expr::var("B")]),
                Expr::and(vec![Expr::var("A"), Expr::var("C")]),
            ]),
            "(A & B) | (A & C)",
        );
        run_test(
            Expr::or(vec![Expr::Const(true), Expr::not(Expr::var("A"))]),
            "1 | !A",
        );
    }
}
