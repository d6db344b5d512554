// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::{canonicalize, Connective, Expr};

/// A named Boolean-algebra law applied by `rewrite_once()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    /// `A & A = A`, `A | A = A`.
    Idempotence,
    /// `A & 0 = 0`, `A | 1 = 1`.
    Annihilation,
    /// `A & 1 = A`, `A | 0 = A`.
    Identity,
    /// `A & !A = 0`, `A | !A = 1`.
    Complement,
    /// `A & (A | B) = A`, `A | (A & B) = A`.
    Absorption,
    /// `!!A = A`.
    DoubleNegation,
    /// `(A & B) | (A & C) = A & (B | C)` and its dual.
    CommonFactor,
}

impl Law {
    /// The name shown to users in a step trace.
    pub fn name(self) -> &'static str {
        match self {
            Law::Idempotence => "Idempotencia",
            Law::Annihilation => "Anulación",
            Law::Identity => "Identidad",
            Law::Complement => "Complementario",
            Law::Absorption => "Absorción",
            Law::DoubleNegation => "Doble negación",
            Law::CommonFactor => "Organización (factor común)",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Law {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The outcome of a single successful rewrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    pub expr: Expr,
    pub law: Law,
}

impl Rewrite {
    fn new(expr: Expr, law: Law) -> Rewrite {
        Rewrite { expr, law }
    }
}

type NodeLaw = fn(Connective, &[Expr]) -> Option<Expr>;

/// Node-level laws of an AND/OR node, in priority order.
const NODE_LAWS: &[(Law, NodeLaw)] = &[
    (Law::Idempotence, idempotence),
    (Law::Annihilation, annihilation),
    (Law::Identity, identity),
    (Law::Complement, complement),
    (Law::Absorption, absorption),
    (Law::CommonFactor, common_factor),
];

/// Applies at most one law to a canonical expression.
///
/// The tree is walked depth-first, leftmost child first: children are
/// rewritten before their parent, and the first child that changes ends
/// the call. At an AND/OR node the laws are tried in the order
/// idempotence, annihilation, identity, complement, absorption, common
/// factor; a NOT node only tries double negation, and only when its child
/// did not change. Returns `None` at a fixpoint.
///
/// ```
/// use boolean_laws::{parse, rewrite_once, Law};
///
/// let rw = rewrite_once(&parse("A | A").unwrap()).unwrap();
/// assert_eq!(rw.law, Law::Idempotence);
/// assert_eq!(rw.expr.to_string(), "A");
/// assert!(rewrite_once(&rw.expr).is_none());
/// ```
pub fn rewrite_once(e: &Expr) -> Option<Rewrite> {
    match e {
        Expr::Const(_) | Expr::Var(_) => None,
        Expr::Not(x) => match rewrite_once(x) {
            Some(rw) => Some(Rewrite::new(Expr::not(rw.expr), rw.law)),
            None => match &**x {
                Expr::Not(inner) => Some(Rewrite::new((**inner).clone(), Law::DoubleNegation)),
                _ => None,
            },
        },
        Expr::And(xs) => rewrite_node(Connective::And, xs),
        Expr::Or(xs) => rewrite_node(Connective::Or, xs),
    }
}

fn rewrite_node(conn: Connective, xs: &[Expr]) -> Option<Rewrite> {
    for (i, x) in xs.iter().enumerate() {
        if let Some(rw) = rewrite_once(x) {
            let mut kids = xs.to_vec();
            kids[i] = rw.expr;
            return Some(Rewrite::new(canonicalize(conn.build(kids)), rw.law));
        }
    }
    NODE_LAWS
        .iter()
        .find_map(|&(law, apply)| apply(conn, xs).map(|expr| Rewrite::new(expr, law)))
}

/// Rebuilds a node from its remaining terms: no terms give the identity
/// constant, one term stands alone.
fn collapse(conn: Connective, mut terms: Vec<Expr>) -> Expr {
    match terms.len() {
        0 => Expr::Const(conn.identity()),
        1 => terms.swap_remove(0),
        _ => canonicalize(conn.build(terms)),
    }
}

fn idempotence(conn: Connective, xs: &[Expr]) -> Option<Expr> {
    let unique: Vec<Expr> = xs.iter().unique().cloned().collect();
    if unique.len() == xs.len() {
        return None;
    }
    Some(collapse(conn, unique))
}

fn annihilation(conn: Connective, xs: &[Expr]) -> Option<Expr> {
    let zero = Expr::Const(conn.annihilator());
    if xs.contains(&zero) {
        Some(zero)
    } else {
        None
    }
}

fn identity(conn: Connective, xs: &[Expr]) -> Option<Expr> {
    let unit = Expr::Const(conn.identity());
    if !xs.contains(&unit) {
        return None;
    }
    let rest: Vec<Expr> = xs.iter().filter(|&x| *x != unit).cloned().collect();
    Some(collapse(conn, rest))
}

fn complement(conn: Connective, xs: &[Expr]) -> Option<Expr> {
    let present: HashSet<&Expr> = xs.iter().collect();
    let found = xs.iter().any(|x| match x {
        Expr::Not(inner) => present.contains(&**inner),
        _ => false,
    });
    if found {
        Some(Expr::Const(conn.annihilator()))
    } else {
        None
    }
}

// Only the absorbed sibling is dropped, so `A & (A | B) & C` becomes
// `A & C`.
fn absorption(conn: Connective, xs: &[Expr]) -> Option<Expr> {
    let dual = conn.dual();
    let absorbed = xs.iter().enumerate().position(|(i, c)| match dual.children_of(c) {
        Some(terms) => xs
            .iter()
            .enumerate()
            .any(|(j, x)| j != i && terms.contains(x)),
        None => false,
    })?;
    let rest: Vec<Expr> = xs
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != absorbed)
        .map(|(_, x)| x.clone())
        .collect();
    Some(collapse(conn, rest))
}

fn common_factor(conn: Connective, xs: &[Expr]) -> Option<Expr> {
    let inner = conn.dual();
    let term_sets: Vec<&[Expr]> = xs
        .iter()
        .map(|x| inner.children_of(x))
        .collect::<Option<Vec<_>>>()?;
    let (first, others) = term_sets.split_first()?;
    if others.is_empty() {
        return None;
    }
    let mut common: Vec<&Expr> = first
        .iter()
        .filter(|t| others.iter().all(|ts| ts.contains(*t)))
        .unique()
        .collect();
    if common.is_empty() {
        return None;
    }
    common.sort_by_cached_key(|t| t.to_string());

    let residuals: Vec<Expr> = term_sets
        .iter()
        .map(|ts| {
            let rest: Vec<Expr> = ts
                .iter()
                .filter(|t| !common.contains(t))
                .cloned()
                .collect();
            collapse(inner, rest)
        })
        .collect();

    let mut factored: Vec<Expr> = common.into_iter().cloned().collect();
    factored.push(conn.build(residuals));
    Some(canonicalize(inner.build(factored)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse;

    fn run_test(input: &str, expected: &str, law: Law) {
        let orig = parse(input).unwrap();
        let output = rewrite_once(&orig);
        println!(
            "Rewrite: {} -> {:?} (expected {} by {})",
            orig, output, expected, law
        );
        let rw = output.unwrap();
        assert_eq!(rw.law, law);
        assert_eq!(rw.expr.to_string(), expected);
    }

    fn run_fixpoint(input: &str) {
        let orig = parse(input).unwrap();
        assert_eq!(rewrite_once(&orig), None);
    }

    #[test]
    fn idempotence_law() {
        run_test("A | A", "A", Law::Idempotence);
        run_test("B & A & B", "A & B", Law::Idempotence);
        run_test("1 & 1 & A", "1 & A", Law::Idempotence);
    }

    #[test]
    fn annihilation_law() {
        run_test("A & 0", "0", Law::Annihilation);
        run_test("A | 1", "1", Law::Annihilation);
        run_test("A | B | 1", "1", Law::Annihilation);
    }

    #[test]
    fn identity_law() {
        run_test("A & 1", "A", Law::Identity);
        run_test("A | B | 0", "A | B", Law::Identity);
        run_test("1 & 1", "1", Law::Idempotence);
    }

    #[test]
    fn complement_law() {
        run_test("A & !A", "0", Law::Complement);
        run_test("B | !B", "1", Law::Complement);
        run_test("(A & B) | C | !(A & B)", "1", Law::Complement);
    }

    #[test]
    fn absorption_law() {
        run_test("A & (A | B)", "A", Law::Absorption);
        run_test("A | (A & B)", "A", Law::Absorption);
        run_test("A & C & (A | B)", "A & C", Law::Absorption);
    }

    #[test]
    fn common_factor_law() {
        run_test("(A & B) | (A & C)", "A & (B | C)", Law::CommonFactor);
        run_test("(A | B) & (A | C)", "A | (B & C)", Law::CommonFactor);
        run_test(
            "(A & B) | (A & B & C)",
            "A & B & (1 | C)",
            Law::CommonFactor,
        );
        run_test(
            "(A & B & D) | (A & C & D)",
            "A & D & (B | C)",
            Law::CommonFactor,
        );
    }

    #[test]
    fn common_factor_needs_uniform_children() {
        run_fixpoint("(A & B) | C");
        run_fixpoint("(A & B) | (C & D)");
        run_fixpoint("(A & B) | (A & C) | D");
    }

    #[test]
    fn double_negation_law() {
        run_test("!!A", "A", Law::DoubleNegation);
        run_test("!!!A", "!A", Law::DoubleNegation);
        run_test("!!(A | B)", "A | B", Law::DoubleNegation);
    }

    #[test]
    fn children_first_leftmost_first() {
        run_test("!(A | A)", "!A", Law::Idempotence);
        run_test("(A | A) & (B | B)", "A & (B | B)", Law::Idempotence);
        run_test("C & !!A", "A & C", Law::DoubleNegation);
    }

    #[test]
    fn fixpoints() {
        run_fixpoint("A");
        run_fixpoint("1");
        run_fixpoint("A & B");
        run_fixpoint("!(A & B)");
        run_fixpoint("!0");
        run_fixpoint("A & (B | C)");
    }

    #[test]
    fn law_names() {
        assert_eq!(Law::Annihilation.to_string(), "Anulación");
        assert_eq!(Law::CommonFactor.name(), "Organización (factor común)");
    }
}
