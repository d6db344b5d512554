// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::cmp::Ordering;

use crate::{Connective, Expr};

/// Sort key of a node among its siblings: variant rank, then a secondary
/// number (constant value with `1` first, or arity of AND/OR), then the
/// printed form.
fn order_key(e: &Expr) -> (u8, usize, String) {
    match e {
        Expr::Const(val) => (0, if *val { 0 } else { 1 }, String::new()),
        Expr::Var(name) => (1, 0, name.clone()),
        Expr::Not(_) => (2, 0, e.to_string()),
        Expr::And(xs) => (3, xs.len(), e.to_string()),
        Expr::Or(xs) => (4, xs.len(), e.to_string()),
    }
}

/// The total order imposed on the children of AND/OR nodes.
///
/// Constants come first (`1` before `0`), then variables alphabetically,
/// then NOT, AND and OR nodes; composites of the same kind are ordered by
/// arity, and any remaining tie is broken by the printed form.
pub fn canonical_order(a: &Expr, b: &Expr) -> Ordering {
    order_key(a).cmp(&order_key(b))
}

/// Rewrites an expression into canonical form: nested nodes of the same
/// connective are flattened into their parent, children are sorted by
/// `canonical_order()`, and single-child nodes are replaced by their child.
///
/// Flattening is pure associativity and never drops a term, so the result
/// is logically equivalent to the input. An AND/OR node with no children at
/// all becomes its identity constant.
///
/// ```
/// use boolean_laws::{canonicalize, Expr};
///
/// let ab = Expr::var("B") & Expr::var("A");
/// let ba = Expr::var("A") & Expr::var("B");
/// assert_eq!(canonicalize(ab), canonicalize(ba));
/// ```
pub fn canonicalize(e: Expr) -> Expr {
    match e {
        Expr::Const(_) | Expr::Var(_) => e,
        Expr::Not(x) => Expr::not(canonicalize(*x)),
        Expr::And(xs) => flatten(Connective::And, xs),
        Expr::Or(xs) => flatten(Connective::Or, xs),
    }
}

fn flatten(conn: Connective, xs: Vec<Expr>) -> Expr {
    let mut kids = Vec::with_capacity(xs.len());
    for x in xs {
        let x = canonicalize(x);
        match (conn, x) {
            (Connective::And, Expr::And(inner)) | (Connective::Or, Expr::Or(inner)) => {
                kids.extend(inner)
            }
            (_, x) => kids.push(x),
        }
    }
    kids.sort_by_cached_key(order_key);
    match kids.len() {
        0 => Expr::Const(conn.identity()),
        1 => kids.pop().unwrap_or(Expr::Const(conn.identity())),
        _ => conn.build(kids),
    }
}
