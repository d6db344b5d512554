// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::collections::{BTreeSet, HashMap};
use std::ops::{BitAnd, BitOr, Not};

/// An `Expr` is a Boolean logic expression over named variables. It may
/// contain variables, constants, and the following fundamental operations:
/// n-ary AND, n-ary OR, and NOT.
///
/// Equality and hashing are structural, so two trees compare equal exactly
/// when they have the same shape. After canonicalization (see
/// `canonicalize()`) trees that differ only by commutativity or
/// associativity become identical.
///
/// ```
/// use std::collections::HashMap;
/// use boolean_laws::Expr;
///
/// let chicken = Expr::var("Chicken");
/// let fox_and_grain = Expr::var("Fox") & Expr::var("Grain");
///
/// let allowed = (!chicken.clone() & fox_and_grain.clone()) | (chicken & !fox_and_grain);
/// let items: HashMap<String, bool> = [
///    ("Grain".to_string(), true),
///    ("Fox".to_string(), true),
/// ].iter().cloned().collect();
///
/// // nobody gets eaten!
/// assert!(allowed.evaluate(&items));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A boolean constant, printed as `1` or `0`.
    Const(bool),

    /// A free variable, named by an identifier.
    Var(String),

    /// The logical complement of the contained expression argument.
    Not(Box<Expr>),

    /// The logical AND of all contained arguments.
    And(Vec<Expr>),

    /// The logical OR of all contained arguments.
    Or(Vec<Expr>),
}

/// One of the two associative, commutative connectives. Most laws are
/// written once against a `Connective` and apply to both AND and OR by
/// duality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// The constant that leaves a term unchanged: `1` for AND, `0` for OR.
    pub fn identity(self) -> bool {
        match self {
            Connective::And => true,
            Connective::Or => false,
        }
    }

    /// The constant that absorbs the whole node: `0` for AND, `1` for OR.
    pub fn annihilator(self) -> bool {
        !self.identity()
    }

    pub fn dual(self) -> Connective {
        match self {
            Connective::And => Connective::Or,
            Connective::Or => Connective::And,
        }
    }

    /// Builds a node of this kind. No flattening or sorting happens here.
    pub fn build(self, children: Vec<Expr>) -> Expr {
        match self {
            Connective::And => Expr::And(children),
            Connective::Or => Expr::Or(children),
        }
    }

    /// The children of `e` if it is a node of this kind.
    pub fn children_of(self, e: &Expr) -> Option<&[Expr]> {
        match (self, e) {
            (Connective::And, Expr::And(xs)) | (Connective::Or, Expr::Or(xs)) => Some(xs),
            _ => None,
        }
    }

    /// The operator character used by the printer and the parser.
    pub fn symbol(self) -> char {
        match self {
            Connective::And => '&',
            Connective::Or => '|',
        }
    }
}

impl Expr {
    /// Builds a variable node.
    pub fn var<S: Into<String>>(name: S) -> Expr {
        Expr::Var(name.into())
    }

    /// Builds a NOT node around an argument, consuming the argument
    /// expression.
    pub fn not(e: Expr) -> Expr {
        Expr::Not(Box::new(e))
    }

    /// Builds an AND node over the given arguments.
    pub fn and<I: IntoIterator<Item = Expr>>(children: I) -> Expr {
        Expr::And(children.into_iter().collect())
    }

    /// Builds an OR node over the given arguments.
    pub fn or<I: IntoIterator<Item = Expr>>(children: I) -> Expr {
        Expr::Or(children.into_iter().collect())
    }

    /// The connective of an AND or OR node.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Expr::And(_) => Some(Connective::And),
            Expr::Or(_) => Some(Connective::Or),
            _ => None,
        }
    }

    /// Evaluates the expression with a particular set of variable
    /// assignments. If any variables are not assigned, they default to
    /// `false`.
    pub fn evaluate(&self, vals: &HashMap<String, bool>) -> bool {
        self.evaluate_with(|name| *vals.get(name).unwrap_or(&false))
    }

    /// Evaluates the expression using the provided function to map
    /// variables to boolean values. This is a generalization of
    /// [`Expr::evaluate`], where the variable lookup in a hashmap is replaced
    /// with an arbitrary computation.
    ///
    ///```
    /// use boolean_laws::Expr;
    ///
    /// let expression = Expr::var("long_name") | Expr::var("x");
    ///
    /// // check if the expression satisfies a predicate
    /// assert!(expression.evaluate_with(|name| name.len() > 5));
    /// ```
    pub fn evaluate_with<F>(&self, f: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.evaluate_with1(&f)
    }

    fn evaluate_with1<F>(&self, f: &F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        match self {
            Expr::Var(name) => f(name),
            Expr::Const(val) => *val,
            Expr::Not(x) => !x.evaluate_with1(f),
            Expr::And(xs) => xs.iter().all(|x| x.evaluate_with1(f)),
            Expr::Or(xs) => xs.iter().any(|x| x.evaluate_with1(f)),
        }
    }

    /// The set of variable names occurring in the expression.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Var(name) => {
                out.insert(name.as_str());
            }
            Expr::Const(_) => {}
            Expr::Not(x) => x.collect_variables(out),
            Expr::And(xs) | Expr::Or(xs) => {
                for x in xs {
                    x.collect_variables(out);
                }
            }
        }
    }

    /// Number of nodes in the tree, leaves included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(x) => 1 + x.node_count(),
            Expr::And(xs) | Expr::Or(xs) => 1 + xs.iter().map(Expr::node_count).sum::<usize>(),
        }
    }

    /// Number of constants and variables in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(x) => x.leaf_count(),
            Expr::And(xs) | Expr::Or(xs) => xs.iter().map(Expr::leaf_count).sum(),
        }
    }
}

impl Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::not(self)
    }
}

impl BitAnd<Expr> for Expr {
    type Output = Self;

    fn bitand(self, rhs: Expr) -> Self::Output {
        Self::and(vec![self, rhs])
    }
}

impl BitOr<Expr> for Expr {
    type Output = Self;

    fn bitor(self, rhs: Expr) -> Self::Output {
        Self::or(vec![self, rhs])
    }
}
