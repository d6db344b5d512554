// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::str::FromStr;

use smallvec::SmallVec;

use crate::lexer::{tokenize, Token};
use crate::{canonicalize, normalize_symbols, Connective, Error, Expr, Result};

const STACK_ALLOCED_SIZE: usize = 16;

/// Default bound on pending operators (open parentheses, negations and
/// binary operators) while parsing.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// An entry of the operator stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Not,
    Binary(Connective),
    /// A `(` barrier; never applied.
    Open,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Not => 3,
            Op::Binary(Connective::And) => 2,
            Op::Binary(Connective::Or) => 1,
            Op::Open => 0,
        }
    }
}

/// Two-stack operator-precedence parser state.
struct ShuntingYard {
    operands: SmallVec<[Expr; STACK_ALLOCED_SIZE]>,
    operators: SmallVec<[Op; STACK_ALLOCED_SIZE]>,
    max_depth: usize,
}

impl ShuntingYard {
    fn new(max_depth: usize) -> ShuntingYard {
        ShuntingYard {
            operands: SmallVec::new(),
            operators: SmallVec::new(),
            max_depth,
        }
    }

    // Every nesting level of the finished tree comes from an operator that
    // was pending here, so bounding this stack bounds the tree depth.
    fn push_operator(&mut self, op: Op) -> Result<()> {
        if self.operators.len() >= self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.operators.push(op);
        Ok(())
    }

    fn apply(&mut self, op: Op) -> Result<()> {
        match op {
            Op::Not => {
                let x = self.operands.pop().ok_or(Error::MissingOperand)?;
                self.operands.push(Expr::not(x));
            }
            Op::Binary(conn) => {
                let missing = Error::InsufficientOperands(conn.symbol());
                let rhs = self.operands.pop().ok_or_else(|| missing.clone())?;
                let lhs = self.operands.pop().ok_or(missing)?;
                self.operands.push(join(conn, lhs, rhs));
            }
            Op::Open => return Err(Error::UnbalancedParentheses),
        }
        Ok(())
    }

    /// Pops and applies stacked operators binding at least as tightly as
    /// `conn`, then pushes `conn`. Binary operators are left-associative.
    fn push_binary(&mut self, conn: Connective) -> Result<()> {
        let op = Op::Binary(conn);
        while let Some(&top) = self.operators.last() {
            if top == Op::Open || top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        self.push_operator(op)
    }

    fn close_paren(&mut self) -> Result<()> {
        loop {
            match self.operators.pop() {
                Some(Op::Open) => return Ok(()),
                Some(op) => self.apply(op)?,
                None => return Err(Error::UnbalancedParentheses),
            }
        }
    }

    fn feed(&mut self, tok: Token) -> Result<()> {
        match tok {
            Token::Literal(val) => self.operands.push(Expr::Const(val)),
            Token::Ident(name) => self.operands.push(Expr::Var(name)),
            // A prefix `!` already outranks every pending operator.
            Token::Not => self.push_operator(Op::Not)?,
            Token::And => self.push_binary(Connective::And)?,
            Token::Or => self.push_binary(Connective::Or)?,
            Token::LParen => self.push_operator(Op::Open)?,
            Token::RParen => self.close_paren()?,
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Expr> {
        while let Some(op) = self.operators.pop() {
            self.apply(op)?;
        }
        if self.operands.len() != 1 {
            return Err(Error::MalformedExpression(self.operands.len()));
        }
        self.operands
            .pop()
            .ok_or(Error::MalformedExpression(0))
    }
}

/// Applies a binary connective, splicing operands of the same kind so that
/// `A & B & C` stays one flat node instead of a left-leaning chain.
fn join(conn: Connective, lhs: Expr, rhs: Expr) -> Expr {
    let mut children = match (conn, lhs) {
        (Connective::And, Expr::And(xs)) | (Connective::Or, Expr::Or(xs)) => xs,
        (_, lhs) => vec![lhs],
    };
    match (conn, rhs) {
        (Connective::And, Expr::And(xs)) | (Connective::Or, Expr::Or(xs)) => children.extend(xs),
        (_, rhs) => children.push(rhs),
    }
    conn.build(children)
}

/// Parses normalized expression text (see `normalize_symbols()`) into a
/// canonical `Expr`.
///
/// Precedence is `!` over `&` over `|`; the binary operators associate to
/// the left. The result has already been passed through `canonicalize()`.
///
/// ```
/// use boolean_laws::{parse, Expr};
///
/// let e = parse("B & A | !C").unwrap();
/// assert_eq!(e.to_string(), "!C | (A & B)");
/// ```
pub fn parse(s: &str) -> Result<Expr> {
    parse_with_max_depth(s, DEFAULT_MAX_DEPTH)
}

/// Like `parse()`, but fails with `Error::NestingTooDeep` once more than
/// `max_depth` operators are pending, e.g. a run of `!` or `(` longer than
/// the limit.
pub fn parse_with_max_depth(s: &str, max_depth: usize) -> Result<Expr> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut yard = ShuntingYard::new(max_depth);
    for tok in tokenize(s)? {
        yard.feed(tok)?;
    }
    let expr = yard.finish()?;
    tracing::trace!(nodes = expr.node_count(), "parsed expression");
    Ok(canonicalize(expr))
}

/// Normalizes raw text and parses the result.
pub fn parse_raw(raw: &str) -> Result<Expr> {
    parse(&normalize_symbols(raw)?)
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Expr> {
        parse_raw(s)
    }
}
