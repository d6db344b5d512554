// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

//! # boolean\_laws step-by-step Boolean expression simplifier
//!
//! This crate parses infix Boolean expressions over named variables and
//! simplifies them by repeatedly applying named laws of Boolean algebra
//! (idempotence, annihilation, identity, complement, absorption, double
//! negation and common-factor extraction), one law per step, until none
//! applies. Every step is recorded so a front end can show the derivation.
//!
//! The main pieces of interest are:
//!
//! * `normalize_symbols()`, which maps alias notations such as `∧`, `+` or
//!   `NOT` to the canonical `&`, `|` and `!` and validates the alphabet.
//! * `Expr`, an AST enum with n-ary `AND` / `OR` and `NOT`, kept in a
//!   canonical flattened-and-sorted form by `canonicalize()`.
//! * `rewrite_once()`, which applies at most one `Law`.
//! * `Simplifier` and `simplify_expression()`, which drive the rewrite loop
//!   and return the final expression with its ordered list of `Step`s.
//!
//! ```
//! use boolean_laws::simplify_expression;
//!
//! let (result, steps) = simplify_expression("(A AND B) OR (A AND C)").unwrap();
//! assert_eq!(result, "A & (B | C)");
//! assert_eq!(steps[0].law.name(), "Organización (factor común)");
//! ```

mod canonical;
mod error;
mod expr;
mod laws;
mod lexer;
mod normalize;
mod parser;
mod printer;
mod simplify;

pub use canonical::*;
pub use error::*;
pub use expr::*;
pub use laws::*;
pub use lexer::{tokenize, Token};
pub use normalize::*;
pub use parser::*;
pub use simplify::*;
