// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    canonicalize, normalize_symbols, parse_with_max_depth, rewrite_once, Error, Expr, Law, Result,
    DEFAULT_MAX_DEPTH,
};

/// Step cap used by `SimplifyOptions::default()`.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Tuning knobs of a `Simplifier`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Upper bound on the number of rewrite steps before a run is aborted
    /// with `Error::StepLimitExceeded`.
    pub max_steps: usize,
    /// Upper bound on pending operators while parsing, which bounds how
    /// deeply the parsed tree nests. Deeper input fails with
    /// `Error::NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for SimplifyOptions {
    fn default() -> SimplifyOptions {
        SimplifyOptions {
            max_steps: DEFAULT_MAX_STEPS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SimplifyOptions {
    pub fn with_max_steps(mut self, max_steps: usize) -> SimplifyOptions {
        self.max_steps = max_steps;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> SimplifyOptions {
        self.max_depth = max_depth;
        self
    }
}

/// One applied law: the whole expression before and after the rewrite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub before: String,
    pub law: Law,
    pub after: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} => {} [{}]", self.before, self.after, self.law)
    }
}

/// The full outcome of simplifying one input text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Simplification {
    /// The input after alias substitution and whitespace cleanup.
    pub normalized: String,
    /// The canonical parse of `normalized`.
    #[serde(skip)]
    pub initial: Expr,
    /// The fixpoint reached by the rewrite loop.
    pub result: Expr,
    /// Every applied law, in order.
    pub steps: Vec<Step>,
}

impl fmt::Display for Simplification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Expresión normalizada: {}", self.normalized)?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "Paso {}:", i + 1)?;
            writeln!(f, "  Antes:   {}", step.before)?;
            writeln!(f, "  Ley:     {}", step.law)?;
            writeln!(f, "  Después: {}", step.after)?;
        }
        writeln!(f, "Resultado final simplificado: {}", self.result)
    }
}

/// Drives the rewrite engine to a fixpoint and records the step trace.
#[derive(Clone, Debug, Default)]
pub struct Simplifier {
    options: SimplifyOptions,
}

impl Simplifier {
    pub fn new(options: SimplifyOptions) -> Simplifier {
        Simplifier { options }
    }

    /// Normalizes, parses and simplifies `raw`.
    pub fn run(&self, raw: &str) -> Result<Simplification> {
        let normalized = normalize_symbols(raw)?;
        debug!(%normalized, "normalized input");
        let initial = parse_with_max_depth(&normalized, self.options.max_depth)?;
        let (result, steps) = self.simplify(initial.clone())?;
        Ok(Simplification {
            normalized,
            initial,
            result,
            steps,
        })
    }

    /// Rewrites `e` one law at a time until no law applies. The tree is
    /// re-canonicalized after every step, and each step is recorded with
    /// the printed form of the whole expression before and after.
    pub fn simplify(&self, e: Expr) -> Result<(Expr, Vec<Step>)> {
        let mut e = canonicalize(e);
        let mut steps: Vec<Step> = Vec::new();
        loop {
            let rw = match rewrite_once(&e) {
                Some(rw) => rw,
                None => break,
            };
            if steps.len() >= self.options.max_steps {
                warn!(limit = self.options.max_steps, expr = %e, "step limit reached");
                return Err(Error::StepLimitExceeded {
                    limit: self.options.max_steps,
                });
            }
            let before = e.to_string();
            e = canonicalize(rw.expr);
            let after = e.to_string();
            debug!(step = steps.len() + 1, law = %rw.law, %before, %after, "applied law");
            steps.push(Step {
                before,
                law: rw.law,
                after,
            });
        }
        Ok((e, steps))
    }
}

/// Simplifies `raw` with default options, returning the final printed
/// expression and the ordered step trace.
///
/// ```
/// use boolean_laws::{simplify_expression, Law};
///
/// let (result, steps) = simplify_expression("A * !A").unwrap();
/// assert_eq!(result, "0");
/// assert_eq!(steps.len(), 1);
/// assert_eq!(steps[0].law, Law::Complement);
/// ```
pub fn simplify_expression(raw: &str) -> Result<(String, Vec<Step>)> {
    let s = Simplifier::default().run(raw)?;
    Ok((s.result.to_string(), s.steps))
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    fn step(before: &str, law: Law, after: &str) -> Step {
        Step {
            before: before.to_string(),
            law,
            after: after.to_string(),
        }
    }

    #[test]
    fn multi_step_trace() {
        let (result, steps) = simplify_expression("¬¬A and (A or 1)").unwrap();
        assert_eq!(result, "A");
        assert_eq!(
            steps,
            vec![
                step("!!A & (1 | A)", Law::DoubleNegation, "A & (1 | A)"),
                step("A & (1 | A)", Law::Annihilation, "1 & A"),
                step("1 & A", Law::Identity, "A"),
            ]
        );
    }

    #[test]
    fn report_rendering() {
        let s = Simplifier::default().run("!!A & (A | 1)").unwrap();
        assert_eq!(
            s.to_string(),
            indoc! {"
                Expresión normalizada: !!A & (A | 1)
                Paso 1:
                  Antes:   !!A & (1 | A)
                  Ley:     Doble negación
                  Después: A & (1 | A)
                Paso 2:
                  Antes:   A & (1 | A)
                  Ley:     Anulación
                  Después: 1 & A
                Paso 3:
                  Antes:   1 & A
                  Ley:     Identidad
                  Después: A
                Resultado final simplificado: A
            "}
        );
    }

    #[test]
    fn fixpoint_input_has_no_steps() {
        let s = Simplifier::default().run("B & A").unwrap();
        assert!(s.steps.is_empty());
        assert_eq!(s.result, s.initial);
        assert_eq!(
            s.to_string(),
            "Expresión normalizada: B & A\nResultado final simplificado: A & B\n"
        );
    }

    #[test]
    fn step_limit() {
        let capped = Simplifier::new(SimplifyOptions::default().with_max_steps(1));
        assert_eq!(
            capped.run("!!A & (A | 1)"),
            Err(Error::StepLimitExceeded { limit: 1 })
        );
        let enough = Simplifier::new(SimplifyOptions::default().with_max_steps(3));
        assert_eq!(enough.run("!!A & (A | 1)").unwrap().steps.len(), 3);
    }

    #[test]
    fn nesting_limit() {
        let deep = format!("{}A", "!".repeat(100_000));
        let err = simplify_expression(&deep).unwrap_err();
        assert_eq!(err, Error::NestingTooDeep { limit: DEFAULT_MAX_DEPTH });
        assert_eq!(err.kind(), crate::ErrorKind::Resource);

        let shallow = Simplifier::new(SimplifyOptions::default().with_max_depth(2));
        assert_eq!(
            shallow.run("!(!(A))"),
            Err(Error::NestingTooDeep { limit: 2 })
        );

        let roomy = Simplifier::new(SimplifyOptions::default().with_max_depth(1024));
        let s = roomy.run(&format!("{}A", "!".repeat(400))).unwrap();
        assert_eq!(s.result, Expr::var("A"));
        assert_eq!(s.steps.len(), 200);
    }

    #[test]
    fn simplify_canonicalizes_raw_trees() {
        let e = (Expr::var("B") & Expr::var("A")) | (Expr::var("A") & Expr::var("B"));
        let (result, steps) = Simplifier::default().simplify(e).unwrap();
        assert_eq!(result.to_string(), "A & B");
        assert_eq!(steps, vec![step("(A & B) | (A & B)", Law::Idempotence, "A & B")]);
    }

    #[test]
    fn step_display() {
        let s = step("A | A", Law::Idempotence, "A");
        assert_eq!(s.to_string(), "A | A => A [Idempotencia]");
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            simplify_expression("   ").unwrap_err(),
            Error::EmptyInput
        );
        assert_eq!(
            simplify_expression("(A").unwrap_err(),
            Error::UnbalancedParentheses
        );
    }
}
