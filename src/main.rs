// boolean_laws: step-by-step Boolean expression simplification.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use boolean_laws::{
    normalize_symbols, Simplifier, SimplifyOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS,
};

#[derive(Parser)]
#[command(name = "boolsimp")]
#[command(version, about = "Simplify Boolean expressions step by step")]
struct Cli {
    /// Expression to simplify; several words are joined with spaces
    #[arg(required = true)]
    expr: Vec<String>,

    /// Only print the normalized expression
    #[arg(long)]
    normalize_only: bool,

    /// Print the result and step trace as JSON
    #[arg(long)]
    json: bool,

    /// Abort if no fixpoint is reached within this many steps
    #[arg(long, env = "BOOLSIMP_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Reject input nesting negations or parentheses deeper than this
    #[arg(long, env = "BOOLSIMP_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let raw = cli.expr.join(" ");

    if cli.normalize_only {
        let normalized = normalize_symbols(&raw).context("validation error")?;
        println!("{}", normalized);
        return Ok(());
    }

    let options = SimplifyOptions::default()
        .with_max_steps(cli.max_steps)
        .with_max_depth(cli.max_depth);
    let simplifier = Simplifier::new(options);
    let outcome = simplifier
        .run(&raw)
        .with_context(|| format!("cannot simplify '{}'", raw))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", outcome);
    }
    Ok(())
}
