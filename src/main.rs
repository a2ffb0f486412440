/*!
    Player program for the unique-bid game: every round each of `n` players submits a number from `1..=k`,
    then the referee sends all submissions of that round back to every player.
 ```
Usage:
   lone_bid POLICY [--seed SEED] [<input.txt] [>output.txt]
where:
   POLICY     - `fixed` (always submit k) or `random` (uniform pick from 1..=k)
   SEED       - optional seed for the random policy; entropy is used when missing
   input.txt  - referee stream: `n k w j` first, then n submissions per round
   output.txt - one decision per line, one line per round
```
   Diagnostics go to stderr and are controlled by `RUST_LOG` (default `warn`).  
   License: MIT like - see `LICENSE`.  
   Copyright (c) 2026 Grzegorz Wierzchowski.
 */

#[macro_use] extern crate anyhow;

use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Type of every integer on the wire: setup values, decisions and peer submissions.
type Submission = i64;

mod input;
mod strategy;
mod policy_fixed;
mod policy_random;

#[derive(Parser, Debug)]
#[command(name = "lone_bid", about = "Plays the unique-bid game over stdin/stdout", version)]
struct Args {
    /// Decision policy to play with
    #[arg(value_enum)]
    policy: PolicyKind,
    /// Seed for the random generator (entropy when missing)
    #[arg(long)]
    seed: Option<u64>,
}

/// Available decision policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Always submit the upper bound `k`.
    Fixed,
    /// Submit a uniform pick from `1..=k`.
    Random,
}

/// Creates concrete policy used to play.
fn policy_factory(kind: PolicyKind) -> Box<dyn DecisionPolicy> {
    match kind {
        PolicyKind::Fixed => Box::new(policy_fixed::FixedDecision::create()),
        PolicyKind::Random => Box::new(policy_random::RandomDecision::create()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Program main function.
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // One generator for the whole run; policies only borrow it.
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut policy = policy_factory(args.policy);

    let stdin = stdin();
    let mut reader = input::TokenReader::new(stdin.lock());
    let setup = input::Setup::read(&mut reader).context("Cannot start the game")?;
    info!(policy = ?args.policy, n = setup.n, k = setup.k, w = setup.w, j = setup.j, "game setup received");

    let stdout = stdout();
    let mut out = stdout.lock();
    let rounds = strategy::play(policy.as_mut(), &setup, &mut reader, &mut out, &mut rng)?;
    info!(rounds, "input closed, leaving the game");
    Ok(())
}

/// Rule that produces the number submitted in every round.
pub trait DecisionPolicy {
    /// Returns the decision for the next round.
    /// `k` - upper bound of allowed submissions (at least 1).
    /// `rng` - the run's random generator; policies that do not need randomness leave it untouched.
    fn next_decision(&mut self, k: Submission, rng: &mut dyn RngCore) -> Submission;
}
