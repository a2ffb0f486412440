/*!
 * Strategy loop: submit a decision, then consume the round's submissions, until input ends.
 */

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::RngCore;
use tracing::{debug, warn};

use crate::input::{Setup, TokenReader};
use crate::DecisionPolicy;

/// Plays rounds until input is exhausted.
/// Returns number of rounds whose decision was sent.
///
/// Every decision is written and flushed before that round's submissions are read,
/// since the referee waits for all players before it sends anything back.
/// Submissions are read (exactly `setup.n` per round) and dropped.
pub fn play<R: BufRead, W: Write>(
    policy: &mut dyn DecisionPolicy,
    setup: &Setup,
    reader: &mut TokenReader<R>,
    out: &mut W,
    rng: &mut dyn RngCore,
) -> Result<u64> {
    let mut rounds = 0u64;
    loop {
        let decision = policy.next_decision(setup.k, rng);

        #[cfg(feature = "decision_check")]
        if !(1..=setup.k).contains(&decision) {
            bail!("Decision check failed in round {}: {} is outside 1..={}", rounds + 1, decision, setup.k);
        }

        writeln!(out, "{}", decision).with_context(|| format!("Cannot send decision for round {}", rounds + 1))?;
        out.flush().with_context(|| format!("Cannot send decision for round {}", rounds + 1))?;
        rounds += 1;

        // Grows with what actually arrives; `n` comes from input.
        let mut submitted = Vec::new();
        while submitted.len() < setup.n {
            match reader.next_int()? {
                Some(s) => submitted.push(s),
                None => {
                    if !submitted.is_empty() {
                        warn!(
                            round = rounds,
                            got = submitted.len(),
                            expected = setup.n,
                            line = reader.line_no(),
                            "input ended in the middle of a round"
                        );
                    }
                    return Ok(rounds);
                }
            }
        }
        debug!(round = rounds, decision, ?submitted, "round finished");
    }
}
