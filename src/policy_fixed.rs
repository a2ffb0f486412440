/*!
 * Policy that always submits the highest allowed number.
 */

use rand::RngCore;

use crate::{DecisionPolicy, Submission};

/// Always submits `k`.
#[derive(Debug, Default, Clone)]
pub struct FixedDecision;

impl FixedDecision {
    pub fn create() -> Self {
        FixedDecision
    }
}

impl DecisionPolicy for FixedDecision {
    fn next_decision(&mut self, k: Submission, _rng: &mut dyn RngCore) -> Submission {
        k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> FixedDecision {
        FixedDecision::create()
    }

    include!("test_common.inc.rs");

    #[test]
    fn always_k() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = policy();
        for k in &[1, 3, 6, 10, 1_000] {
            for _ in 0..10 {
                assert_eq!(p.next_decision(*k, &mut rng), *k);
            }
        }
    }

    #[test]
    fn first_output_is_k() {
        let (_, decisions) = play_text("5 6 0 0\n3 -2 0 6 6\n", 0);
        assert_eq!(decisions[0], 6);
        assert_eq!(decisions, vec![6, 6]);
    }

    #[test]
    fn rng_untouched() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut reference = StdRng::seed_from_u64(5);
        policy().next_decision(4, &mut rng);
        assert_eq!(rng.next_u64(), reference.next_u64());
    }
}
