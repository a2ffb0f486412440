/*!
 * Policy that submits a uniform pick from `1..=k`.
 */

use rand::distributions::{Distribution, Uniform};
use rand::RngCore;

use crate::{DecisionPolicy, Submission};

/// Uniform pick from `1..=k`, drawn from the generator passed in.
/// Distribution is cached and rebuilt only when `k` changes.
#[derive(Debug, Default, Clone)]
pub struct RandomDecision {
    distr: Option<(Submission, Uniform<Submission>)>,
}

impl RandomDecision {
    pub fn create() -> Self {
        RandomDecision { distr: None }
    }
}

impl DecisionPolicy for RandomDecision {
    /// `k` - upper bound of the pick, at least 1 (as validated by `Setup`).
    fn next_decision(&mut self, k: Submission, rng: &mut dyn RngCore) -> Submission {
        if self.distr.as_ref().map_or(false, |(cached_k, _)| *cached_k != k) {
            self.distr = None;
        }
        let (_, distr) = self.distr.get_or_insert_with(|| (k, Uniform::new_inclusive(1, k)));
        distr.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RandomDecision {
        RandomDecision::create()
    }

    include!("test_common.inc.rs");

    /// Chi-square critical value for 5 degrees of freedom at p = 0.001.
    const CHI2_CRIT_DF5: f64 = 20.515;

    #[test]
    fn uniform_over_six() {
        const ROUNDS: usize = 100_000;
        let mut rng = StdRng::seed_from_u64(0xd1ce);
        let mut p = policy();
        let mut counts = [0usize; 6];
        for _ in 0..ROUNDS {
            let d = p.next_decision(6, &mut rng);
            assert!((1..=6).contains(&d));
            counts[(d - 1) as usize] += 1;
        }
        let expected = ROUNDS as f64 / 6.0;
        let chi2: f64 = counts
            .iter()
            .map(|c| {
                let diff = *c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi2 < CHI2_CRIT_DF5, "chi2={} counts={:?}", chi2, counts);
    }

    #[test]
    fn never_zero_nor_above_k() {
        let mut text = String::from("3 10 0 0\n");
        for i in 0..5_000 {
            text.push_str(&format!("{} {} {}\n", i % 11, -i, 0));
        }
        let (rounds, decisions) = play_text(&text, 0xbad);
        assert_eq!(rounds, 5_001);
        assert!(decisions.iter().all(|d| *d != 0 && *d != 11));
        assert!(decisions.iter().all(|d| (1..=10).contains(d)));
    }

    #[test]
    fn reaches_every_value() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut p = policy();
        let mut seen = [false; 10];
        for _ in 0..10_000 {
            seen[(p.next_decision(10, &mut rng) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "{:?}", seen);
    }

    #[test]
    fn follows_k_change() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut p = policy();
        for _ in 0..200 {
            assert!((1..=3).contains(&p.next_decision(3, &mut rng)));
        }
        for _ in 0..200 {
            assert!((1..=20).contains(&p.next_decision(20, &mut rng)));
        }
        assert_eq!(p.next_decision(1, &mut rng), 1);
    }

    #[test]
    fn different_seeds_differ() {
        let text = format!("1 1000 0 0\n{}", "5\n".repeat(20));
        assert_ne!(play_text(&text, 1).1, play_text(&text, 2).1);
    }
}
