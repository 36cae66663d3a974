use rand::{seq::SliceRandom, Rng};

use crate::VarId;
use super::{super::{LocalSearchParams, WalkState}, FlipPolicy};

/// Flips a uniformly random variable with probability `p_random`, otherwise
/// one with the steepest gain.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gsat;

impl FlipPolicy for Gsat {
    fn pick_flip<R: Rng + ?Sized>(&self, state: &WalkState, p_random: f64, rng: &mut R) -> Option<VarId> {
        if state.num_variables() == 0 {
            return None;
        }
        if rng.gen::<f64>() < p_random {
            Some(rng.gen_range(1..=state.num_variables()))
        } else {
            steepest_gain(state, rng)
        }
    }

    fn default_params(&self) -> LocalSearchParams {
        LocalSearchParams { max_tries: 100, max_flips: 10_000, p_random: 0.3 }
    }
}

/// Variable whose flip most increases the number of satisfied clauses.
/// Ties are broken uniformly at random.
pub fn steepest_gain<R: Rng + ?Sized>(state: &WalkState, rng: &mut R) -> Option<VarId> {
    let mut best = Vec::new();
    let mut best_gain = i64::MIN;

    for variable in 1..=state.num_variables() {
        let gain = state.gain(variable);
        if gain > best_gain {
            best_gain = gain;
            best.clear();
        }
        if gain == best_gain {
            best.push(variable);
        }
    }

    best.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CNF;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn greedy_move_takes_the_best_gain() {
        let formula = CNF::from_literals(3, vec![vec![1, 2], vec![1, 3], vec![-2]]).unwrap();
        let state = WalkState::new(&formula);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Gsat.pick_flip(&state, 0.0, &mut rng), Some(1));
        }
    }

    #[test]
    fn ties_are_broken_among_the_best_only() {
        let formula = CNF::from_literals(4, vec![vec![1], vec![2], vec![-3]]).unwrap();
        let state = WalkState::new(&formula);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 5];
        for _ in 0..100 {
            seen[steepest_gain(&state, &mut rng).unwrap()] = true;
        }
        assert_eq!(seen, [false, true, true, false, false]);
    }

    #[test]
    fn random_moves_stay_in_range() {
        let formula = CNF::from_literals(3, vec![vec![1, 2, 3]]).unwrap();
        let state = WalkState::new(&formula);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let variable = Gsat.pick_flip(&state, 1.0, &mut rng).unwrap();
            assert!((1..=3).contains(&variable));
        }
    }
}
