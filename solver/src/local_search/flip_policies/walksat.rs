use rand::{seq::SliceRandom, Rng};

use crate::VarId;
use super::{super::{LocalSearchParams, WalkState}, FlipPolicy};

/// Picks a uniformly random unsatisfied clause and flips one of its
/// variables: a random one with probability `p_random`, otherwise the one
/// leaving the fewest clauses unsatisfied.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkSat;

impl FlipPolicy for WalkSat {
    fn pick_flip<R: Rng + ?Sized>(&self, state: &WalkState, p_random: f64, rng: &mut R) -> Option<VarId> {
        let clause = state.clause(*state.unsatisfied().choose(rng)?);
        if rng.gen::<f64>() < p_random {
            clause.choose(rng).map(|lit| lit.id)
        } else {
            least_unsatisfied(state, clause.iter().map(|lit| lit.id))
        }
    }

    fn default_params(&self) -> LocalSearchParams {
        LocalSearchParams { max_tries: 1, max_flips: 1_000, p_random: 0.5 }
    }
}

/// Candidate whose flip leaves the fewest unsatisfied clauses; the first
/// one on ties.
pub fn least_unsatisfied<I>(state: &WalkState, candidates: I) -> Option<VarId>
where
    I: IntoIterator<Item = VarId>,
{
    candidates.into_iter()
        .map(|variable| (state.break_count(variable) as i64 - state.make_count(variable) as i64, variable))
        .fold(None, |best: Option<(i64, VarId)>, (delta, variable)| match best {
            Some((best_delta, _)) if best_delta <= delta => best,
            _ => Some((delta, variable)),
        })
        .map(|(_, variable)| variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CNF;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn greedy_move_stays_inside_the_clause() {
        // flipping 1 would satisfy the most clauses but 1 is not in (2 3)
        let formula = CNF::from_literals(3, vec![vec![2, 3], vec![1], vec![1, -3]]).unwrap();
        let mut state = WalkState::new(&formula);
        state.flip(1);
        assert_eq!(state.unsatisfied(), &[0]);

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(WalkSat.pick_flip(&state, 0.0, &mut rng), Some(2));
        }
    }

    #[test]
    fn first_candidate_wins_ties() {
        let formula = CNF::from_literals(3, vec![vec![1, 2, 3]]).unwrap();
        let state = WalkState::new(&formula);
        assert_eq!(least_unsatisfied(&state, vec![2, 3, 1]), Some(2));
        assert_eq!(least_unsatisfied(&state, Vec::new()), None);
    }

    #[test]
    fn nothing_to_flip_when_satisfied() {
        let formula = CNF::from_literals(1, vec![vec![-1]]).unwrap();
        let state = WalkState::new(&formula);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(WalkSat.pick_flip(&state, 0.5, &mut rng), None);
    }
}
