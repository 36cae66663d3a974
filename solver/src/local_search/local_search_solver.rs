use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::{CNF, Outcome, SATSolution, Solver, Statistics};
use crate::solvers::Deadline;
use super::{FlipPolicy, Gsat, WalkSat, WalkState};

/// Search budget of local search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalSearchParams {
    /// Random restarts
    pub max_tries: u64,
    /// Flips per try
    pub max_flips: u64,
    /// Probability of a random move instead of a greedy one
    pub p_random: f64,
}

/// Random restarts of a stochastic walk driven by the flip policy `P`.
///
/// Runs are reproducible: the same seed on the same formula gives the same
/// walk and the same verdict.
#[derive(Clone, Debug)]
pub struct LocalSearchSolver<P> {
    policy: P,
    params: LocalSearchParams,
    seed: u64,
}

impl<P: FlipPolicy> LocalSearchSolver<P> {
    /// Solver with the default budget of `policy` and seed 0.
    pub fn new(policy: P) -> LocalSearchSolver<P> {
        let params = policy.default_params();
        LocalSearchSolver { policy, params, seed: 0 }
    }

    pub fn with_params(self, params: LocalSearchParams) -> LocalSearchSolver<P> {
        LocalSearchSolver { params, ..self }
    }

    pub fn with_seed(self, seed: u64) -> LocalSearchSolver<P> {
        LocalSearchSolver { seed, ..self }
    }

    pub fn params(&self) -> LocalSearchParams {
        self.params
    }

    fn search(&self, state: &mut WalkState, statistics: &mut Statistics, deadline: Deadline) -> SATSolution {
        if state.has_empty_clause() {
            debug!("formula contains an empty clause, giving up");
            return SATSolution::Unknown;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);

        for try_number in 1..=self.params.max_tries {
            statistics.tries += 1;
            state.randomize(&mut rng);

            for _ in 0..self.params.max_flips {
                if state.is_satisfied() {
                    return SATSolution::Satisfiable(state.valuation());
                }
                if deadline.expired() {
                    return SATSolution::Unknown;
                }
                match self.policy.pick_flip(state, self.params.p_random, &mut rng) {
                    Some(variable) => state.flip(variable),
                    None => break,
                }
                statistics.flips += 1;
            }
            if state.is_satisfied() {
                return SATSolution::Satisfiable(state.valuation());
            }

            debug!("try {} ended with {} unsatisfied clauses", try_number, state.unsatisfied().len());
        }

        SATSolution::Unknown
    }
}

impl LocalSearchSolver<Gsat> {
    pub fn gsat() -> LocalSearchSolver<Gsat> {
        LocalSearchSolver::new(Gsat)
    }
}

impl LocalSearchSolver<WalkSat> {
    pub fn walksat() -> LocalSearchSolver<WalkSat> {
        LocalSearchSolver::new(WalkSat)
    }
}

impl<P: FlipPolicy> Solver for LocalSearchSolver<P> {
    fn solve_until(&self, formula: &CNF, deadline: Deadline) -> Outcome {
        let mut statistics = Statistics::default();
        let mut state = WalkState::new(formula);
        let solution = self.search(&mut state, &mut statistics, deadline);

        debug!(
            "local search finished with {} after {} tries and {} flips",
            solution, statistics.tries, statistics.flips
        );

        Outcome { solution, statistics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_valuation;

    fn formula(num_variables: usize, clauses: Vec<Vec<i32>>) -> CNF {
        CNF::from_literals(num_variables, clauses).unwrap()
    }

    #[test]
    fn default_budgets() {
        assert_eq!(
            LocalSearchSolver::gsat().params(),
            LocalSearchParams { max_tries: 100, max_flips: 10_000, p_random: 0.3 }
        );
        assert_eq!(
            LocalSearchSolver::walksat().params(),
            LocalSearchParams { max_tries: 1, max_flips: 1_000, p_random: 0.5 }
        );
    }

    #[test]
    fn finds_a_model_of_an_easy_formula() {
        let formula = formula(3, vec![vec![1, 2], vec![-1, 2], vec![2, 3], vec![-3, 1]]);
        for outcome in vec![
            LocalSearchSolver::gsat().solve_until(&formula, Deadline::never()),
            LocalSearchSolver::walksat().with_seed(9).solve_until(&formula, Deadline::never()),
        ] {
            let valuation = outcome.solution.valuation().cloned().unwrap();
            assert!(check_valuation(&formula, &valuation));
        }
    }

    #[test]
    fn unsatisfiable_formula_gives_unknown() {
        let formula = formula(1, vec![vec![1], vec![-1]]);
        let params = LocalSearchParams { max_tries: 3, max_flips: 50, p_random: 0.3 };

        let outcome = LocalSearchSolver::gsat().with_params(params).solve_until(&formula, Deadline::never());
        assert_eq!(outcome.solution, SATSolution::Unknown);
        assert_eq!(outcome.statistics.tries, 3);
        assert_eq!(outcome.statistics.flips, 150);

        let outcome = LocalSearchSolver::walksat().with_params(params).solve_until(&formula, Deadline::never());
        assert_eq!(outcome.solution, SATSolution::Unknown);
    }

    #[test]
    fn empty_clause_gives_unknown_without_searching() {
        let formula = formula(2, vec![vec![1, 2], vec![]]);
        let outcome = LocalSearchSolver::walksat().solve_until(&formula, Deadline::never());
        assert_eq!(outcome.solution, SATSolution::Unknown);
        assert_eq!(outcome.statistics.tries, 0);
    }

    #[test]
    fn expired_deadline_gives_unknown_before_any_flip() {
        let formula = formula(2, vec![vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]]);
        let deadline = Deadline::after(std::time::Duration::from_secs(0));

        let outcome = LocalSearchSolver::gsat().solve_until(&formula, deadline);
        assert_eq!(outcome.solution, SATSolution::Unknown);
        assert_eq!(outcome.statistics.flips, 0);

        let outcome = LocalSearchSolver::walksat().solve_until(&formula, deadline);
        assert_eq!(outcome.solution, SATSolution::Unknown);
        assert_eq!(outcome.statistics.flips, 0);
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        let outcome = LocalSearchSolver::gsat().solve_until(&CNF::empty(2), Deadline::never());
        assert!(outcome.solution.is_sat());
        assert_eq!(outcome.statistics.flips, 0);
    }

    #[test]
    fn same_seed_same_walk() {
        let formula = formula(4, vec![vec![1, 2, -3], vec![-1, 3, 4], vec![-2, -4], vec![2, 3], vec![-3, -4, 1]]);
        let solver = LocalSearchSolver::walksat().with_seed(42);
        assert_eq!(
            solver.solve_until(&formula, Deadline::never()),
            solver.solve_until(&formula, Deadline::never())
        );
    }
}
