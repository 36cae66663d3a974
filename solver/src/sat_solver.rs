use auto_impl::auto_impl;
use rayon::prelude::*;

use crate::{CNF, Outcome, SATSolution, Valuation};
use crate::solvers::Deadline;

#[auto_impl(&, Box)]
pub trait Solver {
    /// Runs the solver until it reaches a verdict or `deadline` passes,
    /// in which case the solution is [`SATSolution::Unknown`].
    fn solve_until(&self, formula: &CNF, deadline: Deadline) -> Outcome;

    /// Runs the solver without a time limit and drops the statistics.
    fn solve(&self, formula: &CNF) -> SATSolution {
        self.solve_until(formula, Deadline::never()).solution
    }
}

/// Checks whether `val` satisfies every clause of `formula`.
pub fn check_valuation(formula: &CNF, val: &Valuation) -> bool {
    val.len() >= formula.num_variables
        && formula.clauses.par_iter()
            .all(|clause| clause.is_satisfied_by(val))
}
