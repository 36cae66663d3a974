use std::time::Duration;
use crate::{CNF, Outcome, Solver};
use super::Deadline;

/// Wraps a solver so that every call gives up after `max_duration`.
pub struct TimeLimitedSolver<S: Solver> {
    max_duration: Duration,
    solver: S,
}

impl<S: Solver> TimeLimitedSolver<S> {
    pub fn new(solver: S, max_duration: Duration) -> TimeLimitedSolver<S> {
        TimeLimitedSolver {
            solver,
            max_duration,
        }
    }
}

impl<S: Solver> Solver for TimeLimitedSolver<S> {
    fn solve_until(&self, formula: &CNF, deadline: Deadline) -> Outcome {
        let deadline = deadline.min(Deadline::after(self.max_duration));
        self.solver.solve_until(formula, deadline)
    }
}
