use crate::sat_solver::*;
use crate::{CNF, Outcome};
use std::time::{Instant, Duration};
use super::Deadline;

/// A wrapper for another solver which exposes time performance
/// measurement
pub struct TimedSolver<S> {
    solver: S,
}

impl<S: Solver> Solver for TimedSolver<S> {
    fn solve_until(&self, formula: &CNF, deadline: Deadline) -> Outcome {
        self.solver.solve_until(formula, deadline)
    }
}

impl<S> TimedSolver<S> {
    /// Wraps a solver in a `TimedSolver`
    pub fn new(solver: S) -> Self {
        TimedSolver{solver}
    }
}

impl<S: Solver> TimedSolver<S> {
    /// Solves a given formula but measures wall-clock time additionally
    pub fn solve_timed(&self, formula: &CNF) -> (Duration, Outcome) {
        let start = Instant::now();
        let outcome = self.solver.solve_until(formula, Deadline::never());
        let duration = start.elapsed();
        (duration, outcome)
    }
}
