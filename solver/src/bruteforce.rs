use crate::sat_solver::*;
use crate::solvers::Deadline;
use crate::{Outcome, SATSolution, Statistics, Valuation, CNF};

/// A simple CNF solver that naively checks all possible
/// valuations in order to ensure satisfiability
#[derive(Clone, Copy, Debug)]
pub enum Bruteforce {
    Bruteforce,
}

impl Solver for Bruteforce {
    fn solve_until(&self, formula: &CNF, deadline: Deadline) -> Outcome {
        // initial valuation sets all to false
        let mut valuation = vec![false; formula.num_variables];
        let mut statistics = Statistics::default();

        let solution = match guess(formula, 0, &mut valuation, &mut statistics, deadline) {
            Some(true) => SATSolution::Satisfiable(valuation),
            Some(false) => SATSolution::Unsatisfiable,
            None => SATSolution::Unknown,
        };
        Outcome { solution, statistics }
    }
}

/// `None` if the deadline passed before the answer was known.
fn guess(
    formula: &CNF,
    change: usize,
    valuation: &mut Valuation,
    statistics: &mut Statistics,
    deadline: Deadline,
) -> Option<bool> {
    if change == valuation.len() {
        if deadline.expired() {
            return None;
        }
        return Some(formula.is_satisfied_by(valuation));
    }

    if guess(formula, change + 1, valuation, statistics, deadline)? {
        return Some(true);
    }
    // set current bit
    statistics.decisions += 1;
    valuation[change] = true;
    // try again
    let res = guess(formula, change + 1, valuation, statistics, deadline)?;
    if !res {
        // if failed set back to default
        valuation[change] = false;
    }
    Some(res)
}
