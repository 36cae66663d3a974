//! Incomplete solvers walking over total assignments.
//!
//! They can only ever prove satisfiability: when the budget runs out the
//! verdict is [`SATSolution::Unknown`](crate::SATSolution::Unknown).

mod flip_policies;
mod local_search_solver;
mod walk_state;

pub use flip_policies::{least_unsatisfied, steepest_gain, FlipPolicy, Gsat, WalkSat};
pub use local_search_solver::{LocalSearchParams, LocalSearchSolver};
pub use walk_state::WalkState;
