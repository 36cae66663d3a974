mod branch_state;
pub mod branching_strategies;
mod clause;
mod satisfaction;
mod variable;

pub use branch_state::BranchState;
pub use clause::{Clause, ClauseId, Clauses};
pub use satisfaction::SatisfactionSolver;
pub use variable::{Variable, VariableId, Variables};
