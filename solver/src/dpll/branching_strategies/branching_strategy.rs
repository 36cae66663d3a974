use auto_impl::auto_impl;

use super::super::{
    clause::Clauses,
    variable::{VariableId, Variables},
};

#[auto_impl(&mut, Box)]
pub trait BranchingStrategy {
    /// Picks the next variable to branch on among the unassigned variables of
    /// the unsatisfied clauses, or `None` if there is none.
    fn pick_branching_variable(&mut self, clauses: &Clauses, variables: &Variables) -> Option<VariableId>;
}
