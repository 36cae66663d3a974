use super::{
    BranchingStrategy,
    super::{
        clause::Clauses,
        variable::{VariableId, Variables},
    },
};

/// First unassigned variable in the order the formula was written.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveBranching;

impl BranchingStrategy for NaiveBranching {
    fn pick_branching_variable(&mut self, clauses: &Clauses, variables: &Variables) -> Option<VariableId> {
        clauses.iter()
            .filter(|clause| !clause.is_satisfied())
            .flat_map(|clause| clause.literals.iter())
            .find(|lit| variables[lit.id].is_free())
            .map(|lit| lit.id)
    }
}
