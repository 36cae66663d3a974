use super::{
    BranchingStrategy,
    super::{
        clause::Clauses,
        variable::{VariableId, Variables},
    },
};

/// Lowest numbered unassigned variable that still occurs in an unsatisfied clause.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexOrderBranching;

impl BranchingStrategy for IndexOrderBranching {
    fn pick_branching_variable(&mut self, _clauses: &Clauses, variables: &Variables) -> Option<VariableId> {
        variables.iter()
            .find(|(_, var)| var.is_free() && var.is_live())
            .map(|(id, _)| id)
    }
}
