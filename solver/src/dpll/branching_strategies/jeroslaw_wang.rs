use super::{
    BranchingStrategy,
    super::{
        clause::Clauses,
        variable::{VariableId, Variables},
    },
};

/// Jeroslow-Wang scoring: every unsatisfied clause of length `l` adds `2^-l`
/// to each of its unassigned variables, regardless of polarity. The highest
/// score wins, ties go to the variable met first.
#[derive(Clone, Debug, Default)]
pub struct JeroslawWang {
    scores: Vec<f64>,
    seen: Vec<bool>,
    order: Vec<VariableId>,
}

impl BranchingStrategy for JeroslawWang {
    fn pick_branching_variable(&mut self, clauses: &Clauses, variables: &Variables) -> Option<VariableId> {
        self.scores.clear();
        self.scores.resize(variables.len() + 1, 0.0);
        self.seen.clear();
        self.seen.resize(variables.len() + 1, false);
        self.order.clear();

        for clause in clauses.iter().filter(|clause| !clause.is_satisfied()) {
            let weight = 0.5f64.powi(clause.free as i32);
            for lit in clause.literals.iter().filter(|lit| variables[lit.id].is_free()) {
                if !self.seen[lit.id] {
                    self.seen[lit.id] = true;
                    self.order.push(lit.id);
                }
                self.scores[lit.id] += weight;
            }
        }

        let scores = &self.scores;
        self.order.iter()
            .copied()
            .fold(None, |best: Option<VariableId>, id| match best {
                Some(best) if scores[best] >= scores[id] => Some(best),
                _ => Some(id),
            })
    }
}
