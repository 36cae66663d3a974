use crate::{CNFClause, CNFVar};
use super::variable::VariableId;

pub type ClauseId = usize;

/// Clause of the shared arena together with its state under the current trail.
#[derive(Debug, Clone)]
pub struct Clause {
    /// Distinct literals in the order they were written
    pub literals: Vec<CNFVar>,
    /// Number of literals whose variable is still unassigned
    pub free: usize,
    /// Variable whose assignment satisfied the clause first
    pub satisfied_by: Option<VariableId>,
}

pub type Clauses = Vec<Clause>;

impl Clause {
    pub fn new(cnf_clause: &CNFClause) -> Clause {
        // duplicated literals count as a single one
        let literals = cnf_clause.distinct();

        Clause {
            free: literals.len(),
            satisfied_by: None,
            literals,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied_by.is_some()
    }

    /// Unsatisfied with exactly one unassigned literal left
    pub fn is_unit(&self) -> bool {
        self.satisfied_by.is_none() && self.free == 1
    }

    /// Unsatisfied with every literal falsified
    pub fn is_empty(&self) -> bool {
        self.satisfied_by.is_none() && self.free == 0
    }
}
