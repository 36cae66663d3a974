use std::collections::VecDeque;

use crate::{CNF, CNFVar, Conflict, Valuation};
use super::{
    clause::{Clause, ClauseId, Clauses},
    variable::{VariableId, Variables},
};

/// The simplified formula of the current branch.
///
/// All branches share one clause arena. Assigning a literal updates the
/// per-clause counters and pushes the variable on the trail; backtracking
/// pops the trail and reverts exactly those updates, so a branch never
/// observes anything a discarded sibling did.
#[derive(Debug, Clone)]
pub struct BranchState {
    clauses: Clauses,
    variables: Variables,
    trail: Vec<VariableId>,
    /// Clauses that became unit, in the order they did
    unit_queue: VecDeque<ClauseId>,
    unsatisfied: usize,
    empty: usize,
}

impl BranchState {
    pub fn new(formula: &CNF) -> BranchState {
        let clauses: Clauses = formula.clauses.iter().map(Clause::new).collect();
        let mut variables = Variables::new(formula.num_variables);

        for (index, clause) in clauses.iter().enumerate() {
            for lit in clause.literals.iter() {
                let var = &mut variables[lit.id];
                if lit.sign {
                    var.pos_occ.push(index);
                } else {
                    var.neg_occ.push(index);
                }
                *var.live_mut(lit.sign) += 1;
            }
        }

        let unit_queue = clauses.iter()
            .enumerate()
            .filter(|(_, clause)| clause.is_unit())
            .map(|(index, _)| index)
            .collect();

        BranchState {
            unsatisfied: clauses.len(),
            empty: clauses.iter().filter(|clause| clause.is_empty()).count(),
            trail: Vec::with_capacity(formula.num_variables),
            clauses,
            variables,
            unit_queue,
        }
    }

    pub fn clauses(&self) -> &Clauses {
        &self.clauses
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Number of assignments currently on the trail
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// No unsatisfied clause is left.
    pub fn is_satisfied(&self) -> bool {
        self.unsatisfied == 0
    }

    /// Some clause has all of its literals falsified.
    pub fn has_empty_clause(&self) -> bool {
        self.empty > 0
    }

    /// Returns the literal a unit clause forces, or `None` if there is no unit clause.
    ///
    /// Clauses are served in the order they became unit; at the start that is
    /// the clause order of the formula.
    pub fn find_unit_clause(&mut self) -> Option<CNFVar> {
        while let Some(index) = self.unit_queue.pop_front() {
            let clause = &self.clauses[index];
            if !clause.is_unit() {
                continue;
            }
            let variables = &self.variables;
            if let Some(lit) = clause.literals.iter().find(|lit| variables[lit.id].is_free()) {
                return Some(*lit);
            }
        }
        None
    }

    /// Returns a pure literal of the unsatisfied clauses, the one with the
    /// lowest variable id first.
    pub fn find_pure_literal(&self) -> Option<CNFVar> {
        self.variables.iter()
            .find_map(|(id, var)| var.pure_literal(id))
    }

    /// Makes `literal` true: clauses containing it are satisfied and its
    /// negation is removed from the others.
    ///
    /// Fails if a clause loses its last literal, or if the variable is
    /// already assigned the opposite value. The assignment stays on the
    /// trail in the first case so that [`BranchState::backtrack_to`] undoes it.
    pub fn simplify(&mut self, literal: CNFVar) -> Result<(), Conflict> {
        match self.variables[literal.id].value {
            Some(value) if value == literal.sign => return Ok(()),
            Some(_) => return Err(Conflict),
            None => (),
        }

        self.variables[literal.id].value = Some(literal.sign);
        self.trail.push(literal.id);

        for i in 0..self.variables[literal.id].occurrences(literal.sign).len() {
            let index = self.variables[literal.id].occurrences(literal.sign)[i];
            let clause = &mut self.clauses[index];
            clause.free -= 1;
            if clause.satisfied_by.is_none() {
                clause.satisfied_by = Some(literal.id);
                self.unsatisfied -= 1;
                for lit in self.clauses[index].literals.iter() {
                    *self.variables[lit.id].live_mut(lit.sign) -= 1;
                }
            }
        }

        let mut conflict = false;
        for i in 0..self.variables[literal.id].occurrences(!literal.sign).len() {
            let index = self.variables[literal.id].occurrences(!literal.sign)[i];
            let clause = &mut self.clauses[index];
            clause.free -= 1;
            if clause.satisfied_by.is_none() {
                match clause.free {
                    0 => {
                        self.empty += 1;
                        conflict = true;
                    }
                    1 => self.unit_queue.push_back(index),
                    _ => (),
                }
            }
        }

        if conflict { Err(Conflict) } else { Ok(()) }
    }

    /// Undoes assignments until only `mark` of them remain on the trail.
    pub fn backtrack_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some(id) = self.trail.pop() {
                self.unassign(id);
            }
        }
        self.unit_queue.clear();
    }

    /// Reverts the updates of `simplify`, in reverse order.
    fn unassign(&mut self, id: VariableId) {
        let sign = match self.variables[id].value.take() {
            Some(sign) => sign,
            None => return,
        };

        for i in 0..self.variables[id].occurrences(!sign).len() {
            let index = self.variables[id].occurrences(!sign)[i];
            let clause = &mut self.clauses[index];
            if clause.is_empty() {
                self.empty -= 1;
            }
            clause.free += 1;
        }

        for i in 0..self.variables[id].occurrences(sign).len() {
            let index = self.variables[id].occurrences(sign)[i];
            let clause = &mut self.clauses[index];
            clause.free += 1;
            if clause.satisfied_by == Some(id) {
                clause.satisfied_by = None;
                self.unsatisfied += 1;
                for lit in self.clauses[index].literals.iter() {
                    *self.variables[lit.id].live_mut(lit.sign) += 1;
                }
            }
        }
    }

    /// Total valuation; unassigned variables default to `false`.
    pub fn valuation(&self) -> Valuation {
        self.variables.iter()
            .map(|(_, var)| var.value.unwrap_or(false))
            .collect()
    }
}
