use std::ops::{Index, IndexMut};
use crate::CNFVar;
use super::clause::ClauseId;

/// Same numbering as [`CNFVar::id`], starting from 1.
pub type VariableId = usize;

#[derive(Debug, Clone, Default)]
pub struct Variable {
    pub value: Option<bool>,
    pub pos_occ: Vec<ClauseId>,
    pub neg_occ: Vec<ClauseId>,
    /// Unsatisfied clauses containing the positive literal
    pub pos_live: usize,
    /// Unsatisfied clauses containing the negative literal
    pub neg_live: usize,
}

impl Variable {
    pub fn is_free(&self) -> bool {
        self.value.is_none()
    }

    /// Clauses in which the variable occurs with polarity `sign`
    pub fn occurrences(&self, sign: bool) -> &[ClauseId] {
        if sign { &self.pos_occ } else { &self.neg_occ }
    }

    pub fn live_mut(&mut self, sign: bool) -> &mut usize {
        if sign { &mut self.pos_live } else { &mut self.neg_live }
    }

    /// Occurs in at least one unsatisfied clause
    pub fn is_live(&self) -> bool {
        self.pos_live + self.neg_live > 0
    }

    /// The literal of this unassigned variable whose negation is absent
    /// from every unsatisfied clause.
    pub fn pure_literal(&self, id: VariableId) -> Option<CNFVar> {
        if self.value.is_some() {
            return None;
        }
        match (self.pos_live > 0, self.neg_live > 0) {
            (true, false) => Some(CNFVar::pos(id)),
            (false, true) => Some(CNFVar::neg(id)),
            _ => None,
        }
    }
}

/// Variables `1..=n`, indexed by their identifier.
#[derive(Debug, Clone)]
pub struct Variables(Vec<Variable>);

impl Variables {
    pub fn new(num_variables: usize) -> Variables {
        Variables(vec![Variable::default(); num_variables])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.0.iter()
            .enumerate()
            .map(|(index, var)| (index + 1, var))
    }
}

impl Index<VariableId> for Variables {
    type Output = Variable;
    fn index(&self, id: VariableId) -> &Self::Output {
        &self.0[id - 1]
    }
}

impl IndexMut<VariableId> for Variables {
    fn index_mut(&mut self, id: VariableId) -> &mut Self::Output {
        &mut self.0[id - 1]
    }
}
