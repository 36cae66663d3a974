use rand::Rng;

use crate::{CNF, CNFVar, Valuation, VarId};

type ClauseId = usize;

/// Total assignment of local search together with the bookkeeping that
/// makes a flip cost only the occurrences of the flipped variable.
///
/// Tautologies are satisfied under every assignment and are left out.
#[derive(Debug, Clone)]
pub struct WalkState {
    values: Valuation,
    clauses: Vec<Vec<CNFVar>>,
    /// For every variable, the clauses it occurs in and with which sign
    occurrences: Vec<Vec<(ClauseId, bool)>>,
    /// Number of true literals per clause
    true_literals: Vec<usize>,
    unsatisfied: Vec<ClauseId>,
    /// Index of each clause in `unsatisfied`
    position: Vec<Option<usize>>,
    empty_clause: bool,
}

impl WalkState {
    /// Builds the state with every variable `false`.
    pub fn new(formula: &CNF) -> WalkState {
        let clauses: Vec<Vec<CNFVar>> = formula.clauses.iter()
            .filter(|clause| !clause.is_tautology())
            .map(|clause| clause.distinct())
            .collect();

        let mut occurrences = vec![Vec::new(); formula.num_variables];
        for (index, clause) in clauses.iter().enumerate() {
            for lit in clause {
                occurrences[lit.id - 1].push((index, lit.sign));
            }
        }

        let mut state = WalkState {
            values: vec![false; formula.num_variables],
            empty_clause: clauses.iter().any(Vec::is_empty),
            true_literals: vec![0; clauses.len()],
            position: vec![None; clauses.len()],
            unsatisfied: Vec::with_capacity(clauses.len()),
            occurrences,
            clauses,
        };
        state.recount();
        state
    }

    /// Replaces the assignment by a uniformly random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for value in self.values.iter_mut() {
            *value = rng.gen();
        }
        self.recount();
    }

    fn recount(&mut self) {
        self.unsatisfied.clear();
        for (index, clause) in self.clauses.iter().enumerate() {
            let values = &self.values;
            let count = clause.iter()
                .filter(|lit| values[lit.id - 1] == lit.sign)
                .count();
            self.true_literals[index] = count;
            self.position[index] = if count == 0 {
                self.unsatisfied.push(index);
                Some(self.unsatisfied.len() - 1)
            } else {
                None
            };
        }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn valuation(&self) -> Valuation {
        self.values.clone()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.empty_clause
    }

    pub fn is_satisfied(&self) -> bool {
        self.unsatisfied.is_empty()
    }

    /// Unsatisfied clauses, in no particular but reproducible order
    pub fn unsatisfied(&self) -> &[ClauseId] {
        &self.unsatisfied
    }

    pub fn clause(&self, index: ClauseId) -> &[CNFVar] {
        &self.clauses[index]
    }

    /// Clauses the flip of `variable` would satisfy.
    pub fn make_count(&self, variable: VarId) -> usize {
        let value = self.values[variable - 1];
        self.occurrences[variable - 1].iter()
            .filter(|(clause, sign)| *sign != value && self.true_literals[*clause] == 0)
            .count()
    }

    /// Clauses the flip of `variable` would break.
    pub fn break_count(&self, variable: VarId) -> usize {
        let value = self.values[variable - 1];
        self.occurrences[variable - 1].iter()
            .filter(|(clause, sign)| *sign == value && self.true_literals[*clause] == 1)
            .count()
    }

    /// Newly satisfied minus newly broken clauses if `variable` were flipped.
    pub fn gain(&self, variable: VarId) -> i64 {
        self.make_count(variable) as i64 - self.break_count(variable) as i64
    }

    pub fn flip(&mut self, variable: VarId) {
        let value = !self.values[variable - 1];
        self.values[variable - 1] = value;

        for i in 0..self.occurrences[variable - 1].len() {
            let (clause, sign) = self.occurrences[variable - 1][i];
            if sign == value {
                self.true_literals[clause] += 1;
                if self.true_literals[clause] == 1 {
                    self.remove_unsatisfied(clause);
                }
            } else {
                self.true_literals[clause] -= 1;
                if self.true_literals[clause] == 0 {
                    self.position[clause] = Some(self.unsatisfied.len());
                    self.unsatisfied.push(clause);
                }
            }
        }
    }

    fn remove_unsatisfied(&mut self, clause: ClauseId) {
        if let Some(pos) = self.position[clause].take() {
            self.unsatisfied.swap_remove(pos);
            if let Some(&moved) = self.unsatisfied.get(pos) {
                self.position[moved] = Some(pos);
            }
        }
    }
}
