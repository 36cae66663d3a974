use rand::{seq::index, Rng};

use crate::{CNFClause, CNFVar, Valuation, CNF};

/// Uniform random `k`-CNF: every clause takes `k` distinct variables with
/// random signs. Clauses are shorter when there are fewer than `k` variables.
pub fn random_ksat<R: Rng + ?Sized>(num_variables: usize, num_clauses: usize, k: usize, rng: &mut R) -> CNF {
    let clauses = (0..num_clauses)
        .map(|_| random_clause(num_variables, k, rng))
        .collect();
    CNF { clauses, num_variables }
}

/// Random `k`-CNF satisfied by a hidden random valuation, which is returned
/// alongside. Clauses falsified by the hidden valuation are redrawn.
/// Without variables, or with `k == 0`, the formula has no clauses.
pub fn planted_ksat<R: Rng + ?Sized>(num_variables: usize, num_clauses: usize, k: usize, rng: &mut R) -> (CNF, Valuation) {
    let hidden: Valuation = (0..num_variables).map(|_| rng.gen()).collect();
    let mut formula = CNF::empty(num_variables);
    if num_variables == 0 || k == 0 {
        return (formula, hidden);
    }

    while formula.len() < num_clauses {
        let clause = random_clause(num_variables, k, rng);
        if clause.is_satisfied_by(&hidden) {
            formula.push(clause);
        }
    }
    (formula, hidden)
}

fn random_clause<R: Rng + ?Sized>(num_variables: usize, k: usize, rng: &mut R) -> CNFClause {
    index::sample(rng, num_variables, k.min(num_variables))
        .into_iter()
        .map(|index| CNFVar::new(index + 1, rng.gen()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_valuation;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_formula_has_the_requested_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let formula = random_ksat(10, 40, 3, &mut rng);
        assert_eq!(formula.len(), 40);
        assert!(formula.validate().is_ok());
        for clause in formula.clauses.iter() {
            assert_eq!(clause.len(), 3);
            assert_eq!(clause.distinct().len(), 3);
            assert!(!clause.is_tautology());
        }
    }

    #[test]
    fn planted_formula_is_satisfied_by_hidden_valuation() {
        let mut rng = StdRng::seed_from_u64(2);
        let (formula, hidden) = planted_ksat(20, 90, 3, &mut rng);
        assert_eq!(formula.len(), 90);
        assert!(check_valuation(&formula, &hidden));
    }

    #[test]
    fn generation_is_reproducible() {
        let a = random_ksat(8, 20, 3, &mut StdRng::seed_from_u64(5));
        let b = random_ksat(8, 20, 3, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
