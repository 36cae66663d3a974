use proptest::{
    prelude::*,
    collection::vec,
    bool::weighted,
};
use solver::{
    check_valuation, Bruteforce, CNF, CNFClause, CNFVar, IndexOrderBranching, JeroslawWang,
    NaiveBranching, SATSolution, SatisfactionSolver, Solver,
};

const MAX_NUM_VARIABLES: usize = 6;
const MAX_NUM_LITERALS: usize = 4;
const MAX_NUM_CLAUSES: usize = 20;

fn testing_solvers() -> Vec<(&'static str, Box<dyn Solver>)> {
    vec![
        ("naive", Box::new(SatisfactionSolver::new(NaiveBranching)) as Box<dyn Solver>),
        ("index", Box::new(SatisfactionSolver::new(IndexOrderBranching)) as Box<dyn Solver>),
        ("Jeroslaw-Wang", Box::new(SatisfactionSolver::new(JeroslawWang::default())) as Box<dyn Solver>),
    ]
}

fn build_formula(num_variables: usize, clauses: &[Vec<(usize, bool)>]) -> CNF {
    CNF {
        clauses: clauses.iter()
            .map(|clause| clause.iter()
                .map(|&(variable, sign)| CNFVar::new(variable, sign))
                .collect())
            .collect(),
        num_variables,
    }
}

fn arbitrary_formula() -> impl Strategy<Value = CNF> {
    (1..=MAX_NUM_VARIABLES).prop_flat_map(|num_variables| {
        vec(vec((1..=num_variables, weighted(0.5)), 0..=MAX_NUM_LITERALS), 0..=MAX_NUM_CLAUSES)
            .prop_map(move |clauses| build_formula(num_variables, &clauses))
    })
}

/// Agrees with brute force on the verdict and returns only real models.
fn check_against_reference(formula: &CNF) -> Result<(), TestCaseError> {
    let reference = Bruteforce::Bruteforce.solve(formula);

    for (name, solver) in testing_solvers() {
        let solution = solver.solve(formula);
        prop_assert_eq!(solution.is_sat(), reference.is_sat(), "{} disagrees on {}", name, formula);
        prop_assert!(!solution.is_unknown());
        if let SATSolution::Satisfiable(valuation) = &solution {
            prop_assert_eq!(valuation.len(), formula.num_variables);
            prop_assert!(check_valuation(formula, valuation), "{} returned a non-model of {}", name, formula);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn only_positive_unit_clauses(num_variables in 1..=MAX_NUM_VARIABLES) {
        let formula = (1..=num_variables)
            .map(|variable| CNFClause::single(CNFVar::pos(variable)))
            .collect();

        for (_, solver) in testing_solvers() {
            prop_assert_eq!(solver.solve(&formula), SATSolution::Satisfiable(vec![true; num_variables]));
        }
    }

    #[test]
    fn only_negative_unit_clauses(num_variables in 1..=MAX_NUM_VARIABLES) {
        let formula = (1..=num_variables)
            .map(|variable| CNFClause::single(CNFVar::neg(variable)))
            .collect();

        for (_, solver) in testing_solvers() {
            prop_assert_eq!(solver.solve(&formula), SATSolution::Satisfiable(vec![false; num_variables]));
        }
    }

    #[test]
    fn only_unit_clauses(signs in vec(weighted(0.5), 1..=MAX_NUM_VARIABLES)) {
        let formula = signs.iter()
            .enumerate()
            .map(|(variable, sign)| CNFClause::single(CNFVar::new(variable + 1, *sign)))
            .collect();

        for (_, solver) in testing_solvers() {
            prop_assert_eq!(solver.solve(&formula), SATSolution::Satisfiable(signs.clone()));
        }
    }

    #[test]
    fn arbitrary_cnf_formula(formula in arbitrary_formula()) {
        check_against_reference(&formula)?;
    }

    #[test]
    fn simplifying_first_preserves_satisfiability(formula in arbitrary_formula(), sign in weighted(0.5)) {
        let literal = CNFVar::new(1, sign);
        let with_unit = CNF {
            clauses: formula.clauses.iter()
                .cloned()
                .chain(std::iter::once(CNFClause::single(literal)))
                .collect(),
            num_variables: formula.num_variables,
        };
        let expected = Bruteforce::Bruteforce.solve(&with_unit).is_sat();

        match formula.simplify(literal) {
            Ok(simplified) => {
                let solution = SatisfactionSolver::new(JeroslawWang::default()).solve(&simplified);
                prop_assert_eq!(solution.is_sat(), expected);
                // variable 1 no longer occurs, so the literal extends any model
                if let SATSolution::Satisfiable(mut valuation) = solution {
                    valuation[0] = sign;
                    prop_assert!(check_valuation(&formula, &valuation));
                }
            }
            Err(_) => prop_assert!(!expected),
        }
    }

    #[test]
    fn simplifying_twice_is_simplifying_once(formula in arbitrary_formula(), sign in weighted(0.5)) {
        let literal = CNFVar::new(1, sign);
        if let Ok(once) = formula.simplify(literal) {
            prop_assert_eq!(once.simplify(literal), Ok(once.clone()));
        }
    }
}

#[test]
fn statistics_are_populated() {
    let formula = CNF::from_literals(4, vec![
        vec![1, 2, 3], vec![-1, -2], vec![-1, -3], vec![-2, -3],
        vec![1, 4], vec![-4, 2], vec![-2, -4, 3],
    ]).unwrap();

    for (name, solver) in testing_solvers() {
        let outcome = solver.solve_until(&formula, solver::solvers::Deadline::never());
        assert!(outcome.solution.is_sat(), "{}", name);
        let statistics = outcome.statistics;
        assert!(statistics.decisions + statistics.propagations + statistics.pure_literals > 0, "{}", name);
        assert_eq!(statistics.flips, 0);
    }
}
