extern crate solver;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use solver::{
    generator::planted_ksat, IndexOrderBranching, JeroslawWang, LocalSearchSolver, NaiveBranching,
    SatisfactionSolver, Solver, CNF,
};

const NUM_FORMULAE: u64 = 5;

/// Planted 3-SAT near the hard ratio of clauses to variables.
fn load_formulae(num_variables: usize) -> Vec<CNF> {
    let num_clauses = num_variables * 42 / 10;
    (0..NUM_FORMULAE)
        .map(|seed| planted_ksat(num_variables, num_clauses, 3, &mut StdRng::seed_from_u64(seed)).0)
        .collect()
}

fn create_group_for_solver(c: &mut Criterion, name: &str, solver: impl Solver, sizes: &[usize]) {
    let mut group = c.benchmark_group(name);

    for &num_variables in sizes {
        let formulae = load_formulae(num_variables);
        group.bench_with_input(BenchmarkId::from_parameter(num_variables), &formulae, |b, formulae| {
            b.iter(|| {
                for formula in formulae {
                    black_box(solver.solve(formula));
                }
            })
        });
    }

    group.finish()
}

fn criterion_benchmark(c: &mut Criterion) {
    let sizes = [20, 40, 60];

    // Append branching strategy
    create_group_for_solver(c, "Naive Branching", SatisfactionSolver::new(NaiveBranching), &sizes);
    create_group_for_solver(c, "Index Order", SatisfactionSolver::new(IndexOrderBranching), &sizes);
    create_group_for_solver(c, "Jeroslaw-Wang", SatisfactionSolver::new(JeroslawWang::default()), &sizes);
    create_group_for_solver(c, "GSAT", LocalSearchSolver::gsat(), &sizes);
    create_group_for_solver(c, "WalkSAT", LocalSearchSolver::walksat().with_params(solver::LocalSearchParams {
        max_tries: 10,
        max_flips: 10_000,
        p_random: 0.5,
    }), &sizes);
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = criterion_benchmark
}
criterion_main!(benches);
