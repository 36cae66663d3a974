/// The CNF representation of a formula
pub mod cnf;
/// Errors raised while reading formulae
pub mod error;
/// The Solver trait which has to be implemented by each solver
pub mod sat_solver;
/// Module that specifies the output of a solver
mod sat_solution;
mod statistics;
/// Complete backtracking search with unit propagation and pure literal elimination
pub mod dpll;
/// GSAT and WalkSAT
pub mod local_search;
pub mod bruteforce;
/// Random formulae for tests and benchmarks
pub mod generator;
/// Wrappers adding time limits and measurements to any solver.
pub mod solvers;

pub use cnf::{CNFClause, CNFVar, Conflict, VarId, CNF};
pub use error::ParseError;
pub use sat_solver::{check_valuation, Solver};
pub use sat_solution::{Outcome, SATSolution, Valuation};
pub use statistics::Statistics;
pub use bruteforce::Bruteforce;
pub use dpll::SatisfactionSolver;
pub use dpll::branching_strategies::{BranchingStrategy, IndexOrderBranching, JeroslawWang, NaiveBranching};
pub use local_search::{FlipPolicy, Gsat, LocalSearchParams, LocalSearchSolver, WalkSat};
