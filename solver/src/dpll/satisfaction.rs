use log::{debug, trace, warn};

use crate::{CNF, CNFVar, Conflict, Outcome, SATSolution, Solver, Statistics};
use crate::solvers::Deadline;
use super::{
    branch_state::BranchState,
    branching_strategies::BranchingStrategy,
    variable::VariableId,
};

/// Complete backtracking solver: unit propagation and pure literal
/// elimination to a fixpoint, then a case split on the variable picked by
/// the branching strategy, `true` before `false`.
#[derive(Clone, Debug, Default)]
pub struct SatisfactionSolver<B> {
    branching_strategy: B,
}

impl<B: BranchingStrategy + Clone> SatisfactionSolver<B> {
    pub fn new(branching_strategy: B) -> SatisfactionSolver<B> {
        SatisfactionSolver { branching_strategy }
    }
}

impl<B: BranchingStrategy + Clone> Solver for SatisfactionSolver<B> {
    fn solve_until(&self, formula: &CNF, deadline: Deadline) -> Outcome {
        let mut execution = ExecutionState::new(formula, self.branching_strategy.clone(), deadline);
        let solution = execution.dpll();

        debug!(
            "dpll finished with {} after {} decisions and {} conflicts",
            solution, execution.statistics.decisions, execution.statistics.conflicts
        );

        Outcome { solution, statistics: execution.statistics }
    }
}

/// One decision level: the variable split on, the trail length before the
/// split and the phase currently explored.
#[derive(Debug, Clone, Copy)]
struct Frame {
    variable: VariableId,
    mark: usize,
    phase: bool,
}

struct ExecutionState<B> {
    state: BranchState,
    branching_strategy: B,
    frames: Vec<Frame>,
    statistics: Statistics,
    deadline: Deadline,
}

impl<B: BranchingStrategy> ExecutionState<B> {
    fn new(formula: &CNF, branching_strategy: B, deadline: Deadline) -> ExecutionState<B> {
        ExecutionState {
            state: BranchState::new(formula),
            branching_strategy,
            frames: Vec::new(),
            statistics: Statistics::default(),
            deadline,
        }
    }

    fn dpll(&mut self) -> SATSolution {
        loop {
            if self.propagate().is_ok() && !self.state.has_empty_clause() {
                if self.state.is_satisfied() {
                    return SATSolution::Satisfiable(self.state.valuation());
                }
                if self.deadline.expired() {
                    return SATSolution::Unknown;
                }

                match self.branching_strategy.pick_branching_variable(self.state.clauses(), self.state.variables()) {
                    Some(variable) => {
                        let frame = Frame { variable, mark: self.state.trail_len(), phase: true };
                        self.frames.push(frame);
                        self.statistics.max_depth = self.statistics.max_depth.max(self.frames.len() as u64);
                        if self.decide(frame).is_ok() {
                            continue;
                        }
                    }
                    None => warn!("no variable left to branch on although clauses remain unsatisfied"),
                }
            }

            self.statistics.conflicts += 1;
            if !self.backtrack() {
                return SATSolution::Unsatisfiable;
            }
        }
    }

    /// Applies unit propagation and pure literal elimination until neither
    /// changes anything.
    fn propagate(&mut self) -> Result<(), Conflict> {
        loop {
            if let Some(literal) = self.state.find_unit_clause() {
                trace!("unit {}", literal);
                self.statistics.propagations += 1;
                self.state.simplify(literal)?;
            } else if let Some(literal) = self.state.find_pure_literal() {
                trace!("pure {}", literal);
                self.statistics.pure_literals += 1;
                self.state.simplify(literal)?;
            } else {
                return Ok(());
            }
        }
    }

    fn decide(&mut self, frame: Frame) -> Result<(), Conflict> {
        trace!("decide {} = {} at level {}", frame.variable, frame.phase, self.frames.len());
        self.statistics.decisions += 1;
        self.state.simplify(CNFVar::new(frame.variable, frame.phase))
    }

    /// Unwinds to the deepest decision whose `false` phase is still untried
    /// and takes it. Returns `false` when no such decision is left.
    fn backtrack(&mut self) -> bool {
        while let Some(frame) = self.frames.pop() {
            self.state.backtrack_to(frame.mark);
            if frame.phase {
                let frame = Frame { phase: false, ..frame };
                self.frames.push(frame);
                if self.decide(frame).is_ok() {
                    return true;
                }
                self.statistics.conflicts += 1;
            }
        }
        false
    }
}
