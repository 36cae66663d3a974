use std::fmt;

/// Diagnostic counters reported next to a verdict.
///
/// Each solver fills in the counters that make sense for it; the rest stay zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Branching assignments (both phases count)
    pub decisions: u64,
    /// Assignments forced by unit clauses
    pub propagations: u64,
    /// Assignments made by pure literal elimination
    pub pure_literals: u64,
    /// Branches abandoned because a clause became empty
    pub conflicts: u64,
    /// Deepest decision level reached
    pub max_depth: u64,
    /// Restarts of local search, the first try included
    pub tries: u64,
    /// Single variable flips of local search
    pub flips: u64,
}

impl fmt::Display for Statistics {
    /// Prints the counters as DIMACS comment lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "c decisions: {}", self.decisions)?;
        writeln!(f, "c propagations: {}", self.propagations)?;
        writeln!(f, "c pure literals: {}", self.pure_literals)?;
        writeln!(f, "c conflicts: {}", self.conflicts)?;
        writeln!(f, "c max depth: {}", self.max_depth)?;
        writeln!(f, "c tries: {}", self.tries)?;
        write!(f, "c flips: {}", self.flips)
    }
}
