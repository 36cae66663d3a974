use std::fmt::Write as FmtWrite;

use crate::Statistics;

/// Total assignment; index `i` holds the value of variable `i + 1`.
pub type Valuation = Vec<bool>;

const MAX_LITERALS_PER_LINE: usize = 8;

/// Verdict of a solver.
///
/// `Unknown` means the solver gave up (search budget or deadline) and says
/// nothing about satisfiability; it is never a proof like `Unsatisfiable`.
#[derive(Clone, PartialEq, Eq)]
pub enum SATSolution {
    Satisfiable(Valuation),
    Unsatisfiable,
    Unknown,
}

/// Verdict together with the counters collected while reaching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub solution: SATSolution,
    pub statistics: Statistics,
}

impl std::iter::FromIterator<bool> for SATSolution {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        SATSolution::Satisfiable(iter.into_iter().collect())
    }
}

impl SATSolution {
    pub fn is_sat(&self) -> bool {
        matches!(self, SATSolution::Satisfiable(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SATSolution::Unsatisfiable)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SATSolution::Unknown)
    }

    /// The satisfying valuation, if there is one.
    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            SATSolution::Satisfiable(valuation) => Some(valuation),
            _ => None,
        }
    }

    pub fn to_dimacs(&self) -> String {
        match self {
            SATSolution::Unsatisfiable => "s UNSATISFIABLE\n".to_string(),
            SATSolution::Unknown => "s UNKNOWN\n".to_string(),
            SATSolution::Satisfiable(variables) => {
                let mut out = String::from("s SATISFIABLE\n");
                for (chunk, values) in variables.chunks(MAX_LITERALS_PER_LINE).enumerate() {
                    out.push('v');
                    for (offset, value) in values.iter().enumerate() {
                        let id = chunk * MAX_LITERALS_PER_LINE + offset + 1;
                        // infallible for String
                        let _ = write!(&mut out, " {}{}", if *value { "" } else { "-" }, id);
                    }
                    out.push_str(" 0\n");
                }
                out
            }
        }
    }
}

impl std::fmt::Debug for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Display for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SATSolution::Unsatisfiable => write!(f, "Unsatisfiable"),
            SATSolution::Unknown => write!(f, "Unknown"),
            SATSolution::Satisfiable(variables) => {
                writeln!(f, "Satisfiable:")?;
                for (chunk, values) in variables.chunks(MAX_LITERALS_PER_LINE).enumerate() {
                    for (offset, value) in values.iter().enumerate() {
                        let id = chunk * MAX_LITERALS_PER_LINE + offset + 1;
                        write!(f, "{}{} ", if *value { " " } else { "-" }, id)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs_output_wraps_long_valuations() {
        let solution: SATSolution = (0..10).map(|i| i % 3 == 0).collect();
        assert_eq!(
            solution.to_dimacs(),
            "s SATISFIABLE\nv 1 -2 -3 4 -5 -6 7 -8 0\nv -9 10 0\n"
        );
    }

    #[test]
    fn unknown_is_not_unsatisfiable() {
        assert!(SATSolution::Unknown.is_unknown());
        assert!(!SATSolution::Unknown.is_unsat());
        assert_eq!(SATSolution::Unknown.to_dimacs(), "s UNKNOWN\n");
        assert_eq!(SATSolution::Unsatisfiable.to_dimacs(), "s UNSATISFIABLE\n");
    }
}
