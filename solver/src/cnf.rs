use std::fmt;
use std::iter::FromIterator;
use itertools::Itertools;

use dimacs::parse_dimacs;
use crate::error::ParseError;
use crate::Valuation;

/// Type used for referencing logical variables
pub type VarId = usize;

/// Representation of logical formulae in CNF form
/// (conjunction of clauses)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses: Vec<CNFClause>,
    /// Declared number of variables. Every literal refers to a variable in `1..=num_variables`.
    pub num_variables: usize,
}

/// Representation of a clause (disjunction of literals)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CNFClause {
    /// Vector of inner literals, in the order they were written
    pub vars: Vec<CNFVar>,
}

/// Literal, i.e. a possibly negated logical variable
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct CNFVar {
    /// Identifier of a variable, starting from 1
    pub id: VarId,
    /// Variable is negated iff `sign == false`
    pub sign: bool,
}

/// Marker returned when simplifying by a literal empties a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict;

impl CNF {
    /// Creates an empty CNF formula over `num_variables` variables
    pub fn empty(num_variables: usize) -> CNF {
        CNF { clauses: Vec::new(), num_variables }
    }

    /// Builds a formula out of clauses written as signed integers.
    pub fn from_literals<C, L>(num_variables: usize, clauses: C) -> Result<CNF, ParseError>
    where
        C: IntoIterator<Item = L>,
        L: IntoIterator<Item = i32>,
    {
        let clauses = clauses
            .into_iter()
            .map(|clause| {
                clause
                    .into_iter()
                    .map(CNFVar::from_dimacs)
                    .collect::<Result<CNFClause, ParseError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let formula = CNF { clauses, num_variables };
        formula.validate()?;
        Ok(formula)
    }

    /// Inserts a new clause into the formula
    pub fn push(&mut self, c: CNFClause) {
        self.clauses.push(c)
    }

    /// Returns number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Checks that every literal refers to a declared variable.
    pub fn validate(&self) -> Result<(), ParseError> {
        match self.clauses.iter()
            .flat_map(|clause| clause.vars.iter())
            .find(|lit| lit.id == 0 || lit.id > self.num_variables)
        {
            Some(lit) => Err(ParseError::LiteralOutOfRange {
                literal: lit.to_i32(),
                num_variables: self.num_variables,
            }),
            None => Ok(()),
        }
    }

    /// Removes clauses satisfied by `literal` and the negation of `literal`
    /// from all other clauses.
    pub fn simplify(&self, literal: CNFVar) -> Result<CNF, Conflict> {
        let negated = -literal;
        let mut clauses = Vec::with_capacity(self.clauses.len());

        for clause in &self.clauses {
            if clause.vars.contains(&literal) {
                continue;
            }
            if clause.vars.contains(&negated) {
                let reduced: CNFClause = clause.vars.iter()
                    .copied()
                    .filter(|lit| *lit != negated)
                    .collect();
                if reduced.is_empty() {
                    return Err(Conflict);
                }
                clauses.push(reduced);
            } else {
                clauses.push(clause.clone());
            }
        }

        Ok(CNF { clauses, num_variables: self.num_variables })
    }

    /// Checks whether every clause has a literal made true by `valuation`.
    pub fn is_satisfied_by(&self, valuation: &Valuation) -> bool {
        self.clauses.iter().all(|clause| clause.is_satisfied_by(valuation))
    }

    /// Prints formula in DIMACS compatible form
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.num_variables, self.clauses.len());

        for clause in &self.clauses {
            for var in &clause.vars {
                out.push_str(&var.to_i32().to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }

    /// Parse DIMACS string into CNF structure
    pub fn from_dimacs(input: &str) -> Result<CNF, ParseError> {
        let formula = match parse_dimacs(input) {
            Ok(dimacs::Instance::Cnf { num_vars, clauses }) => CNF {
                clauses: clauses.iter()
                    .map(|clause| {
                        clause.lits().iter()
                            .map(|lit| CNFVar {
                                id: lit.var().to_u64() as VarId,
                                sign: lit.sign() == dimacs::Sign::Pos,
                            })
                            .collect()
                    })
                    .collect(),
                num_variables: num_vars as usize,
            },
            Ok(_) => return Err(ParseError::NotCnf),
            Err(err) => return Err(ParseError::Dimacs(format!("{:?}", err))),
        };

        formula.validate()?;
        Ok(formula)
    }
}

impl FromIterator<CNFClause> for CNF {
    /// Collects clauses; the variable count is the largest identifier seen.
    fn from_iter<I: IntoIterator<Item = CNFClause>>(iter: I) -> Self {
        let clauses: Vec<CNFClause> = iter.into_iter().collect();
        let num_variables = clauses.iter()
            .flat_map(|clause| clause.vars.iter().map(CNFVar::id))
            .max()
            .unwrap_or(0);
        CNF { clauses, num_variables }
    }
}

impl IntoIterator for CNF {
    type Item = CNFClause;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl CNFClause {
    /// Creates a CNF clause containing a single literal
    pub fn single(var: CNFVar) -> CNFClause {
        CNFClause { vars: vec![var] }
    }

    /// Adds a single literal into the clause
    pub fn push(&mut self, v: CNFVar) {
        self.vars.push(v)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Literals of the clause in written order with repetitions removed
    pub fn distinct(&self) -> Vec<CNFVar> {
        self.vars.iter().copied().unique().collect()
    }

    /// Checks whether the clause contains both a literal and its negation
    pub fn is_tautology(&self) -> bool {
        self.vars.iter().any(|lit| self.vars.contains(&-*lit))
    }

    pub fn is_satisfied_by(&self, valuation: &Valuation) -> bool {
        self.vars.iter().any(|lit| lit.is_satisfied_by(valuation))
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item = CNFVar>>(iter: I) -> Self {
        CNFClause { vars: iter.into_iter().collect() }
    }
}

impl IntoIterator for CNFClause {
    type Item = CNFVar;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl CNFVar {
    /// Creates a literal with given identifier and polarity
    pub fn new(id: VarId, sign: bool) -> CNFVar {
        CNFVar { id, sign }
    }

    /// Creates a positive literal with given identifier
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar { id, sign: true }
    }

    /// Creates a negative literal with given identifier
    pub fn neg(id: VarId) -> CNFVar {
        CNFVar { id, sign: false }
    }

    /// Reads a literal in the signed integer notation of DIMACS.
    pub fn from_dimacs(literal: i32) -> Result<CNFVar, ParseError> {
        if literal == 0 {
            return Err(ParseError::ZeroLiteral);
        }
        Ok(CNFVar { id: literal.unsigned_abs() as VarId, sign: literal > 0 })
    }

    /// Gets the identifier of a variable
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Checks if the literal is positive
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Checks whether the literal is true under `valuation`; a variable
    /// the valuation does not cover makes it false.
    pub fn is_satisfied_by(&self, valuation: &Valuation) -> bool {
        self.id.checked_sub(1)
            .and_then(|index| valuation.get(index))
            .map_or(false, |value| *value == self.sign)
    }

    /// Converts to signed integer. The absolute value indicates
    /// the identifier and sign states for positivity.
    ///
    /// **NOTE** it is not integer-overflow friendly.
    pub fn to_i32(&self) -> i32 {
        if self.sign {
            self.id as i32
        } else {
            -(self.id as i32)
        }
    }
}

impl std::ops::Neg for CNFVar {
    type Output = CNFVar;

    fn neg(self) -> Self::Output {
        CNFVar { id: self.id, sign: !self.sign }
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.vars.iter().join(" ∨ "))
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}
