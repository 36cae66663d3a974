use thiserror::Error;

/// Reasons a formula could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed DIMACS input: {0}")]
    Dimacs(String),
    #[error("only CNF formulae are supported")]
    NotCnf,
    #[error("0 terminates a clause and cannot be used as a literal")]
    ZeroLiteral,
    #[error("literal {literal} refers to a variable outside of 1..={num_variables}")]
    LiteralOutOfRange { literal: i32, num_variables: usize },
}
