// src/error.rs

use thiserror::Error;

/// Failures raised by rational and polynomial arithmetic.
///
/// Every variant is a precondition violation detected before any work is
/// done, so an operation either succeeds completely or returns one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("indeterminate form: {0}")]
    IndeterminateForm(&'static str),

    #[error("operation on the null polynomial")]
    NullOperand,

    #[error("degree of the zero polynomial is ambiguous")]
    AmbiguousDegree,

    #[error("eisenstein's criterion needs integer coefficients")]
    InvalidCoefficients,

    #[error("polynomial coefficients must be finite")]
    InfiniteCoefficient,

    #[error("zero has no prime factorization")]
    ZeroFactorization,

    #[error("cannot parse '{0}'")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
