//! Fixed-point error types

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FixedPointError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow in {op}: result of {lhs} and {rhs} exceeds i32 raw range")]
    Overflow {
        op: &'static str,
        lhs: i64,
        rhs: i64,
    },

    #[error("Cannot convert non-finite value {value} to fixed-point")]
    NotFinite { value: f32 },
}

pub type Result<T> = std::result::Result<T, FixedPointError>;

/// Build an `Overflow` error, tracing the operands that caused it
pub(crate) fn overflow(op: &'static str, lhs: i64, rhs: i64) -> FixedPointError {
    tracing::trace!(op, lhs, rhs, "fixed-point overflow");
    FixedPointError::Overflow { op, lhs, rhs }
}
