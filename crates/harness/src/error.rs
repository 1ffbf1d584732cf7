//! Harness error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Fixed-point error: {0}")]
    FixedPoint(#[from] q7_fixed_point::FixedPointError),

    #[error("Invalid config: {var}={value:?} is not a valid integer")]
    InvalidConfig { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
