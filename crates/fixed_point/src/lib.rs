//! Q7 Fixed-Point Numbers
//!
//! Signed fixed-point values stored as i32 with a compile-time scaling
//! factor of 2^7, plus an exact bit-level transcoding to IEEE-754 f32.

mod error;
mod fixed;
pub mod ieee;

pub use error::{FixedPointError, Result};
pub use fixed::{Fixed7, FRACTIONAL_BITS, SCALE};
