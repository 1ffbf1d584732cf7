//! Q7 Harness
//!
//! External caller for the fixed-point type: bit-pattern dumps, demo
//! configuration, and the scripted accumulate/multiply/subtract walkthrough.

pub mod bits;
mod config;
mod error;
mod walkthrough;

pub use config::DemoConfig;
pub use error::{HarnessError, Result};
pub use walkthrough::{run_walkthrough, Step};
