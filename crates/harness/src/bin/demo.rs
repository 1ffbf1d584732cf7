//! Q7 fixed-point walkthrough demo
//!
//! Run with: cargo run -p q7-harness --bin demo
//!
//! Prints the raw and f32 bit patterns of the accumulator after each step.
//! Operands are read from Q7_DEMO_START, Q7_DEMO_NUMERATOR and
//! Q7_DEMO_DENOMINATOR.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use q7_harness::{bits, run_walkthrough, DemoConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "q7_harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from_env()?;
    tracing::info!("Q7 demo v{}", env!("CARGO_PKG_VERSION"));

    println!("=== Q7 Fixed-Point Demo ===\n");

    for step in run_walkthrough(&config)? {
        println!("--- {} ---", step.label);
        println!("{}", bits::describe_raw(step.value.raw()));
        println!("{}", bits::describe_float(step.value.to_f32()));
    }

    Ok(())
}
