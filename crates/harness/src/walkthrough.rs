//! Scripted accumulate/multiply/subtract walkthrough

use q7_fixed_point::Fixed7;

use crate::config::DemoConfig;
use crate::error::Result;

/// Accumulator state after one walkthrough operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub value: Fixed7,
}

/// Run the walkthrough: start from a whole number, then add, multiply by and
/// subtract the quotient `numerator / denominator`, recording each state
pub fn run_walkthrough(config: &DemoConfig) -> Result<Vec<Step>> {
    tracing::info!(
        start = config.start,
        numerator = config.numerator,
        denominator = config.denominator,
        "Running fixed-point walkthrough"
    );

    let mut acc = Fixed7::from_whole(config.start)?;
    let numerator = Fixed7::from_whole(config.numerator)?;
    let operand = numerator.div(Fixed7::from_whole(config.denominator)?)?;
    tracing::debug!(raw = operand.raw(), value = %operand, "step operand");

    let mut steps = Vec::with_capacity(4);
    steps.push(record("start", acc));

    acc.add_assign(operand)?;
    steps.push(record("add", acc));

    acc.mul_assign(operand)?;
    steps.push(record("mul", acc));

    acc.sub_assign(operand)?;
    steps.push(record("sub", acc));

    Ok(steps)
}

fn record(label: &'static str, value: Fixed7) -> Step {
    tracing::debug!(label, raw = value.raw(), value = %value, "walkthrough step");
    Step { label, value }
}
