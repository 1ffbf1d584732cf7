//! Demo configuration

use crate::error::{HarnessError, Result};

/// Walkthrough configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Whole number the accumulator starts from
    pub start: i32,

    /// Numerator of the step operand
    pub numerator: i32,

    /// Denominator of the step operand
    pub denominator: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: 1,
            numerator: 3,
            denominator: 9,
        }
    }
}

impl DemoConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(start) = parse_var(&lookup, "Q7_DEMO_START")? {
            config.start = start;
        }

        if let Some(num) = parse_var(&lookup, "Q7_DEMO_NUMERATOR")? {
            config.numerator = num;
        }

        if let Some(den) = parse_var(&lookup, "Q7_DEMO_DENOMINATOR")? {
            config.denominator = den;
        }

        Ok(config)
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<i32>> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| HarnessError::InvalidConfig { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!((config.start, config.numerator, config.denominator), (1, 3, 9));
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("Q7_DEMO_START", "5"),
            ("Q7_DEMO_DENOMINATOR", " -4 "),
        ]))
        .unwrap();
        assert_eq!(config.start, 5);
        assert_eq!(config.numerator, 3);
        assert_eq!(config.denominator, -4);
    }

    #[test]
    fn test_invalid_value() {
        let err = DemoConfig::from_lookup(lookup_from(&[("Q7_DEMO_NUMERATOR", "three")]))
            .unwrap_err();
        assert!(matches!(
            err,
            HarnessError::InvalidConfig { var: "Q7_DEMO_NUMERATOR", .. }
        ));
    }
}
