//! Condensation configuration.

use super::CondenseError;
use serde::Deserialize;

/// Default minimum utilization ratio for a condensed subnet.
///
/// Two addresses in a /30 is 50% utilization, two in a /29 is 25%; anything
/// below the floor stays un-condensed.
pub const DEFAULT_MIN_UTILIZATION: f64 = 0.25;

/// Environment variable consulted by [`CondenseConfig::from_env`].
pub const MIN_UTILIZATION_ENV: &str = "MIN_UTILIZATION";

/// Settings for a condensation run.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CondenseConfig {
    /// Minimum fraction of a resulting subnet's capacity that must be
    /// occupied by input addresses, in (0, 1].
    pub min_utilization: f64,
}

impl Default for CondenseConfig {
    fn default() -> Self {
        CondenseConfig {
            min_utilization: DEFAULT_MIN_UTILIZATION,
        }
    }
}

impl CondenseConfig {
    /// Create a config, rejecting ratios outside (0, 1].
    pub fn new(min_utilization: f64) -> Result<Self, CondenseError> {
        if !(min_utilization > 0.0 && min_utilization <= 1.0) {
            return Err(CondenseError::InvalidUtilization {
                value: min_utilization.to_string(),
            });
        }
        Ok(CondenseConfig { min_utilization })
    }

    /// Read the ratio from the `MIN_UTILIZATION` environment variable,
    /// falling back to the default when it is unset.
    pub fn from_env() -> Result<Self, CondenseError> {
        match std::env::var(MIN_UTILIZATION_ENV) {
            Ok(raw) => Self::parse_ratio(&raw),
            Err(_) => Ok(CondenseConfig::default()),
        }
    }

    /// Parse a textual ratio such as "0.25".
    pub fn parse_ratio(raw: &str) -> Result<Self, CondenseError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| CondenseError::InvalidUtilization {
                value: raw.trim().to_string(),
            })?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratio() {
        let config = CondenseConfig::default();
        assert_eq!(config.min_utilization, 0.25);
    }

    #[test]
    fn test_new_accepts_valid_ratios() {
        assert_eq!(CondenseConfig::new(0.25).unwrap().min_utilization, 0.25);
        assert_eq!(CondenseConfig::new(1.0).unwrap().min_utilization, 1.0);
        assert_eq!(CondenseConfig::new(0.001).unwrap().min_utilization, 0.001);
    }

    #[test]
    fn test_new_rejects_degenerate_ratios() {
        assert!(CondenseConfig::new(0.0).is_err());
        assert!(CondenseConfig::new(-0.25).is_err());
        assert!(CondenseConfig::new(1.5).is_err());
        assert!(CondenseConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(
            CondenseConfig::parse_ratio("0.5").unwrap().min_utilization,
            0.5
        );
        assert_eq!(
            CondenseConfig::parse_ratio(" 0.25 ").unwrap().min_utilization,
            0.25
        );
        assert!(CondenseConfig::parse_ratio("25%").is_err());
        assert!(CondenseConfig::parse_ratio("").is_err());
        assert!(CondenseConfig::parse_ratio("2.0").is_err());
    }
}
