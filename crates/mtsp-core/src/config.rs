use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// No configuration may push the exact solver past this many cities.
/// The memo holds `n * 2^(n-1)` slots of 9 bytes, roughly 1.8 GiB at 24.
pub const HARD_MAX_EXACT_CITIES: usize = 24;

pub const DEFAULT_MAX_EXACT_CITIES: usize = 20;

/// How the interior of the optimal tour is split between agents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartitionMode {
    /// Contiguous blocks of `floor((n-1)/m)`; the leftover cities go to the first agent.
    #[default]
    Contiguous,
    /// Contiguous blocks of `floor((n-1)/m)`; the leftover cities are dealt one per agent.
    RoundRobin,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub max_exact_cities: usize,
    pub partition_mode: PartitionMode,
    pub symmetry_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_exact_cities: DEFAULT_MAX_EXACT_CITIES,
            partition_mode: PartitionMode::Contiguous,
            symmetry_tolerance: 1e-9,
        }
    }
}

impl SolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("solver config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_exact_cities == 0 {
            return Err(Error::invalid_input("max_exact_cities must be at least 1"));
        }
        if !self.symmetry_tolerance.is_finite() || self.symmetry_tolerance < 0.0 {
            return Err(Error::invalid_input(
                "symmetry_tolerance must be a finite non-negative number",
            ));
        }
        Ok(())
    }

    pub fn scale_limit(&self) -> ScaleLimit {
        ScaleLimit::new(self.max_exact_cities)
    }
}

/// Upper bound on the city count accepted by the exact solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleLimit {
    max_cities: usize,
}

impl ScaleLimit {
    pub fn new(max_cities: usize) -> Self {
        Self {
            max_cities: max_cities.min(HARD_MAX_EXACT_CITIES),
        }
    }

    pub fn max_cities(&self) -> usize {
        self.max_cities
    }

    pub fn check(&self, cities: usize) -> Result<()> {
        if cities > self.max_cities {
            log::debug!(
                "rejecting {cities} cities: exact limit is {}",
                self.max_cities
            );
            return Err(Error::ScaleLimitExceeded {
                cities,
                limit: self.max_cities,
            });
        }
        Ok(())
    }
}

impl Default for ScaleLimit {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXACT_CITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = SolverConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn parses_partition_mode() {
        let config =
            SolverConfig::from_json_str(r#"{"partition_mode":"round-robin","max_exact_cities":12}"#)
                .unwrap();
        assert_eq!(config.partition_mode, PartitionMode::RoundRobin);
        assert_eq!(config.scale_limit().max_cities(), 12);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = SolverConfig::from_json_str(r#"{"agents":3}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_zero_limit() {
        let err = SolverConfig::from_json_str(r#"{"max_exact_cities":0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn override_cannot_lift_hard_ceiling() {
        let limit = ScaleLimit::new(64);
        assert_eq!(limit.max_cities(), HARD_MAX_EXACT_CITIES);
        assert!(limit.check(HARD_MAX_EXACT_CITIES).is_ok());
        assert!(limit.check(HARD_MAX_EXACT_CITIES + 1).is_err());
    }

    #[test]
    fn default_limit_rejects_twenty_five() {
        assert_eq!(
            ScaleLimit::default().check(25),
            Err(Error::ScaleLimitExceeded {
                cities: 25,
                limit: 20
            })
        );
        assert!(ScaleLimit::default().check(20).is_ok());
    }
}
