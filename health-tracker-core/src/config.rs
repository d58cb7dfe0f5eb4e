//! Application configuration
//!
//! All cadences and ranges in one place. `Default` gives the values the
//! watch ships with.

use crate::health::SimulatorConfig;

/// Cadence of the stopwatch: fires every quantum, adds one quantum
pub const STOPWATCH_QUANTUM_MS: u32 = 10;

/// Application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Stopwatch quantum (ms)
    pub stopwatch_quantum_ms: u32,
    /// Health metric generators
    pub simulator: SimulatorConfig,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A period is zero
    ZeroPeriod,
    /// A range has its minimum above its maximum
    InvertedRange,
    /// The initial heart rate is outside the heart rate range
    InitialOutOfRange,
}

impl AppConfig {
    pub const fn new() -> Self {
        Self {
            stopwatch_quantum_ms: STOPWATCH_QUANTUM_MS,
            simulator: SimulatorConfig::new(),
        }
    }

    /// Check that the configuration describes sensible generators
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulator;

        if self.stopwatch_quantum_ms == 0
            || sim.heart_rate_period_ms == 0
            || sim.steps_period_ms == 0
        {
            return Err(ConfigError::ZeroPeriod);
        }

        if sim.heart_rate_min > sim.heart_rate_max
            || sim.steps_increment_min > sim.steps_increment_max
        {
            return Err(ConfigError::InvertedRange);
        }

        if !(sim.heart_rate_min..=sim.heart_rate_max).contains(&sim.heart_rate_initial) {
            return Err(ConfigError::InitialOutOfRange);
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.stopwatch_quantum_ms, 10);
        assert_eq!(config.simulator.heart_rate_period_ms, 3_000);
        assert_eq!(config.simulator.steps_period_ms, 1_500);
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut config = AppConfig::default();
        config.simulator.steps_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));

        let mut config = AppConfig::default();
        config.stopwatch_quantum_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = AppConfig::default();
        config.simulator.steps_increment_min = 11;
        assert_eq!(config.validate(), Err(ConfigError::InvertedRange));
    }

    #[test]
    fn test_initial_heart_rate_out_of_range() {
        let mut config = AppConfig::default();
        config.simulator.heart_rate_initial = 40;
        assert_eq!(config.validate(), Err(ConfigError::InitialOutOfRange));
    }
}
