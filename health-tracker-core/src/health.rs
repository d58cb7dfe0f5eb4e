//! Simulated health metrics
//!
//! Two independent generators fake sensor readings:
//!
//! - Heart rate: replaced by a uniform random value on every tick
//! - Steps: a uniform random increment is added on every tick
//!
//! Both live only as long as the health screen is mounted.

use rand_core::RngCore;

use crate::periodic::Periodic;

/// Cadences and ranges for the metric generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimulatorConfig {
    /// Heart rate update period (ms)
    pub heart_rate_period_ms: u32,
    /// Lowest heart rate (BPM, inclusive)
    pub heart_rate_min: u32,
    /// Highest heart rate (BPM, inclusive)
    pub heart_rate_max: u32,
    /// Heart rate shown before the first tick
    pub heart_rate_initial: u32,
    /// Step update period (ms)
    pub steps_period_ms: u32,
    /// Smallest step increment (inclusive)
    pub steps_increment_min: u32,
    /// Largest step increment (inclusive)
    pub steps_increment_max: u32,
}

impl SimulatorConfig {
    pub const fn new() -> Self {
        Self {
            heart_rate_period_ms: 3_000,
            heart_rate_min: 60,
            heart_rate_max: 120,
            heart_rate_initial: 72,
            steps_period_ms: 1_500,
            steps_increment_min: 1,
            steps_increment_max: 10,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One reading of both metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthSample {
    /// Beats per minute
    pub heart_rate: u32,
    /// Steps since the screen was opened
    pub steps: u32,
}

/// Periodic fake sensor source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MetricSimulator {
    config: SimulatorConfig,
    sample: HealthSample,
    heart_rate_timer: Periodic,
    steps_timer: Periodic,
}

impl MetricSimulator {
    /// Start from the initial sample with fresh timers
    pub const fn new(config: SimulatorConfig) -> Self {
        Self {
            config,
            sample: HealthSample {
                heart_rate: config.heart_rate_initial,
                steps: 0,
            },
            heart_rate_timer: Periodic::new(config.heart_rate_period_ms),
            steps_timer: Periodic::new(config.steps_period_ms),
        }
    }

    pub const fn sample(&self) -> HealthSample {
        self.sample
    }

    /// Replace the heart rate with a fresh random value and return it.
    pub fn tick_heart_rate<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> u32 {
        self.sample.heart_rate =
            uniform_inclusive(rng, self.config.heart_rate_min, self.config.heart_rate_max);
        self.sample.heart_rate
    }

    /// Add a random increment to the step count and return the increment.
    pub fn tick_steps<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let increment = uniform_inclusive(
            rng,
            self.config.steps_increment_min,
            self.config.steps_increment_max,
        );
        self.sample.steps = self.sample.steps.saturating_add(increment);
        increment
    }

    /// Advance both timers by `dt_ms`, firing the generators that are due.
    /// Returns `true` if the sample changed.
    pub fn advance<R: RngCore + ?Sized>(&mut self, dt_ms: u32, rng: &mut R) -> bool {
        let before = self.sample;

        for _ in 0..self.heart_rate_timer.advance(dt_ms) {
            self.tick_heart_rate(rng);
        }
        for _ in 0..self.steps_timer.advance(dt_ms) {
            self.tick_steps(rng);
        }

        self.sample != before
    }
}

/// Uniform integer in `[low, high]` without modulo bias.
///
/// Swapped bounds are accepted.
pub fn uniform_inclusive<R: RngCore + ?Sized>(rng: &mut R, low: u32, high: u32) -> u32 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let span = high - low;
    if span == u32::MAX {
        return rng.next_u32();
    }

    let range = span + 1;
    // Largest value that keeps every residue equally likely
    let zone = u32::MAX - (u32::MAX - range + 1) % range;
    loop {
        let value = rng.next_u32();
        if value <= zone {
            return low + value % range;
        }
    }
}
