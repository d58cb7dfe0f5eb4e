//! Stopwatch
//!
//! While running, the stopwatch fires every quantum and adds one quantum to
//! the elapsed time. Accumulation follows the UI tick and is not corrected
//! for scheduling drift.

use core::fmt;

use crate::periodic::Periodic;

/// Running flag plus elapsed-time accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stopwatch {
    running: bool,
    elapsed_ms: u32,
    ticker: Periodic,
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero advancing by `quantum_ms`.
    pub const fn new(quantum_ms: u32) -> Self {
        Self {
            running: false,
            elapsed_ms: 0,
            ticker: Periodic::new(quantum_ms),
        }
    }

    /// Start or stop. Returns the new running state.
    ///
    /// Starting restarts the quantum, so the first increment lands one full
    /// quantum after the toggle.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        if self.running {
            self.ticker.restart();
        }
        self.running
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Elapsed time, ready for display
    pub const fn elapsed(&self) -> Elapsed {
        Elapsed(self.elapsed_ms)
    }

    /// Advance by `dt_ms` of wall time. Returns `true` if the elapsed time
    /// changed.
    pub fn advance(&mut self, dt_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        let fired = self.ticker.advance(dt_ms);
        if fired == 0 {
            return false;
        }

        let before = self.elapsed_ms;
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(fired.saturating_mul(self.ticker.period_ms()));
        self.elapsed_ms != before
    }
}

/// Elapsed milliseconds shown as `MM:SS.CC`
///
/// Minutes wrap at 60, there is no hour field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Elapsed(pub u32);

impl Elapsed {
    pub const fn minutes(&self) -> u32 {
        self.0 / 60_000 % 60
    }

    pub const fn seconds(&self) -> u32 {
        self.0 / 1_000 % 60
    }

    pub const fn centiseconds(&self) -> u32 {
        self.0 % 1_000 / 10
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:02}",
            self.minutes(),
            self.seconds(),
            self.centiseconds()
        )
    }
}
