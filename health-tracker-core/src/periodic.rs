//! Fixed-period scheduling driven by an external tick
//!
//! The UI task ticks at a fixed cadence and hands the elapsed time to each
//! screen. A [`Periodic`] turns that elapsed time into a number of fired
//! periods, carrying the remainder over to the next tick.

/// Deadline accumulator for a repeat-with-delay loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Periodic {
    /// Period length in ms, never zero
    period_ms: u32,
    /// Time accumulated since the last firing
    pending_ms: u32,
}

impl Periodic {
    /// Create a new periodic with the given period.
    ///
    /// A zero period is clamped to 1 ms.
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            pending_ms: 0,
        }
    }

    /// Period length in ms
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Time accumulated towards the next firing
    pub const fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    /// Accumulate `dt_ms` and return how many full periods elapsed.
    pub fn advance(&mut self, dt_ms: u32) -> u32 {
        let total = self.pending_ms as u64 + dt_ms as u64;
        let period = self.period_ms as u64;
        self.pending_ms = (total % period) as u32;
        u32::try_from(total / period).unwrap_or(u32::MAX)
    }

    /// Drop partial progress, so the next firing is a full period away.
    pub fn restart(&mut self) {
        self.pending_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let mut p = Periodic::new(10);
        assert_eq!(p.advance(9), 0);
        assert_eq!(p.advance(1), 1);
        assert_eq!(p.pending_ms(), 0);
    }

    #[test]
    fn test_carries_remainder() {
        let mut p = Periodic::new(1500);
        assert_eq!(p.advance(1000), 0);
        assert_eq!(p.advance(1000), 1);
        assert_eq!(p.pending_ms(), 500);
        assert_eq!(p.advance(1000), 1);
        assert_eq!(p.pending_ms(), 0);
    }

    #[test]
    fn test_large_step_fires_multiple_times() {
        let mut p = Periodic::new(3000);
        assert_eq!(p.advance(9_500), 3);
        assert_eq!(p.pending_ms(), 500);
    }

    #[test]
    fn test_restart_drops_progress() {
        let mut p = Periodic::new(10);
        p.advance(7);
        p.restart();
        assert_eq!(p.advance(7), 0);
        assert_eq!(p.advance(3), 1);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut p = Periodic::new(0);
        assert_eq!(p.period_ms(), 1);
        assert_eq!(p.advance(5), 5);
    }

    #[test]
    fn test_no_overflow_near_max() {
        let mut p = Periodic::new(u32::MAX);
        assert_eq!(p.advance(u32::MAX - 1), 0);
        assert_eq!(p.advance(u32::MAX), 1);
        assert_eq!(p.pending_ms(), u32::MAX - 1);
    }
}
