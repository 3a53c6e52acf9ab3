//! Tick source arithmetic.
//!
//! The tick interrupt comes from a compare-match alarm on a free-running
//! counter. Deadlines are always computed from the first one, never from the
//! time the interrupt happened to run, so handler latency does not accumulate
//! into drift.

use crate::error::ConfigError;

/// Compare deadlines for a periodic alarm on a microsecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickSource {
    period_us: u32,
    next_us: u64,
}

impl TickSource {
    /// First deadline is one period after `start_us`.
    pub const fn new(period_us: u32, start_us: u64) -> Self {
        Self {
            period_us,
            next_us: start_us,
        }
    }

    pub const fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Counter value the alarm should fire at next.
    pub fn next_deadline(&mut self) -> u64 {
        self.next_us = self.next_us.wrapping_add(self.period_us as u64);
        self.next_us
    }
}

/// Compare value giving exactly `period_us` on a counter running at `timer_hz`.
pub const fn compare_divider(timer_hz: u32, period_us: u32) -> Result<u32, ConfigError> {
    if period_us == 0 {
        return Err(ConfigError::ZeroTickPeriod);
    }
    let cycles = timer_hz as u64 * period_us as u64;
    if cycles % 1_000_000 != 0 || cycles == 0 {
        return Err(ConfigError::InexactDivider {
            timer_hz,
            period_us,
        });
    }
    let counts = cycles / 1_000_000;
    if counts > u32::MAX as u64 {
        return Err(ConfigError::InexactDivider {
            timer_hz,
            period_us,
        });
    }
    Ok(counts as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadlines_are_exact_multiples() {
        let mut tick = TickSource::new(1_000, 5_000);
        assert_eq!(tick.next_deadline(), 6_000);
        assert_eq!(tick.next_deadline(), 7_000);
        for _ in 0..997 {
            tick.next_deadline();
        }
        assert_eq!(tick.next_deadline(), 5_000 + 1_000 * 1_000);
        assert_eq!(tick.period_us(), 1_000);
    }

    #[test]
    fn test_microsecond_counter_divider() {
        assert_eq!(compare_divider(1_000_000, 1_000), Ok(1_000));
        assert_eq!(compare_divider(16_000_000, 1_000), Ok(16_000));
    }

    #[test]
    fn test_prescaled_avr_divider_is_inexact() {
        // 1 MHz CPU clock through a /64 prescaler
        assert_eq!(
            compare_divider(15_625, 1_000),
            Err(ConfigError::InexactDivider {
                timer_hz: 15_625,
                period_us: 1_000
            })
        );
        // /8 prescaler divides evenly
        assert_eq!(compare_divider(125_000, 1_000), Ok(125));
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(compare_divider(1_000_000, 0), Err(ConfigError::ZeroTickPeriod));
        assert!(compare_divider(0, 1_000).is_err());
    }
}
