//! Compile-time stopwatch configuration.
//!
//! Timing is fixed at build time. [`StopwatchConfig::validate`] is a `const fn`
//! so firmware can reject a bad configuration with a `const` assertion.

use crate::display::POSITIONS;
use crate::error::ConfigError;
use crate::event::{EdgeBinding, DEFAULT_BINDINGS};

/// Longest full display pass that still reads as a steady image.
pub const FLICKER_BUDGET_US: u32 = 16_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchConfig {
    /// Tick period in microseconds (default: 1000)
    pub tick_period_us: u32,

    /// Hold time per display position in microseconds (default: 100)
    pub settle_us: u32,

    /// Light the separator dots (default: off)
    pub decimal_points: bool,

    /// Trigger edge for each control line
    pub bindings: [EdgeBinding; 3],
}

impl StopwatchConfig {
    /// 1 ms ticks, 100 us per digit, no separator dots, stock edge bindings.
    pub const DEFAULT: Self = Self {
        tick_period_us: 1_000,
        settle_us: 100,
        decimal_points: false,
        bindings: DEFAULT_BINDINGS,
    };

    /// Duration of one full display pass, ignoring bus write time.
    pub const fn scan_period_us(&self) -> u32 {
        self.settle_us.saturating_mul(POSITIONS as u32)
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_us == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        let scan_us = self.scan_period_us();
        if scan_us >= FLICKER_BUDGET_US {
            return Err(ConfigError::ScanTooSlow {
                scan_us,
                budget_us: FLICKER_BUDGET_US,
            });
        }
        Ok(())
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = assert!(StopwatchConfig::DEFAULT.validate().is_ok());
