//! Configuration errors.
//!
//! The clock itself has no failure modes. Timing problems are configuration
//! mistakes and are caught here, ideally in a `const` context before the
//! firmware ever runs.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero microseconds
    ZeroTickPeriod,

    /// Timer frequency does not divide into a whole number of counts per tick
    InexactDivider {
        /// Counter frequency in Hz
        timer_hz: u32,
        /// Requested tick period in microseconds
        period_us: u32,
    },

    /// One full display pass takes long enough to flicker
    ScanTooSlow {
        /// Duration of one 8-position pass in microseconds
        scan_us: u32,
        /// Longest pass that still reads as steady
        budget_us: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => write!(f, "Tick period must be non-zero"),
            ConfigError::InexactDivider {
                timer_hz,
                period_us,
            } => write!(
                f,
                "{} Hz timer cannot produce an exact {} us period",
                timer_hz, period_us
            ),
            ConfigError::ScanTooSlow { scan_us, budget_us } => write!(
                f,
                "Display pass of {} us exceeds {} us flicker budget",
                scan_us, budget_us
            ),
        }
    }
}
