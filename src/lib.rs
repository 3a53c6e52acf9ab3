//! Interrupt-driven stopwatch for an 8-digit multiplexed seven-segment display.
//!
//! The crate holds everything that does not touch a register:
//!
//! - [`clock`]: elapsed time with carry from milliseconds up to a 24-hour wrap
//! - [`event`]: reset, pause and resume signals and their line bindings
//! - [`tick`]: drift-free alarm deadlines for the 1 ms tick
//! - [`display`] and [`scan`]: digit decomposition and multiplexed scan-out
//! - [`shared`]: a critical-section cell for sharing the clock with interrupts
//!
//! Board bring-up lives in the `firmware` package.
//!
//! This library is `no_std` compatible.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod scan;
pub mod shared;
pub mod tick;

pub use clock::{ClockState, DAY_MS};
pub use config::StopwatchConfig;
pub use display::DisplayFrame;
pub use error::ConfigError;
pub use event::{ControlEvent, Edge, EdgeBinding, SignalLine};
pub use scan::{Multiplexer, PinBank, ScanOut};
pub use shared::SharedClock;
pub use tick::TickSource;
