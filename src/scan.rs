//! Multiplexed scan-out of a [`DisplayFrame`].
//!
//! The display shares one BCD digit bus between all eight positions. A pass
//! lights one position at a time, puts its digit on the bus and holds it for
//! the settle interval. Repeated fast enough, the eye sees all eight at once.
//!
//! [`ScanOut`] is the output side of the hardware boundary. [`PinBank`]
//! implements it over embedded-hal output pins driving a 7447-style decoder.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::clock::ClockState;
use crate::config::StopwatchConfig;
use crate::display::{DisplayFrame, POSITIONS};

/// Outputs the scan loop drives.
pub trait ScanOut {
    /// Platform-specific error type
    type Error;

    /// Enable position `index` and disable all others.
    ///
    /// An index past the last position leaves every position disabled.
    fn set_output_position(&mut self, index: usize) -> Result<(), Self::Error>;

    /// Put `value` on the digit bus. Only the low four bits are used.
    fn write_digit_bus(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Drive the separator dot. Boards without one ignore it.
    fn write_decimal_point(&mut self, _on: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Bus width of the BCD decoder input.
pub const BUS_WIDTH: usize = 4;

/// [`ScanOut`] over discrete GPIO pins.
pub struct PinBank<P> {
    bus: [P; BUS_WIDTH],
    enables: [P; POSITIONS],
    dp: Option<P>,
}

impl<P: OutputPin> PinBank<P> {
    /// `bus[0]` is the least significant bit, `enables[0]` the rightmost digit.
    pub fn new(bus: [P; BUS_WIDTH], enables: [P; POSITIONS]) -> Self {
        Self {
            bus,
            enables,
            dp: None,
        }
    }

    pub fn with_decimal_point(mut self, dp: P) -> Self {
        self.dp = Some(dp);
        self
    }

    pub fn release(self) -> ([P; BUS_WIDTH], [P; POSITIONS], Option<P>) {
        (self.bus, self.enables, self.dp)
    }
}

impl<P: OutputPin> ScanOut for PinBank<P> {
    type Error = P::Error;

    fn set_output_position(&mut self, index: usize) -> Result<(), Self::Error> {
        // Everything off first so two positions are never lit together.
        for (i, pin) in self.enables.iter_mut().enumerate() {
            if i != index {
                pin.set_low()?;
            }
        }
        if let Some(pin) = self.enables.get_mut(index) {
            pin.set_high()?;
        }
        Ok(())
    }

    fn write_digit_bus(&mut self, value: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.bus.iter_mut().enumerate() {
            if value & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }

    fn write_decimal_point(&mut self, on: bool) -> Result<(), Self::Error> {
        match self.dp.as_mut() {
            Some(pin) if on => pin.set_high(),
            Some(pin) => pin.set_low(),
            None => Ok(()),
        }
    }
}

/// Drives one [`ScanOut`] through full display passes.
pub struct Multiplexer<S, D> {
    out: S,
    delay: D,
    settle_us: u32,
    decimal_points: bool,
}

impl<S, D> Multiplexer<S, D>
where
    S: ScanOut,
    D: DelayUs<u32>,
{
    pub fn new(out: S, delay: D, config: &StopwatchConfig) -> Self {
        Self {
            out,
            delay,
            settle_us: config.settle_us,
            decimal_points: config.decimal_points,
        }
    }

    /// One pass over all positions, in position order.
    pub fn render(&mut self, frame: &DisplayFrame) -> Result<(), S::Error> {
        for (pos, &digit) in frame.digits().iter().enumerate() {
            self.out.set_output_position(pos)?;
            self.out.write_digit_bus(digit)?;
            if self.decimal_points {
                self.out.write_decimal_point(DisplayFrame::decimal_point(pos))?;
            }
            self.delay.delay_us(self.settle_us);
        }
        Ok(())
    }

    pub fn render_state(&mut self, clock: &ClockState) -> Result<(), S::Error> {
        self.render(&DisplayFrame::new(clock))
    }

    pub fn out(&self) -> &S {
        &self.out
    }

    pub fn release(self) -> (S, D) {
        (self.out, self.delay)
    }
}
