//! Host doubles for pins and delays shared across integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

/// Output pin whose level is observable through a shared handle.
#[derive(Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockPin {
    pub fn is_high(&self) -> bool {
        self.level.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Pin that fails every write.
pub struct BrokenPin;

#[derive(Debug, PartialEq)]
pub struct PinFault;

impl OutputPin for BrokenPin {
    type Error = PinFault;

    fn set_low(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }
}

/// Handles onto a full bank: 4 bus pins, 8 enables, 1 dot.
#[derive(Clone)]
pub struct BankProbe {
    pub bus: [MockPin; 4],
    pub enables: [MockPin; 8],
    pub dp: MockPin,
}

impl BankProbe {
    pub fn new() -> Self {
        Self {
            bus: Default::default(),
            enables: Default::default(),
            dp: MockPin::default(),
        }
    }

    pub fn bus_value(&self) -> u8 {
        self.bus
            .iter()
            .enumerate()
            .map(|(bit, pin)| (pin.is_high() as u8) << bit)
            .sum()
    }

    pub fn lit_positions(&self) -> Vec<usize> {
        self.enables
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_high())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Delay that runs a callback at each settle instead of waiting.
pub struct SamplingDelay {
    pub on_settle: Box<dyn FnMut(u32)>,
}

impl DelayUs<u32> for SamplingDelay {
    fn delay_us(&mut self, us: u32) {
        (self.on_settle)(us);
    }
}

/// Delay that only records what it was asked to do.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    pub calls: Rc<RefCell<Vec<u32>>>,
}

impl DelayUs<u32> for RecordingDelay {
    fn delay_us(&mut self, us: u32) {
        self.calls.borrow_mut().push(us);
    }
}

impl BankProbe {
    /// Builds a `PinBank` wired to this probe's pins.
    pub fn bank(&self, with_dp: bool) -> stopwatch::PinBank<MockPin> {
        let bank = stopwatch::PinBank::new(self.bus.clone(), self.enables.clone());
        if with_dp {
            bank.with_decimal_point(self.dp.clone())
        } else {
            bank
        }
    }
}
