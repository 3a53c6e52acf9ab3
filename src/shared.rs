//! Clock state shared between interrupt handlers and the foreground loop.
//!
//! Writers run in interrupt context, the display loop only reads. Every access
//! goes through a critical section, so a snapshot is always taken either
//! before or after a whole carry cascade, never halfway through one.

use core::cell::Cell;

use critical_section::Mutex;

use crate::clock::ClockState;
use crate::display::DisplayFrame;
use crate::event::ControlEvent;

pub struct SharedClock {
    inner: Mutex<Cell<ClockState>>,
}

impl SharedClock {
    pub const fn new() -> Self {
        Self::with_state(ClockState::new())
    }

    pub const fn with_state(state: ClockState) -> Self {
        Self {
            inner: Mutex::new(Cell::new(state)),
        }
    }

    fn update(&self, f: impl FnOnce(&mut ClockState)) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut state = cell.get();
            f(&mut state);
            cell.set(state);
        });
    }

    /// Tick interrupt entry point.
    pub fn advance_one_tick(&self) {
        self.update(ClockState::advance_one_tick);
    }

    /// Control interrupt entry point.
    pub fn dispatch(&self, event: ControlEvent) {
        self.update(|state| state.dispatch(event));
    }

    pub fn snapshot(&self) -> ClockState {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame::from(self.snapshot())
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::new()
    }
}
