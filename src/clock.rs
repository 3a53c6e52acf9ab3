use crate::event::ControlEvent;

/// Milliseconds in one full turn of the 24-hour clock.
pub const DAY_MS: u32 = 86_400_000;

/// Elapsed time and run mode of the stopwatch.
///
/// Every mutator resolves its carries before returning, so a copy taken from
/// outside the update routine never has a field outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    milliseconds: u16,
    seconds: u8,
    minutes: u8,
    hours: u8,
    running: bool,
}

impl ClockState {
    /// Zero elapsed time, running.
    pub const fn new() -> Self {
        Self {
            milliseconds: 0,
            seconds: 0,
            minutes: 0,
            hours: 0,
            running: true,
        }
    }

    /// Builds a running clock from loose parts, wrapping anything past a day.
    pub const fn from_parts(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        let total = (hours as u64) * 3_600_000
            + (minutes as u64) * 60_000
            + (seconds as u64) * 1_000
            + milliseconds as u64;
        Self::from_elapsed_ms((total % DAY_MS as u64) as u32)
    }

    /// Running clock showing `ms` milliseconds since zero, modulo one day.
    pub const fn from_elapsed_ms(ms: u32) -> Self {
        let ms = ms % DAY_MS;
        Self {
            milliseconds: (ms % 1_000) as u16,
            seconds: ((ms / 1_000) % 60) as u8,
            minutes: ((ms / 60_000) % 60) as u8,
            hours: (ms / 3_600_000) as u8,
            running: true,
        }
    }

    pub const fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn hours(&self) -> u8 {
        self.hours
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds since zero.
    pub const fn elapsed_ms(&self) -> u32 {
        self.hours as u32 * 3_600_000
            + self.minutes as u32 * 60_000
            + self.seconds as u32 * 1_000
            + self.milliseconds as u32
    }

    /// Advances by one millisecond. Handles rollover through to hours.
    pub fn advance_one_tick(&mut self) {
        if !self.running {
            return;
        }
        self.milliseconds += 1;
        if self.milliseconds >= 1_000 {
            self.milliseconds = 0;
            self.add_second();
        }
    }

    /// Same as `n` calls of [`advance_one_tick`](Self::advance_one_tick).
    pub fn advance_ticks(&mut self, n: u32) {
        if !self.running {
            return;
        }
        let total = (self.elapsed_ms() + n % DAY_MS) % DAY_MS;
        *self = Self::from_elapsed_ms(total);
    }

    fn add_second(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.add_minute();
        }
    }

    fn add_minute(&mut self) {
        self.minutes += 1;
        if self.minutes >= 60 {
            self.minutes = 0;
            self.hours = (self.hours + 1) % 24;
        }
    }

    /// Zeroes the time and stops the clock. Counting restarts only on resume.
    pub fn reset(&mut self) {
        *self = Self {
            running: false,
            ..Self::new()
        };
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Applies a control event.
    pub fn dispatch(&mut self, event: ControlEvent) {
        #[cfg(feature = "defmt")]
        defmt::debug!("control event {}", event);

        match event {
            ControlEvent::Reset => self.reset(),
            ControlEvent::Pause => self.pause(),
            ControlEvent::Resume => self.resume(),
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}
