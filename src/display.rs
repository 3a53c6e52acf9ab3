use crate::clock::ClockState;

/// Number of digit positions on the display.
pub const POSITIONS: usize = 8;

/// Positions whose separator dot is lit when dots are enabled.
const DECIMAL_POINTS: u8 = 0b1010_1011;

/// One pass worth of digits, least significant position first.
///
/// Layout: ms tens, ms hundreds, s units, s tens, m units, m tens, h units,
/// h tens. The millisecond units digit is below the display's resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    digits: [u8; POSITIONS],
}

impl DisplayFrame {
    pub const fn new(clock: &ClockState) -> Self {
        let ms = clock.milliseconds();
        let (s, m, h) = (clock.seconds(), clock.minutes(), clock.hours());
        Self {
            digits: [
                (ms % 100 / 10) as u8,
                (ms / 100) as u8,
                s % 10,
                s / 10,
                m % 10,
                m / 10,
                h % 10,
                h / 10,
            ],
        }
    }

    pub const fn digits(&self) -> &[u8; POSITIONS] {
        &self.digits
    }

    /// Digit at `pos`, or `None` past the last position.
    pub fn digit(&self, pos: usize) -> Option<u8> {
        self.digits.get(pos).copied()
    }

    /// Whether the separator dot after `pos` belongs on.
    pub const fn decimal_point(pos: usize) -> bool {
        pos < POSITIONS && DECIMAL_POINTS & (1 << pos) != 0
    }

    pub const fn hours(&self) -> u8 {
        self.digits[7] * 10 + self.digits[6]
    }

    pub const fn minutes(&self) -> u8 {
        self.digits[5] * 10 + self.digits[4]
    }

    pub const fn seconds(&self) -> u8 {
        self.digits[3] * 10 + self.digits[2]
    }

    /// Milliseconds to the display's resolution of ten.
    pub const fn milliseconds(&self) -> u16 {
        self.digits[1] as u16 * 100 + self.digits[0] as u16 * 10
    }
}

impl From<&ClockState> for DisplayFrame {
    fn from(clock: &ClockState) -> Self {
        Self::new(clock)
    }
}

impl From<ClockState> for DisplayFrame {
    fn from(clock: ClockState) -> Self {
        Self::new(&clock)
    }
}
