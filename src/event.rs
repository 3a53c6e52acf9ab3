//! Control events and the signal lines that raise them.
//!
//! Each external signal line is bound to exactly one [`ControlEvent`]. The
//! interrupt handler reads which lines fired, turns them into events with
//! [`pending_events`], and hands each to [`ClockState::dispatch`].
//!
//! [`ClockState::dispatch`]: crate::clock::ClockState::dispatch

/// A stopwatch control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// Zero the time and stop.
    Reset,
    /// Stop counting, keep the time.
    Pause,
    /// Continue counting.
    Resume,
}

/// External signal lines, in hardware delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalLine {
    A,
    B,
    C,
}

impl SignalLine {
    pub const ALL: [SignalLine; 3] = [SignalLine::A, SignalLine::B, SignalLine::C];

    /// Line for a pending-mask bit index. Unknown indices have no line.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(SignalLine::A),
            1 => Some(SignalLine::B),
            2 => Some(SignalLine::C),
            _ => None,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The control event this line raises.
    pub const fn event(self) -> ControlEvent {
        match self {
            SignalLine::A => ControlEvent::Reset,
            SignalLine::B => ControlEvent::Pause,
            SignalLine::C => ControlEvent::Resume,
        }
    }
}

impl From<SignalLine> for ControlEvent {
    fn from(line: SignalLine) -> Self {
        line.event()
    }
}

/// Signal transition that counts as a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Which edge of a line triggers its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeBinding {
    pub line: SignalLine,
    pub edge: Edge,
}

impl EdgeBinding {
    pub const fn new(line: SignalLine, edge: Edge) -> Self {
        Self { line, edge }
    }
}

/// Reset on a falling edge, pause on a rising edge, resume on a falling edge.
pub const DEFAULT_BINDINGS: [EdgeBinding; 3] = [
    EdgeBinding::new(SignalLine::A, Edge::Falling),
    EdgeBinding::new(SignalLine::B, Edge::Rising),
    EdgeBinding::new(SignalLine::C, Edge::Falling),
];

/// Events for the set bits of a pending-line mask, in line order.
///
/// Bit `n` stands for [`SignalLine::from_index(n)`]; bits with no line are
/// ignored.
pub fn pending_events(mask: u8) -> impl Iterator<Item = ControlEvent> {
    SignalLine::ALL
        .into_iter()
        .filter(move |line| mask & (1 << line.index()) != 0)
        .map(SignalLine::event)
}
