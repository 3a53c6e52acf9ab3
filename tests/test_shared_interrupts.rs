//! Concurrent writers and a reader on `SharedClock`, with threads standing in
//! for interrupt handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use stopwatch::{ClockState, ControlEvent, SharedClock};

fn assert_consistent(state: &ClockState) {
    assert!(state.milliseconds() < 1_000);
    assert!(state.seconds() < 60);
    assert!(state.minutes() < 60);
    assert!(state.hours() < 24);
}

#[test]
fn test_snapshots_never_tear() {
    static CLOCK: SharedClock = SharedClock::new();
    static DONE: AtomicBool = AtomicBool::new(false);

    let ticker = thread::spawn(|| {
        for _ in 0..200_000 {
            CLOCK.advance_one_tick();
        }
        DONE.store(true, Ordering::Release);
    });

    let mut last = 0;
    while !DONE.load(Ordering::Acquire) {
        let state = CLOCK.snapshot();
        assert_consistent(&state);
        assert!(state.elapsed_ms() >= last, "time went backwards");
        last = state.elapsed_ms();

        let frame = CLOCK.frame();
        assert!(frame.digits().iter().all(|&d| d <= 9));
    }
    ticker.join().unwrap();
    assert!(CLOCK.snapshot().elapsed_ms() <= 200_000);
}

#[test]
fn test_events_interleaved_with_ticks() {
    static CLOCK: SharedClock = SharedClock::new();

    let ticker = thread::spawn(|| {
        for _ in 0..100_000 {
            CLOCK.advance_one_tick();
        }
    });
    let controller = thread::spawn(|| {
        for i in 0..5_000 {
            let event = if i % 2 == 0 {
                ControlEvent::Pause
            } else {
                ControlEvent::Resume
            };
            CLOCK.dispatch(event);
            assert_consistent(&CLOCK.snapshot());
        }
    });

    ticker.join().unwrap();
    controller.join().unwrap();

    let state = CLOCK.snapshot();
    assert_consistent(&state);
    assert!(state.is_running());
    assert!(state.elapsed_ms() <= 100_000);

    CLOCK.dispatch(ControlEvent::Reset);
    let state = CLOCK.snapshot();
    assert_eq!(state.elapsed_ms(), 0);
    assert!(!state.is_running());
}

#[test]
fn test_paused_shared_clock_ignores_ticks() {
    let clock = SharedClock::with_state(ClockState::from_parts(0, 0, 2, 500));
    clock.dispatch(ControlEvent::Pause);
    for _ in 0..100 {
        clock.advance_one_tick();
    }
    assert_eq!(clock.snapshot().elapsed_ms(), 2_500);
}
