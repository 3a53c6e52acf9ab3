#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rp_pico::hal::gpio::Interrupt;
use rtic::app;

use stopwatch::event::Edge;
use stopwatch::tick::compare_divider;
use stopwatch::StopwatchConfig;

const CONFIG: StopwatchConfig = StopwatchConfig::DEFAULT;

/// The RP2040 timer counts microseconds.
const TIMER_HZ: u32 = 1_000_000;

const _: () = assert!(CONFIG.validate().is_ok());
const _: () = assert!(compare_divider(TIMER_HZ, CONFIG.tick_period_us).is_ok());

fn edge_interrupt(edge: Edge) -> Interrupt {
    match edge {
        Edge::Rising => Interrupt::EdgeHigh,
        Edge::Falling => Interrupt::EdgeLow,
    }
}

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::*;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{DynPinId, FunctionSio, Pin, PullDown, PullUp, SioInput, SioOutput},
        sio::Sio,
        timer::{Alarm, Alarm0, Instant, Timer},
        watchdog::Watchdog,
    };
    use stopwatch::event::pending_events;
    use stopwatch::{ClockState, DisplayFrame, Multiplexer, PinBank, TickSource};

    type OutPin = Pin<DynPinId, FunctionSio<SioOutput>, PullDown>;
    type ControlPin = Pin<DynPinId, FunctionSio<SioInput>, PullUp>;
    type Display = Multiplexer<PinBank<OutPin>, cortex_m::delay::Delay>;

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        clock: ClockState,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        display: Display,
        alarm: Alarm0,
        tick: TickSource,
        // Reset, pause and resume inputs, in signal line order
        controls: [ControlPin; 3],
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut tick = TickSource::new(CONFIG.tick_period_us, timer.get_counter().ticks());
        let mut alarm = timer.alarm_0().unwrap();
        alarm
            .schedule_at(Instant::from_ticks(tick.next_deadline()))
            .unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        // 7447 decoder inputs, LSB first
        let bus = [
            pins.gpio0.into_push_pull_output().into_dyn_pin(),
            pins.gpio1.into_push_pull_output().into_dyn_pin(),
            pins.gpio2.into_push_pull_output().into_dyn_pin(),
            pins.gpio3.into_push_pull_output().into_dyn_pin(),
        ];
        // Digit enables, rightmost digit first
        let enables = [
            pins.gpio4.into_push_pull_output().into_dyn_pin(),
            pins.gpio5.into_push_pull_output().into_dyn_pin(),
            pins.gpio6.into_push_pull_output().into_dyn_pin(),
            pins.gpio7.into_push_pull_output().into_dyn_pin(),
            pins.gpio8.into_push_pull_output().into_dyn_pin(),
            pins.gpio9.into_push_pull_output().into_dyn_pin(),
            pins.gpio10.into_push_pull_output().into_dyn_pin(),
            pins.gpio11.into_push_pull_output().into_dyn_pin(),
        ];
        let dp = pins.gpio12.into_push_pull_output().into_dyn_pin();
        let bank = PinBank::new(bus, enables).with_decimal_point(dp);

        let delay = cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());
        let display = Multiplexer::new(bank, delay, &CONFIG);

        let controls = [
            pins.gpio13.into_pull_up_input().into_dyn_pin(),
            pins.gpio14.into_pull_up_input().into_dyn_pin(),
            pins.gpio15.into_pull_up_input().into_dyn_pin(),
        ];
        for (pin, binding) in controls.iter().zip(CONFIG.bindings) {
            pin.set_interrupt_enabled(edge_interrupt(binding.edge), true);
        }

        defmt::info!(
            "stopwatch: tick {} us, display pass {} us",
            CONFIG.tick_period_us,
            CONFIG.scan_period_us()
        );

        // RTIC unmasks interrupts once init returns.
        (
            Shared {
                clock: ClockState::new(),
            },
            Local {
                display,
                alarm,
                tick,
                controls,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: 1 ms tick. Highest priority so a tick is never held up
    // behind a control event.
    #[task(binds = TIMER_IRQ_0, priority = 2, shared = [clock], local = [alarm, tick])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        let alarm = ctx.local.alarm;
        alarm.clear_interrupt();
        let deadline = Instant::from_ticks(ctx.local.tick.next_deadline());
        if alarm.schedule_at(deadline).is_err() {
            defmt::warn!("tick deadline {} could not be armed", deadline.ticks());
        }

        ctx.shared.clock.lock(|c| c.advance_one_tick());
    }

    // Hardware Task: GPIO edge on a control line
    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [clock], local = [controls])]
    fn control(mut ctx: control::Context) {
        let mut pending = 0u8;
        for (pin, binding) in ctx.local.controls.iter_mut().zip(CONFIG.bindings) {
            let irq = edge_interrupt(binding.edge);
            if pin.interrupt_status(irq) {
                pin.clear_interrupt(irq);
                pending |= 1 << binding.line.index();
            }
        }

        ctx.shared.clock.lock(|c| {
            for event in pending_events(pending) {
                c.dispatch(event);
            }
        });
    }

    // Foreground: snapshot under lock, then scan out with interrupts live.
    #[idle(shared = [clock], local = [display])]
    fn idle(mut ctx: idle::Context) -> ! {
        loop {
            let frame = ctx.shared.clock.lock(|c| DisplayFrame::new(c));
            ctx.local
                .display
                .render(&frame)
                .unwrap_or_else(|never| match never {});
        }
    }
}
