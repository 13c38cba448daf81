//! Drives a few debounced push buttons from a simulated millisecond clock.
//!
//! Each input gets its own debouncer; the main loop polls all of them several
//! times per tick, as a firmware superloop would.

mod clock;
mod config;
mod logger;
mod switch;

use debounce::hal::{ClockTicks, InputPinReader};
use debounce::{Debouncer, EventSink, Filter};
use log::{info, LevelFilter};

use crate::clock::SimClock;
use crate::switch::BouncySwitch;

static LOGGER: logger::SimLogger = logger::SimLogger;

/// Logs every reported transition of one input and counts them.
struct Reporter {
    name: &'static str,
    transitions: u32,
}

impl EventSink for Reporter {
    fn on_change(&mut self, filter: &Filter) {
        self.transitions += 1;
        info!(
            "{} {}",
            self.name,
            if filter.state() { "pressed" } else { "released" }
        );
    }
}

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let clock = SimClock::new();

    let mut inputs: Vec<_> = config::INPUTS
        .iter()
        .map(|input| {
            Debouncer::new(
                input.depth,
                ClockTicks::new(&clock),
                InputPinReader::active_low(BouncySwitch::new(&clock, input)),
            )
            .with_sink(Reporter {
                name: input.name,
                transitions: 0,
            })
        })
        .collect();

    info!("simulating {} inputs for {} ms", inputs.len(), config::RUN_MS);

    for _ in 0..config::RUN_MS {
        clock.tick();
        for _ in 0..config::POLLS_PER_TICK {
            for input in inputs.iter_mut() {
                input.service().unwrap_or_else(|never| match never {});
            }
        }
    }

    for input in &inputs {
        if let Some(reporter) = input.sink() {
            info!(
                "{}: depth {}, {} transitions, now {}",
                reporter.name,
                input.depth(),
                reporter.transitions,
                if input.state() { "pressed" } else { "released" }
            );
        }
    }
}
