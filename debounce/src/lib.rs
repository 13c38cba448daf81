#![no_std]

//! Shift-register debouncing for a single binary input.
//!
//! A [`Debouncer`] admits one raw sample per distinct tick, keeps the last
//! `depth` samples in a bit history and reports a new state only once the whole
//! history agrees. Polling [`Debouncer::service`] faster than the tick rate is
//! cheap: repeated calls within one tick return without reading the pin.

mod bits;
mod capability;
mod filter;
pub mod hal;

pub use bits::{Bitmask, BITMASK_WIDTH};
pub use capability::{EventSink, NoSink, PinReader, TickSource};
pub use filter::{DebouncerState, Filter};

use core::convert::Infallible;
use log::debug;

pub struct Debouncer<T: TickSource, P, S = NoSink> {
    ticks: T,
    pin: P,
    sink: Option<S>,
    last_tick: T::Tick,
    filter: Filter,
}

impl<T, P> Debouncer<T, P, NoSink>
where
    T: TickSource,
    P: PinReader,
{
    /// Builds a debouncer without an event sink and takes the tick baseline.
    ///
    /// `depth` above [`BITMASK_WIDTH`] is clamped. The pin is not read until
    /// the tick changes.
    pub fn new(depth: u8, mut ticks: T, pin: P) -> Self {
        let last_tick = ticks.ticks();
        Debouncer {
            ticks,
            pin,
            sink: None,
            last_tick,
            filter: Filter::new(depth),
        }
    }

    /// Attaches `sink`, keeping the tick baseline and history.
    pub fn with_sink<S: EventSink>(self, sink: S) -> Debouncer<T, P, S> {
        Debouncer {
            ticks: self.ticks,
            pin: self.pin,
            sink: Some(sink),
            last_tick: self.last_tick,
            filter: self.filter,
        }
    }
}

impl<T, P, S> Debouncer<T, P, S>
where
    T: TickSource,
    P: PinReader,
    S: EventSink,
{
    pub fn new_with_sink(depth: u8, ticks: T, pin: P, sink: S) -> Self {
        Debouncer::<T, P, NoSink>::new(depth, ticks, pin).with_sink(sink)
    }

    /// Takes at most one sample per tick and notifies the sink on a change.
    ///
    /// A failed pin read leaves the tick unconsumed, so the next call retries.
    pub fn service(&mut self) -> Result<(), P::Error> {
        let now = self.ticks.ticks();
        if now == self.last_tick {
            return Ok(());
        }

        let level = self.pin.read()?;
        self.last_tick = now;

        if let Some(state) = self.filter.sample(level) {
            debug!("settled {} after {} samples", state, self.filter.depth());
            if let Some(sink) = self.sink.as_mut() {
                sink.on_change(&self.filter);
            }
        }

        Ok(())
    }

    pub fn state(&self) -> bool {
        self.filter.state()
    }

    pub fn depth(&self) -> u8 {
        self.filter.depth()
    }

    pub fn mask(&self) -> Bitmask {
        self.filter.mask()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

impl<T, P, S> embedded_hal::digital::v2::InputPin for Debouncer<T, P, S>
where
    T: TickSource,
    P: PinReader,
    S: EventSink,
{
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.state())
    }
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.state())
    }
}
