use core::convert::Infallible;

use crate::filter::Filter;

/// Monotonic tick counter that paces sampling. Only equality is ever checked,
/// so wrapping counters are fine.
pub trait TickSource {
    type Tick: PartialEq;

    fn ticks(&mut self) -> Self::Tick;
}

impl<F, T> TickSource for F
where
    F: FnMut() -> T,
    T: PartialEq,
{
    type Tick = T;

    fn ticks(&mut self) -> T {
        self()
    }
}

/// Raw level of the input being debounced.
pub trait PinReader {
    type Error;

    fn read(&mut self) -> Result<bool, Self::Error>;
}

impl<F> PinReader for F
where
    F: FnMut() -> bool,
{
    type Error = Infallible;

    fn read(&mut self) -> Result<bool, Infallible> {
        Ok(self())
    }
}

/// Notified after the settled state changes. Read the new value from
/// [`Filter::state`].
pub trait EventSink {
    fn on_change(&mut self, filter: &Filter);
}

impl<F> EventSink for F
where
    F: FnMut(&Filter),
{
    fn on_change(&mut self, filter: &Filter) {
        self(filter)
    }
}

/// Sink type of a debouncer built without one. Cannot be constructed.
#[derive(Debug)]
pub enum NoSink {}

impl EventSink for NoSink {
    fn on_change(&mut self, _: &Filter) {
        match *self {}
    }
}
