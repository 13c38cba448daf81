//! Adapters from `embedded-hal` pins and `embedded-time` clocks to the
//! debouncer's collaborators.

use embedded_hal::digital::v2::InputPin;
use embedded_time::{Clock, Instant};
use log::warn;

use crate::capability::{PinReader, TickSource};

/// Samples an [`InputPin`], treating either level as the active one.
pub struct InputPinReader<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> InputPinReader<P> {
    /// Reads `true` when the pin is high.
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Reads `true` when the pin is low, as for a switch to ground on a pull-up.
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> PinReader for InputPinReader<P> {
    type Error = P::Error;

    fn read(&mut self) -> Result<bool, Self::Error> {
        if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }
}

/// Uses the instants of an `embedded-time` [`Clock`] as ticks.
///
/// A failed clock read repeats the last good instant so no sample is admitted
/// while the clock is faulty. The tick is `None` until the first good read.
pub struct ClockTicks<'a, C: Clock> {
    clock: &'a C,
    last: Option<Instant<C>>,
}

impl<'a, C: Clock> ClockTicks<'a, C> {
    pub fn new(clock: &'a C) -> Self {
        Self { clock, last: None }
    }
}

impl<C: Clock> TickSource for ClockTicks<'_, C> {
    type Tick = Option<Instant<C>>;

    fn ticks(&mut self) -> Self::Tick {
        match self.clock.try_now() {
            Ok(now) => self.last = Some(now),
            Err(error) => warn!("clock read failed: {:?}", error),
        }
        self.last
    }
}
