use core::cell::Cell;
use embedded_time::clock::Error;
use embedded_time::duration::Fraction;
use embedded_time::{Clock, Instant};

/// Millisecond counter advanced by the simulation loop.
pub struct SimClock {
    millis: Cell<u32>,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            millis: Cell::new(0),
        }
    }

    pub fn tick(&self) {
        self.millis.set(self.millis.get().wrapping_add(1));
    }

    pub fn millis(&self) -> u32 {
        self.millis.get()
    }
}

impl Clock for SimClock {
    type T = u32;
    const SCALING_FACTOR: Fraction = Fraction::new(1, 1_000);

    fn try_now(&self) -> Result<Instant<Self>, Error> {
        Ok(Instant::new(self.millis.get()))
    }
}
