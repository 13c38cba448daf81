use core::convert::Infallible;

use crate::clock::SimClock;
use crate::config::{InputConfig, BOUNCE_MS};

/// Push button to ground on a pulled-up input, with contact chatter after
/// every edge.
pub struct BouncySwitch<'a> {
    clock: &'a SimClock,
    presses: &'static [(u32, u32)],
}

impl<'a> BouncySwitch<'a> {
    pub fn new(clock: &'a SimClock, config: &InputConfig) -> Self {
        Self {
            clock,
            presses: config.presses,
        }
    }

    /// Whether the contacts are closed at `now`, including chatter.
    fn closed_at(&self, now: u32) -> bool {
        let mut closed = false;
        let mut since_edge = u32::MAX;

        for &(down, up) in self.presses {
            for (edge, state) in [(down, true), (up, false)] {
                if now >= edge && now - edge < since_edge {
                    since_edge = now - edge;
                    closed = state;
                }
            }
        }

        if since_edge < BOUNCE_MS && chatter(now) {
            !closed
        } else {
            closed
        }
    }
}

/// Deterministic pseudo-random contact noise.
fn chatter(now: u32) -> bool {
    (now.wrapping_mul(2_654_435_761) >> 16) & 1 == 1
}

impl embedded_hal::digital::v2::InputPin for BouncySwitch<'_> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(!self.closed_at(self.clock.millis()))
    }
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.closed_at(self.clock.millis()))
    }
}
