use crate::bits::{self, Bitmask, BITMASK_WIDTH};

/// What the sample history currently says about the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncerState {
    Low,
    High,
    Unknown,
}

/// Shift-register history of raw samples plus the settled state derived from it.
///
/// A `Filter` has no notion of time; every call to [`Filter::sample`] shifts in
/// exactly one sample. [`crate::Debouncer`] wraps it with a tick gate.
#[derive(Debug, Clone)]
pub struct Filter {
    depth: u8,
    mask: Bitmask,
    history: Bitmask,
    state: bool,
}

impl Filter {
    /// Creates a filter needing `depth` agreeing samples to settle.
    ///
    /// `depth` is clamped to [`BITMASK_WIDTH`]. A depth of 0 makes every sample
    /// settle low.
    pub const fn new(depth: u8) -> Filter {
        let depth = if depth > BITMASK_WIDTH {
            BITMASK_WIDTH
        } else {
            depth
        };

        Filter {
            depth,
            mask: bits::low_bits(depth),
            history: bits::alternating(depth),
            state: false,
        }
    }

    /// Shifts in one raw sample. Returns the new settled state if it changed.
    pub fn sample(&mut self, level: bool) -> Option<bool> {
        self.history = bits::shift_in(self.history, level, self.mask);

        let settled = match self.decision() {
            DebouncerState::Low => false,
            DebouncerState::High => true,
            DebouncerState::Unknown => return None,
        };

        if settled == self.state {
            return None;
        }

        self.state = settled;
        Some(settled)
    }

    /// Classifies the current history. The all-zero check wins, so a zero
    /// mask always reads as low.
    pub fn decision(&self) -> DebouncerState {
        if self.history == 0 {
            DebouncerState::Low
        } else if self.history & self.mask == self.mask {
            DebouncerState::High
        } else {
            DebouncerState::Unknown
        }
    }

    /// Last settled state. `false` until the first high settle.
    pub fn state(&self) -> bool {
        self.state
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn mask(&self) -> Bitmask {
        self.mask
    }

    pub fn history(&self) -> Bitmask {
        self.history
    }
}
