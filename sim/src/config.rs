/// Simulated run length in clock ticks (milliseconds).
pub const RUN_MS: u32 = 600;

/// How many times the main loop services every input per tick.
pub const POLLS_PER_TICK: u32 = 4;

/// Contacts chatter for this long after every press and release.
pub const BOUNCE_MS: u32 = 8;

pub struct InputConfig {
    pub name: &'static str,
    pub depth: u8,
    /// `(pressed_at, released_at)` in milliseconds.
    pub presses: &'static [(u32, u32)],
}

pub const INPUTS: [InputConfig; 3] = [
    InputConfig {
        name: "enter",
        depth: 10,
        presses: &[(50, 180), (300, 420)],
    },
    InputConfig {
        name: "tap",
        depth: 10,
        // shorter than the filter depth plus bounce; never reported
        presses: &[(100, 104)],
    },
    InputConfig {
        name: "raw",
        depth: 1,
        presses: &[(200, 260)],
    },
];
