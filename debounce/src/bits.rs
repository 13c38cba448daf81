/// Sample history word. Only the low `filter_depth` bits are significant.
pub type Bitmask = u32;

/// Number of bits in [`Bitmask`]; the upper bound for a filter depth.
pub const BITMASK_WIDTH: u8 = 32;

/// Mask with bits `[0, depth)` set. Depths past the word width saturate.
pub(crate) const fn low_bits(depth: u8) -> Bitmask {
    if depth >= BITMASK_WIDTH {
        Bitmask::MAX
    } else {
        (1 << depth) - 1
    }
}

/// Seed pattern with every odd bit below `depth` set, e.g. `0b1010` for 4.
///
/// Neither all-zero nor all-ones for any depth above 1, so a fresh history
/// never reads as settled.
pub(crate) const fn alternating(depth: u8) -> Bitmask {
    0xAAAA_AAAA & low_bits(depth)
}

/// Shifts `bit` into position 0 and drops everything outside `mask`.
pub(crate) const fn shift_in(history: Bitmask, bit: bool, mask: Bitmask) -> Bitmask {
    ((history << 1) | bit as Bitmask) & mask
}
