//! Monotonic tick counter abstraction.
//!
//! One tick is one millisecond ([`TICK_HZ`] = 1000). The counter wraps at
//! `u32::MAX`; consumers must compare intervals with `wrapping_sub` so a
//! wraparound mid-interval does not produce a bogus result.

/// Tick frequency in Hz. One tick is one millisecond.
pub const TICK_HZ: u32 = 1_000;

/// Read access to the system tick counter.
pub trait TickSource {
    /// Current tick count. Monotonic, wraps at `u32::MAX`.
    fn ticks(&self) -> u32;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_wrapping_interval_across_overflow() {
        // A timestamp taken just before wraparound compared against one
        // taken just after must still yield a small interval.
        let before: u32 = u32::MAX - 100;
        let after: u32 = 50;
        assert_eq!(after.wrapping_sub(before), 151);
    }
}
