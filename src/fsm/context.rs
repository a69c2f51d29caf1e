//! Per-cycle input record read by the event generator.
//!
//! An [`InputSnapshot`] is sampled once at the top of each control cycle
//! and never re-read during evaluation.  Together with a
//! [`CountdownSnapshot`](crate::countdown::CountdownSnapshot) it forms the
//! single consistent tuple the event generator classifies.

// ---------------------------------------------------------------------------
// Input snapshot (produced by the InputSource; read-only to the core)
// ---------------------------------------------------------------------------

/// Debounced panel and door state for one control cycle.
///
/// Button fields are **edge pulses**: true for exactly one cycle per
/// physical press.  Door fields are **levels** and always complementary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    /// +30 s button pressed this cycle.
    pub increment: bool,
    /// −30 s button pressed this cycle.
    pub decrement: bool,
    /// Start/stop button pressed this cycle.
    pub start: bool,
    /// Door is open (stable level).
    pub door_open: bool,
    /// Door is closed (stable level).
    pub door_closed: bool,
}

impl InputSnapshot {
    /// No button pressed, door closed.
    pub const fn door_closed() -> Self {
        Self::with_door(true)
    }

    /// No button pressed, door open.
    pub const fn door_open() -> Self {
        Self::with_door(false)
    }

    /// No button pressed, door at the given level.
    pub const fn with_door(closed: bool) -> Self {
        Self {
            increment: false,
            decrement: false,
            start: false,
            door_open: !closed,
            door_closed: closed,
        }
    }

    /// True if either adjustment button pulsed.
    pub fn adjust_pressed(&self) -> bool {
        self.increment || self.decrement
    }
}
