//! Time-based debouncer for one digital input.
//!
//! The raw level must hold steady for the full debounce window before the
//! stable level follows it.  Any raw change restarts the window, so contact
//! bounce shorter than the window never produces an edge.
//!
//! ```text
//!  raw     ‾‾|_|‾|__________________|‾|_|‾‾‾‾‾‾‾‾‾‾‾‾‾
//!  stable  ‾‾‾‾‾‾‾‾‾‾‾‾|_______________________|‾‾‾‾‾
//!                      ▲ Falling               ▲ Rising
//!               (window after last bounce)
//! ```
//!
//! `sample` is driven by the control loop at its own cadence, and
//! timestamps are wrapping `u32` milliseconds.

/// A change of the debounced level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

pub struct DebouncedInput {
    window_ms: u32,
    stable: bool,
    last_raw: bool,
    last_change_ms: u32,
}

impl DebouncedInput {
    /// Create with the stable level already at `initial`.
    pub fn new(window_ms: u32, initial: bool) -> Self {
        Self {
            window_ms,
            stable: initial,
            last_raw: initial,
            last_change_ms: 0,
        }
    }

    /// Feed one raw reading taken at `now_ms`.
    pub fn sample(&mut self, raw: bool, now_ms: u32) -> Option<Edge> {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_ms = now_ms;
            return None;
        }

        if raw == self.stable || now_ms.wrapping_sub(self.last_change_ms) < self.window_ms {
            return None;
        }

        self.stable = raw;
        Some(if raw { Edge::Rising } else { Edge::Falling })
    }

    /// Debounced level.
    pub fn level(&self) -> bool {
        self.stable
    }
}
