//! Shared countdown timer.
//!
//! The only state shared between the two execution contexts:
//!
//! ```text
//! ┌──────────────────┐  add_30 / subtract_30 / force_zero   ┌─────────────┐
//! │  Control loop    │─────────── start / stop ────────────▶│             │
//! │  (main task)     │◀────────────── snapshot ─────────────│  Countdown  │
//! └──────────────────┘                                      │  (critical  │
//! ┌──────────────────┐                                      │   section)  │
//! │  Tick timer 1 Hz │──────────── decrement_one ──────────▶│             │
//! │  (esp_timer task)│                                      └─────────────┘
//! └──────────────────┘
//! ```
//!
//! Seconds and the running flag live in one `Cell` behind an
//! `embassy-sync` critical-section mutex.  Every operation, reads included,
//! is a single short critical section over a handful of integer operations,
//! so a tick can never interleave with a control-loop adjustment and neither
//! side ever observes a half-applied update.
//!
//! The tick is never torn down to pause the countdown; it keeps firing and
//! `decrement_one` is a no-op while the running flag is clear.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Amount added or removed by one press of the +30 / −30 buttons.
pub const ADJUST_STEP_SECS: u32 = 30;

/// A consistent copy of the countdown, taken under the lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownSnapshot {
    /// Seconds remaining.
    pub seconds: u32,
    /// Whether the periodic tick is allowed to decrement.
    pub running: bool,
}

impl CountdownSnapshot {
    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }
}

/// Remaining cook time plus the running flag, safe to share with the tick
/// timer callback.
pub struct Countdown {
    inner: Mutex<CriticalSectionRawMutex, Cell<CountdownSnapshot>>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// Zero seconds, not running.  `const` so the firmware can hold the
    /// countdown in a `static` the timer callback can reach.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(CountdownSnapshot {
                seconds: 0,
                running: false,
            })),
        }
    }

    // ── Control-loop operations ───────────────────────────────

    /// Add [`ADJUST_STEP_SECS`].  Returns the new value.
    pub fn add_30(&self) -> u32 {
        self.update(|s| {
            s.seconds = s.seconds.saturating_add(ADJUST_STEP_SECS);
            s.seconds
        })
    }

    /// Remove [`ADJUST_STEP_SECS`], flooring at zero.  Returns the new value.
    pub fn subtract_30(&self) -> u32 {
        self.update(|s| {
            s.seconds = s.seconds.saturating_sub(ADJUST_STEP_SECS);
            s.seconds
        })
    }

    /// Force the remaining time to zero.  The running flag is left alone;
    /// callers that also want to stop issue [`stop`](Self::stop).
    pub fn force_zero(&self) {
        self.update(|s| s.seconds = 0);
    }

    /// Allow the periodic tick to decrement.  A countdown already at zero
    /// never runs.  Returns the resulting flag.
    pub fn start(&self) -> bool {
        self.update(|s| {
            s.running = s.seconds > 0;
            s.running
        })
    }

    /// Forbid the periodic tick from decrementing.
    pub fn stop(&self) {
        self.update(|s| s.running = false);
    }

    /// Consistent `(seconds, running)` pair.
    pub fn snapshot(&self) -> CountdownSnapshot {
        self.inner.lock(Cell::get)
    }

    pub fn seconds(&self) -> u32 {
        self.snapshot().seconds
    }

    pub fn is_running(&self) -> bool {
        self.snapshot().running
    }

    // ── Tick-context operation ────────────────────────────────

    /// Remove one second.  Called only by the periodic tick source.
    ///
    /// No-op unless running and above zero.  Reaching exactly zero clears
    /// the running flag inside the same critical section; returns `true`
    /// for that one expiring tick.
    pub fn decrement_one(&self) -> bool {
        self.update(|s| {
            if !s.running || s.seconds == 0 {
                return false;
            }
            s.seconds -= 1;
            if s.seconds == 0 {
                s.running = false;
                return true;
            }
            false
        })
    }

    // ── Internal ──────────────────────────────────────────────

    /// Read-modify-write under the lock.
    fn update<R>(&self, f: impl FnOnce(&mut CountdownSnapshot) -> R) -> R {
        self.inner.lock(|cell| {
            let mut state = cell.get();
            let out = f(&mut state);
            cell.set(state);
            out
        })
    }
}
