//! Port traits: the hexagonal boundary between the control core and the
//! outside world.
//!
//! ```text
//!   InputSource ──▶ ControlLoop (core) ──▶ OutputSink
//!                         │
//!                         └──▶ EventSink
//! ```
//!
//! Driven adapters (debounced GPIO panel, display + buzzer, log) implement
//! these traits.  The [`ControlLoop`](super::control_loop::ControlLoop)
//! consumes them via generics, so the core never touches hardware directly
//! and runs unchanged against mocks on the host.

use crate::fsm::context::InputSnapshot;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: panel → core)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the core calls this exactly once per control cycle.
pub trait InputSource {
    /// Sample the debounced panel.  Button fields are one-cycle pulses,
    /// door fields are complementary levels.
    fn read_inputs(&mut self) -> InputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: core → display / buzzer)
// ───────────────────────────────────────────────────────────────

/// Write-side port: abstract display and buzzer requests.
///
/// Every method is idempotent and must return without blocking; the
/// adapter owns its own refresh throttling and buzzer timing.
pub trait OutputSink {
    /// Show the remaining time.
    fn show_seconds(&mut self, seconds: u32);

    /// Show 00:00 immediately.
    fn show_zero(&mut self);

    /// Start the finish signal.
    fn sound_finish(&mut self);

    /// Cancel any pending finish signal.
    fn silence(&mut self);

    /// Blank the display.
    fn clear(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: core → logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
