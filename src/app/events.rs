//! Outbound application events.
//!
//! The [`ControlLoop`](super::control_loop::ControlLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port.

use crate::fsm::{Event, State};

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The control loop has started (carries initial state).
    Started(State),

    /// The FSM moved between two different states.
    StateChanged { from: State, to: State, event: Event },

    /// A ±30 adjustment was applied; carries the new remaining time.
    CountdownAdjusted { seconds: u32 },
}
