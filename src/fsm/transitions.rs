//! The transition table.
//!
//! ```text
//!  IDLE ──[±30]──▶ CONFIGURING ◀──[±30]
//!                      │
//!                   [start]
//!                      ▼
//!                   RUNNING ───[stop]───▶ PAUSED
//!                      │   ◀──[resume]──    │
//!                  [expired]            [expired]
//!                      ▼                    │
//!  IDLE ◀──[reset]── FINISHED ◀─────────────┘
//! ```
//!
//! Every entry returns a static action slice; there is no per-transition
//! allocation.  Pairs not listed here fall through to `None` and the
//! state stays put.

use super::{Action, Adjustment, Event, State, Transition};

const ADD: &[Action] = &[Action::AddTime];
const SUBTRACT: &[Action] = &[Action::SubtractTime];
const ADD_THEN_SUBTRACT: &[Action] = &[Action::AddTime, Action::SubtractTime];
const START: &[Action] = &[Action::StartCountdown];
const STOP: &[Action] = &[Action::StopCountdown];
const FINISH: &[Action] = &[Action::StopCountdown, Action::SoundFinish, Action::ShowZero];
const RESET: &[Action] = &[
    Action::ForceZero,
    Action::StopCountdown,
    Action::SilenceFinish,
];

/// Look up `(state, event)`.  `None` means "ignore, remain in `state`".
pub fn transition(state: State, event: Event) -> Option<Transition> {
    let (next, actions) = match (state, event) {
        (State::Idle | State::Configuring, Event::TimeAdjustRequested(adj)) => {
            (State::Configuring, adjust_actions(adj))
        }
        (State::Configuring, Event::StartRequested) => (State::Running, START),

        (State::Running, Event::StopRequested) => (State::Paused, STOP),
        (State::Running | State::Paused, Event::Expired) => (State::Finished, FINISH),

        (State::Paused, Event::ResumeRequested) => (State::Running, START),

        (State::Finished, Event::ResetRequested) => (State::Idle, RESET),

        _ => return None,
    };
    Some(Transition { next, actions })
}

/// Increment is applied before decrement when both pulsed.
fn adjust_actions(adj: Adjustment) -> &'static [Action] {
    match (adj.increment, adj.decrement) {
        (true, true) => ADD_THEN_SUBTRACT,
        (true, false) => ADD,
        (false, true) => SUBTRACT,
        (false, false) => &[],
    }
}
