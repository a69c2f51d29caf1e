//! Event generator: one consistent `(state, inputs, countdown)` tuple in,
//! exactly one [`Event`] out.
//!
//! Rules are evaluated per state in priority order; the first match wins
//! and no match yields [`Event::None`].
//!
//! | State       | Priority-ordered rules                                         |
//! |-------------|----------------------------------------------------------------|
//! | Idle        | ±30 pressed → `TimeAdjustRequested`                            |
//! | Configuring | ±30 pressed → `TimeAdjustRequested`; start ∧ closed ∧ s>0 → `StartRequested` |
//! | Running     | start → `StopRequested`; door open → `StopRequested`; s=0 → `Expired` |
//! | Paused      | s=0 → `Expired`; start ∧ closed ∧ s>0 → `ResumeRequested`      |
//! | Finished    | start → `ResetRequested`                                       |
//!
//! Pure: no side effects, no re-sampling.

use super::context::InputSnapshot;
use super::{Adjustment, Event, State};
use crate::countdown::CountdownSnapshot;

/// Classify one control cycle.
pub fn generate_event(
    state: State,
    inputs: &InputSnapshot,
    countdown: &CountdownSnapshot,
) -> Event {
    let can_start = inputs.start && inputs.door_closed && countdown.seconds > 0;

    match state {
        State::Idle => {
            if inputs.adjust_pressed() {
                return adjust(inputs);
            }
        }

        State::Configuring => {
            if inputs.adjust_pressed() {
                return adjust(inputs);
            }
            if can_start {
                return Event::StartRequested;
            }
        }

        State::Running => {
            if inputs.start || inputs.door_open {
                return Event::StopRequested;
            }
            if countdown.is_zero() {
                return Event::Expired;
            }
        }

        State::Paused => {
            if countdown.is_zero() {
                return Event::Expired;
            }
            if can_start {
                return Event::ResumeRequested;
            }
        }

        State::Finished => {
            if inputs.start {
                return Event::ResetRequested;
            }
        }
    }

    Event::None
}

fn adjust(inputs: &InputSnapshot) -> Event {
    Event::TimeAdjustRequested(Adjustment {
        increment: inputs.increment,
        decrement: inputs.decrement,
    })
}
