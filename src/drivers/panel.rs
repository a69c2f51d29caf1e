//! Front panel: three buttons and the door switch, debounced together.
//!
//! Buttons become one-cycle pulses on their debounced press edge.  The door
//! reports its debounced level.  Callers pass *active* levels (pressed,
//! closed); pin polarity is the adapter's concern.

use crate::fsm::context::InputSnapshot;

use super::debounce::{DebouncedInput, Edge};

/// Raw active levels of every panel input for one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawPanel {
    pub increment: bool,
    pub decrement: bool,
    pub start: bool,
    pub door_closed: bool,
}

pub struct ControlPanel {
    increment: DebouncedInput,
    decrement: DebouncedInput,
    start: DebouncedInput,
    door: DebouncedInput,
}

impl ControlPanel {
    /// Every input starts at its boot-time reading, so a button held
    /// through power-on never pulses and the door needs no settling.
    pub fn new(debounce_ms: u32, initial: RawPanel) -> Self {
        Self {
            increment: DebouncedInput::new(debounce_ms, initial.increment),
            decrement: DebouncedInput::new(debounce_ms, initial.decrement),
            start: DebouncedInput::new(debounce_ms, initial.start),
            door: DebouncedInput::new(debounce_ms, initial.door_closed),
        }
    }

    pub fn sample(&mut self, raw: RawPanel, now_ms: u32) -> InputSnapshot {
        let increment = pressed(self.increment.sample(raw.increment, now_ms));
        let decrement = pressed(self.decrement.sample(raw.decrement, now_ms));
        let start = pressed(self.start.sample(raw.start, now_ms));

        if let Some(edge) = self.door.sample(raw.door_closed, now_ms) {
            log::debug!("panel: door {}", if edge == Edge::Rising { "closed" } else { "opened" });
        }

        InputSnapshot {
            increment,
            decrement,
            start,
            ..InputSnapshot::with_door(self.door.level())
        }
    }

    pub fn door_closed(&self) -> bool {
        self.door.level()
    }
}

fn pressed(edge: Option<Edge>) -> bool {
    edge == Some(Edge::Rising)
}
