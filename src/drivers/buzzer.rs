//! Finish buzzer.
//!
//! `sound` switches the pin on and arms an auto-off deadline; `poll`,
//! called every cycle, switches it off once the deadline passes.  Nothing
//! here ever sleeps.
//!
//! On ESP-IDF: drives the buzzer GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use log::{debug, info};

use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerState {
    Off,
    Sounding { since_ms: u32 },
}

pub struct BuzzerDriver {
    duration_ms: u32,
    state: BuzzerState,
}

impl BuzzerDriver {
    pub fn new(duration_ms: u32) -> Self {
        hw_init::gpio_write(pins::BUZZER_GPIO, false);
        Self {
            duration_ms,
            state: BuzzerState::Off,
        }
    }

    /// Start (or restart) the finish signal.
    pub fn sound(&mut self, now_ms: u32) {
        hw_init::gpio_write(pins::BUZZER_GPIO, true);
        self.state = BuzzerState::Sounding { since_ms: now_ms };
        info!("buzzer: on for {} ms", self.duration_ms);
    }

    /// Switch off if the signal has run its course.
    pub fn poll(&mut self, now_ms: u32) {
        if let BuzzerState::Sounding { since_ms } = self.state {
            if now_ms.wrapping_sub(since_ms) >= self.duration_ms {
                self.off();
                debug!("buzzer: auto-off");
            }
        }
    }

    /// Cancel immediately.
    pub fn silence(&mut self) {
        if self.is_on() {
            self.off();
            debug!("buzzer: silenced");
        }
    }

    fn off(&mut self) {
        hw_init::gpio_write(pins::BUZZER_GPIO, false);
        self.state = BuzzerState::Off;
    }

    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, BuzzerState::Sounding { .. })
    }
}
