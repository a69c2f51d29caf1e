//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={}", state.name());
            }
            AppEvent::StateChanged { from, to, event } => {
                info!("STATE | {} -> {} | on {:?}", from.name(), to.name(), event);
            }
            AppEvent::CountdownAdjusted { seconds } => {
                info!("TIME  | {} s remaining", seconds);
            }
        }
    }
}
