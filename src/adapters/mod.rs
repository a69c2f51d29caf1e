//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                        |
//! |------------|--------------|------------------------------------|
//! | `hardware` | InputSource  | Panel GPIO via debouncer           |
//! |            | OutputSink   | Display + buzzer                   |
//! | `log_sink` | EventSink    | Serial log output                  |
//! | `time`     | (clock)      | ESP32 system timer / `Instant`     |

pub mod hardware;
pub mod log_sink;
pub mod time;
