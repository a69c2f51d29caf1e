//! Panel, display and buzzer drivers, hardware initialisation, and the
//! countdown tick source.

pub mod buzzer;
pub mod debounce;
pub mod display;
pub mod hw_init;
pub mod hw_timer;
pub mod panel;
