//! Application core: pure control logic, zero I/O.
//!
//! The [`control_loop`] drives the FSM against the shared countdown.  All
//! interaction with buttons, door switch, display and buzzer happens
//! through the **port traits** in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod control_loop;
pub mod events;
pub mod ports;
