//! GPIO / peripheral pin assignments for the microwave control board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.
//!
//! All panel inputs are wired active-low against the internal pull-ups.

// ---------------------------------------------------------------------------
// Front-panel buttons (momentary, pressed = LOW)
// ---------------------------------------------------------------------------

/// +30 s button.
pub const PLUS_30_GPIO: i32 = 4;
/// −30 s button.
pub const MINUS_30_GPIO: i32 = 5;
/// Start / stop / reset button.
pub const START_GPIO: i32 = 6;

/// Every button input, in panel order.
pub const BUTTON_GPIOS: [i32; 3] = [PLUS_30_GPIO, MINUS_30_GPIO, START_GPIO];

// ---------------------------------------------------------------------------
// Door switch
// ---------------------------------------------------------------------------

/// Reed switch on the door.  LOW = door closed (magnet present).
pub const DOOR_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Piezo buzzer driver transistor (active HIGH).
pub const BUZZER_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// Display bus (I²C character panel)
// ---------------------------------------------------------------------------

pub const DISPLAY_SDA_GPIO: i32 = 8;
pub const DISPLAY_SCL_GPIO: i32 = 9;
