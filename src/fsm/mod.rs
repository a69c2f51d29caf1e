//! Table-driven finite state machine for the appliance.
//!
//! Classic embedded FSM pattern expressed as a Rust `match`:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Transition table  (State × Event) → Option<Transition>      │
//! │  ┌─────────────┬──────────────────┬─────────────┬─────────┐  │
//! │  │ State       │ Event            │ Next        │ Actions │  │
//! │  ├─────────────┼──────────────────┼─────────────┼─────────┤  │
//! │  │ Idle        │ TimeAdjust       │ Configuring │ ±30     │  │
//! │  │ Configuring │ TimeAdjust       │ Configuring │ ±30     │  │
//! │  │ Configuring │ StartRequested   │ Running     │ start   │  │
//! │  │ Running     │ StopRequested    │ Paused      │ stop    │  │
//! │  │ Running     │ Expired          │ Finished    │ finish  │  │
//! │  │ Paused      │ ResumeRequested  │ Running     │ start   │  │
//! │  │ Paused      │ Expired          │ Finished    │ finish  │  │
//! │  │ Finished    │ ResetRequested   │ Idle        │ reset   │  │
//! │  └─────────────┴──────────────────┴─────────────┴─────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each control cycle the [`generator`] classifies the inputs into one
//! [`Event`]; [`Fsm::dispatch`] looks it up in the [`transitions`] table.
//! A hit moves the current state and hands back the ordered [`Action`]s
//! for the control loop to execute.  A miss leaves everything untouched.
//! Unlisted pairs are silent no-ops, never faults.

pub mod context;
pub mod generator;
pub mod transitions;

use log::{debug, info};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all possible appliance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    Idle = 0,
    Configuring = 1,
    Running = 2,
    Paused = 3,
    Finished = 4,
}

impl State {
    /// Total number of states.
    pub const COUNT: usize = 5;

    /// Every state, in discriminant order.
    pub const ALL: [State; State::COUNT] = [
        State::Idle,
        State::Configuring,
        State::Running,
        State::Paused,
        State::Finished,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Configuring => "Configuring",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Finished => "Finished",
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Which adjustment buttons pulsed in the cycle that produced a
/// [`Event::TimeAdjustRequested`].  Both may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustment {
    pub increment: bool,
    pub decrement: bool,
}

/// The single discrete event derived from one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing to do this cycle; no transition is attempted.
    None,
    /// +30 and/or −30 pressed.
    TimeAdjustRequested(Adjustment),
    /// Start pressed with the door closed and time set.
    StartRequested,
    /// Door opened or start pressed while running.
    StopRequested,
    /// Start pressed with the door closed while paused.
    ResumeRequested,
    /// Countdown reached zero.
    Expired,
    /// Start pressed on the finished screen.
    ResetRequested,
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Side effects a transition asks the control loop to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Countdown += 30 s.
    AddTime,
    /// Countdown −= 30 s, floored at zero.
    SubtractTime,
    /// Set the running flag (enables the periodic decrement).
    StartCountdown,
    /// Clear the running flag.
    StopCountdown,
    /// Force the countdown to zero.
    ForceZero,
    /// Sound the finish buzzer.
    SoundFinish,
    /// Draw 00:00 immediately.
    ShowZero,
    /// Cancel any pending finish buzzer.
    SilenceFinish,
}

/// Result of a table hit: where to go and what to do on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub actions: &'static [Action],
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns only the current state and a transition counter; the table itself
/// is the pure function [`transitions::transition`].
pub struct Fsm {
    current: State,
    /// Number of table hits since construction (self-loops included).
    transitions: u64,
}

impl Fsm {
    /// Construct a new FSM starting in `initial`.
    pub fn new(initial: State) -> Self {
        Self {
            current: initial,
            transitions: 0,
        }
    }

    /// Apply `event` to the current state.
    ///
    /// Returns the ordered actions to execute when the table has an entry,
    /// or `None` (state unchanged) when it does not.
    pub fn dispatch(&mut self, event: Event) -> Option<&'static [Action]> {
        let Some(t) = transitions::transition(self.current, event) else {
            if event != Event::None {
                debug!("FSM: {:?} ignored in {}", event, self.current.name());
            }
            return None;
        };

        if t.next != self.current {
            info!(
                "FSM transition: {} -> {} ({:?})",
                self.current.name(),
                t.next.name(),
                event
            );
        }
        self.current = t.next;
        self.transitions = self.transitions.wrapping_add(1);
        Some(t.actions)
    }

    /// The current state's identity.
    pub fn current_state(&self) -> State {
        self.current
    }

    /// How many transitions (including self-loops) have been taken.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }
}
