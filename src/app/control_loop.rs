//! Control loop: the orchestrating core.
//!
//! [`ControlLoop`] owns the FSM and borrows the shared [`Countdown`].  One
//! call to [`cycle`](ControlLoop::cycle) runs the full
//! evaluate → transition → notify sequence and never blocks:
//!
//! ```text
//!  InputSource ──▶ ┌──────────────────────────────────────┐ ──▶ OutputSink
//!                  │ snapshot → generate_event → dispatch │
//!   Countdown  ◀──▶│   → actions → re-snapshot → refresh  │ ──▶ EventSink
//!                  └──────────────────────────────────────┘
//! ```

use std::time::Duration;

use log::info;

use crate::countdown::{Countdown, CountdownSnapshot};
use crate::fsm::generator::generate_event;
use crate::fsm::{Action, Event, Fsm, State};

use super::events::AppEvent;
use super::ports::{EventSink, InputSource, OutputSink};

/// What one cycle observed and produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Event the generator derived this cycle.
    pub event: Event,
    /// State after the transition (unchanged if none applied).
    pub state: State,
    /// Countdown re-read after actions ran.
    pub countdown: CountdownSnapshot,
}

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

/// The appliance controller: one owned context passed through every cycle.
pub struct ControlLoop<'c> {
    fsm: Fsm,
    countdown: &'c Countdown,
    cycle_count: u64,
}

impl<'c> ControlLoop<'c> {
    /// Start in Idle against `countdown`.  The countdown is expected to be
    /// fresh (0 s, stopped); it is not touched here.
    pub fn new(countdown: &'c Countdown) -> Self {
        Self {
            fsm: Fsm::new(State::Idle),
            countdown,
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, events: &mut impl EventSink) {
        events.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("ControlLoop started in {}", self.fsm.current_state().name());
    }

    /// Cycle forever at `interval`.  Never returns.
    pub fn run_forever(
        &mut self,
        input: &mut impl InputSource,
        output: &mut impl OutputSink,
        events: &mut impl EventSink,
        interval: Duration,
    ) -> ! {
        loop {
            self.cycle(input, output, events);
            std::thread::sleep(interval);
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle.
    pub fn cycle(
        &mut self,
        input: &mut impl InputSource,
        output: &mut impl OutputSink,
        events: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle_count = self.cycle_count.wrapping_add(1);
        let prev_state = self.fsm.current_state();

        // 1. One consistent (state, inputs, countdown) tuple
        let inputs = input.read_inputs();
        let before = self.countdown.snapshot();

        // 2. Classify
        let event = generate_event(prev_state, &inputs, &before);

        // 3. Transition + actions
        if let Some(actions) = self.fsm.dispatch(event) {
            let mut adjusted = false;
            for &action in actions {
                adjusted |= self.perform(action, output);
            }
            if adjusted {
                events.emit(&AppEvent::CountdownAdjusted {
                    seconds: self.countdown.seconds(),
                });
            }
        }

        // 4. Actions may have changed the countdown; re-read before notifying
        let after = self.countdown.snapshot();
        let state = self.fsm.current_state();
        refresh_outputs(state, &after, output);

        if state != prev_state {
            events.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: state,
                event,
            });
        }

        CycleReport {
            event,
            state,
            countdown: after,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state.
    pub fn state(&self) -> State {
        self.fsm.current_state()
    }

    /// Total control cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Number of table transitions taken since startup.
    pub fn transition_count(&self) -> u64 {
        self.fsm.transition_count()
    }

    /// The shared countdown this loop drives.
    pub fn countdown(&self) -> &'c Countdown {
        self.countdown
    }

    // ── Internal ──────────────────────────────────────────────

    /// Execute one transition action.  Returns `true` for time adjustments.
    fn perform(&self, action: Action, output: &mut impl OutputSink) -> bool {
        match action {
            Action::AddTime => {
                self.countdown.add_30();
                true
            }
            Action::SubtractTime => {
                self.countdown.subtract_30();
                true
            }
            Action::StartCountdown => {
                self.countdown.start();
                false
            }
            Action::StopCountdown => {
                self.countdown.stop();
                false
            }
            Action::ForceZero => {
                self.countdown.force_zero();
                false
            }
            Action::SoundFinish => {
                output.sound_finish();
                false
            }
            Action::ShowZero => {
                output.show_zero();
                false
            }
            Action::SilenceFinish => {
                output.silence();
                false
            }
        }
    }
}

/// Per-state display refresh with the post-action snapshot.
fn refresh_outputs(state: State, countdown: &CountdownSnapshot, output: &mut impl OutputSink) {
    match state {
        State::Configuring | State::Running | State::Paused => {
            output.show_seconds(countdown.seconds);
        }
        State::Finished => output.show_zero(),
        State::Idle => output.clear(),
    }
}
