//! Mock panel and output adapters for integration tests.
//!
//! Records every output call and emitted event so tests can assert on the
//! full history without touching real GPIO.

use microwave::app::control_loop::{ControlLoop, CycleReport};
use microwave::app::events::AppEvent;
use microwave::app::ports::{EventSink, InputSource, OutputSink};
use microwave::countdown::Countdown;
use microwave::fsm::State;
use microwave::fsm::context::InputSnapshot;

// ── MockPanel ─────────────────────────────────────────────────

/// Debounced panel stand-in.  `press_*` queues a one-cycle pulse for the
/// next read; the door level persists until changed.
pub struct MockPanel {
    pending: InputSnapshot,
    door_closed: bool,
}

#[allow(dead_code)]
impl MockPanel {
    pub fn new() -> Self {
        Self {
            pending: InputSnapshot::door_closed(),
            door_closed: true,
        }
    }

    pub fn press_increment(&mut self) {
        self.pending.increment = true;
    }

    pub fn press_decrement(&mut self) {
        self.pending.decrement = true;
    }

    pub fn press_start(&mut self) {
        self.pending.start = true;
    }

    pub fn open_door(&mut self) {
        self.door_closed = false;
    }

    pub fn close_door(&mut self) {
        self.door_closed = true;
    }
}

impl InputSource for MockPanel {
    fn read_inputs(&mut self) -> InputSnapshot {
        let pulses = std::mem::replace(&mut self.pending, InputSnapshot::door_closed());
        InputSnapshot {
            increment: pulses.increment,
            decrement: pulses.decrement,
            start: pulses.start,
            ..InputSnapshot::with_door(self.door_closed)
        }
    }
}

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    ShowSeconds(u32),
    ShowZero,
    SoundFinish,
    Silence,
    Clear,
}

#[derive(Default)]
pub struct MockOutputs {
    pub calls: Vec<OutputCall>,
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn count(&self, call: OutputCall) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }

    /// What the display shows after the last call; `None` when blank.
    pub fn displayed(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|c| match c {
            OutputCall::ShowSeconds(s) => Some(Some(*s)),
            OutputCall::ShowZero => Some(Some(0)),
            OutputCall::Clear => Some(None),
            _ => None,
        })?
    }

    pub fn buzzer_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                OutputCall::SoundFinish => Some(true),
                OutputCall::Silence => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl OutputSink for MockOutputs {
    fn show_seconds(&mut self, seconds: u32) {
        self.calls.push(OutputCall::ShowSeconds(seconds));
    }

    fn show_zero(&mut self) {
        self.calls.push(OutputCall::ShowZero);
    }

    fn sound_finish(&mut self) {
        self.calls.push(OutputCall::SoundFinish);
    }

    fn silence(&mut self) {
        self.calls.push(OutputCall::Silence);
    }

    fn clear(&mut self) {
        self.calls.push(OutputCall::Clear);
    }
}

// ── Event recorder ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// A started control loop wired to the mocks above.
pub struct Rig<'c> {
    pub ctl: ControlLoop<'c>,
    pub panel: MockPanel,
    pub out: MockOutputs,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl<'c> Rig<'c> {
    pub fn new(countdown: &'c Countdown) -> Self {
        let mut sink = RecordingSink::default();
        let mut ctl = ControlLoop::new(countdown);
        ctl.start(&mut sink);
        Self {
            ctl,
            panel: MockPanel::new(),
            out: MockOutputs::default(),
            sink,
        }
    }

    pub fn cycle(&mut self) -> CycleReport {
        self.ctl.cycle(&mut self.panel, &mut self.out, &mut self.sink)
    }

    pub fn state(&self) -> State {
        self.ctl.state()
    }

    /// Deliver `n` periodic ticks straight to the countdown.
    pub fn tick(&self, n: u32) {
        for _ in 0..n {
            self.ctl.countdown().decrement_one();
        }
    }

    /// Idle → Configuring with `presses` × 30 s, then Running.
    pub fn start_cook(&mut self, presses: u32) {
        for _ in 0..presses {
            self.panel.press_increment();
            self.cycle();
        }
        self.panel.press_start();
        self.cycle();
    }
}
