//! End-to-end cooking scenarios through the control loop.
//!
//! Ticks are delivered straight to the countdown, standing in for the
//! 1 Hz timer, so every scenario is deterministic.

use microwave::app::events::AppEvent;
use microwave::countdown::Countdown;
use microwave::fsm::{Event, State};

use crate::mock_hw::{OutputCall, Rig};

// ── Setting the time ──────────────────────────────────────────

#[test]
fn increment_from_idle_configures_thirty_seconds() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    assert_eq!(rig.state(), State::Idle);

    rig.panel.press_increment();
    let report = rig.cycle();

    assert_eq!(report.state, State::Configuring);
    assert_eq!(report.countdown.seconds, 30);
    assert!(!report.countdown.running);
    assert_eq!(rig.out.displayed(), Some(30));
    assert!(rig.sink.events.contains(&AppEvent::CountdownAdjusted { seconds: 30 }));
}

// ── Starting ──────────────────────────────────────────────────

#[test]
fn start_while_configuring_runs_the_countdown() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.panel.press_increment();
    rig.cycle();

    rig.panel.press_start();
    let report = rig.cycle();

    assert_eq!(report.event, Event::StartRequested);
    assert_eq!(report.state, State::Running);
    assert!(countdown.is_running());
    assert_eq!(countdown.seconds(), 30);
}

// ── Expiry ────────────────────────────────────────────────────

#[test]
fn countdown_reaching_zero_finishes_with_buzzer() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);

    rig.tick(29);
    assert_eq!(rig.cycle().state, State::Running);
    assert_eq!(rig.out.displayed(), Some(1));

    rig.tick(1);
    assert!(!countdown.is_running(), "expiring tick clears the running flag");
    let report = rig.cycle();

    assert_eq!(report.event, Event::Expired);
    assert_eq!(report.state, State::Finished);
    assert_eq!(rig.out.count(OutputCall::SoundFinish), 1);
    assert!(rig.out.buzzer_on());
    assert_eq!(rig.out.displayed(), Some(0));

    // Further ticks and cycles change nothing.
    rig.tick(5);
    rig.cycle();
    assert_eq!(rig.state(), State::Finished);
    assert_eq!(countdown.seconds(), 0);
    assert_eq!(rig.out.count(OutputCall::SoundFinish), 1);
}

// ── Door interlock ────────────────────────────────────────────

#[test]
fn opening_the_door_pauses_and_freezes_time() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(2);
    rig.tick(5);

    rig.panel.open_door();
    let report = rig.cycle();
    assert_eq!(report.event, Event::StopRequested);
    assert_eq!(report.state, State::Paused);
    assert_eq!(report.countdown.seconds, 55);

    rig.tick(10);
    for _ in 0..3 {
        rig.cycle();
    }
    assert_eq!(rig.state(), State::Paused);
    assert_eq!(countdown.seconds(), 55);
    assert_eq!(rig.out.displayed(), Some(55));
}

#[test]
fn start_with_door_open_does_not_resume() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);
    rig.panel.open_door();
    rig.cycle();

    rig.panel.press_start();
    assert_eq!(rig.cycle().state, State::Paused);

    rig.panel.close_door();
    rig.cycle();
    assert_eq!(rig.state(), State::Paused, "closing alone does not resume");

    rig.panel.press_start();
    let report = rig.cycle();
    assert_eq!(report.event, Event::ResumeRequested);
    assert_eq!(report.state, State::Running);
    assert!(countdown.is_running());
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn start_after_finish_returns_to_idle_with_zero() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);
    rig.tick(30);
    rig.cycle();
    assert_eq!(rig.state(), State::Finished);

    rig.panel.press_start();
    let report = rig.cycle();

    assert_eq!(report.event, Event::ResetRequested);
    assert_eq!(report.state, State::Idle);
    assert_eq!(report.countdown.seconds, 0);
    assert!(!report.countdown.running);
    assert!(!rig.out.buzzer_on());
    assert_eq!(rig.out.displayed(), None);
}

#[test]
fn full_cycle_event_log() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);
    rig.panel.press_start(); // pause
    rig.cycle();
    rig.panel.press_start(); // resume
    rig.cycle();
    rig.tick(30);
    rig.cycle();
    rig.panel.press_start(); // reset
    rig.cycle();

    let path: Vec<(State, State)> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::StateChanged { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        path,
        [
            (State::Idle, State::Configuring),
            (State::Configuring, State::Running),
            (State::Running, State::Paused),
            (State::Paused, State::Running),
            (State::Running, State::Finished),
            (State::Finished, State::Idle),
        ]
    );
    assert_eq!(rig.sink.events[0], AppEvent::Started(State::Idle));
}
