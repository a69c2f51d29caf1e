//! Control-loop behaviour at the edges of the transition table.

use std::time::{Duration, Instant};

use microwave::app::events::AppEvent;
use microwave::countdown::Countdown;
use microwave::drivers::hw_timer::TickTimer;
use microwave::fsm::{Adjustment, Event, State};

use crate::mock_hw::{OutputCall, Rig};

#[test]
fn start_emits_initial_state_only() {
    let countdown = Countdown::new();
    let rig = Rig::new(&countdown);
    assert_eq!(rig.sink.events, [AppEvent::Started(State::Idle)]);
    assert_eq!(rig.ctl.cycle_count(), 0);
}

#[test]
fn idle_cycles_are_quiet() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    for _ in 0..10 {
        assert_eq!(rig.cycle().event, Event::None);
    }
    assert_eq!(rig.sink.events.len(), 1);
    assert_eq!(rig.ctl.cycle_count(), 10);
    assert_eq!(rig.ctl.transition_count(), 0);
    assert_eq!(rig.out.count(OutputCall::Clear), 10);
}

#[test]
fn both_adjust_buttons_net_to_zero() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.panel.press_increment();
    rig.panel.press_decrement();
    let report = rig.cycle();

    assert_eq!(
        report.event,
        Event::TimeAdjustRequested(Adjustment {
            increment: true,
            decrement: true
        })
    );
    assert_eq!(report.state, State::Configuring);
    assert_eq!(report.countdown.seconds, 0);
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::StateChanged {
            from: State::Idle,
            to: State::Configuring,
            event: report.event,
        })
    );
}

#[test]
fn decrement_floors_at_zero() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.panel.press_increment();
    rig.cycle();
    for _ in 0..3 {
        rig.panel.press_decrement();
        rig.cycle();
    }
    assert_eq!(countdown.seconds(), 0);
    assert_eq!(rig.state(), State::Configuring);
}

#[test]
fn start_refused_at_zero_seconds() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.panel.press_increment();
    rig.cycle();
    rig.panel.press_decrement();
    rig.cycle();

    rig.panel.press_start();
    let report = rig.cycle();
    assert_eq!(report.event, Event::None);
    assert_eq!(report.state, State::Configuring);
    assert!(!countdown.is_running());
}

#[test]
fn start_refused_with_door_open() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.panel.press_increment();
    rig.cycle();
    rig.panel.open_door();
    rig.panel.press_start();
    assert_eq!(rig.cycle().state, State::Configuring);
}

#[test]
fn adjustments_ignored_while_running() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);
    rig.panel.press_increment();
    let report = rig.cycle();
    assert_eq!(report.event, Event::None);
    assert_eq!(countdown.seconds(), 30);
}

#[test]
fn paused_countdown_forced_to_zero_finishes() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);
    rig.panel.press_start();
    rig.cycle();
    assert_eq!(rig.state(), State::Paused);

    countdown.force_zero();
    let report = rig.cycle();
    assert_eq!(report.event, Event::Expired);
    assert_eq!(report.state, State::Finished);
    assert!(rig.out.buzzer_on());
}

#[test]
fn finish_actions_run_in_order_before_refresh() {
    let countdown = Countdown::new();
    let mut rig = Rig::new(&countdown);
    rig.start_cook(1);
    rig.tick(30);
    rig.out.calls.clear();

    rig.cycle();
    assert_eq!(
        rig.out.calls,
        [OutputCall::SoundFinish, OutputCall::ShowZero, OutputCall::ShowZero]
    );
}

#[test]
fn cook_with_real_tick_timer_finishes() {
    let countdown: &'static Countdown = Box::leak(Box::new(Countdown::new()));
    let _timer = TickTimer::start(countdown, 1).unwrap();
    let mut rig = Rig::new(countdown);
    rig.start_cook(1);
    assert_eq!(rig.state(), State::Running);

    let deadline = Instant::now() + Duration::from_secs(10);
    while rig.state() == State::Running && Instant::now() < deadline {
        rig.cycle();
        std::thread::sleep(Duration::from_millis(1));
    }

    assert_eq!(rig.state(), State::Finished);
    assert_eq!(countdown.seconds(), 0);
    assert_eq!(rig.out.count(OutputCall::SoundFinish), 1);
}
