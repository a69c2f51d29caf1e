//! Microwave Controller Firmware: Main Entry Point
//!
//! Hexagonal architecture with a polled control loop and a 1 Hz tick.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            LogEventSink      MonotonicClock   │
//! │  (PanelInputs+PanelOutputs) (EventSink)       (uptime)         │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              ControlLoop (pure logic)                  │    │
//! │  │  Event generator · FSM · transition actions            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                              │                                 │
//! │                   static COUNTDOWN ◀── TickTimer (esp_timer)   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::info;

use microwave::adapters::hardware::HardwareAdapter;
use microwave::adapters::log_sink::LogEventSink;
use microwave::app::control_loop::ControlLoop;
use microwave::config::ApplianceConfig;
use microwave::countdown::Countdown;
use microwave::drivers::hw_init;
use microwave::drivers::hw_timer::TickTimer;

/// Shared between the control loop and the tick timer callback.
static COUNTDOWN: Countdown = Countdown::new();

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Microwave controller v{}         ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ApplianceConfig::compiled()?;
    info!("Config: {:?}", config);

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without the panel the appliance cannot be operated safely.
        log::error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Tick source ────────────────────────────────────────
    let _tick = TickTimer::start(&COUNTDOWN, config.tick_period_ms)?;

    // ── 5. Adapters + control loop ────────────────────────────
    let mut hw = HardwareAdapter::new(&config);
    let (inputs, outputs) = hw.split();
    let mut log_sink = LogEventSink::new();
    let mut control = ControlLoop::new(&COUNTDOWN);
    control.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    control.run_forever(
        inputs,
        outputs,
        &mut log_sink,
        Duration::from_millis(u64::from(config.control_loop_interval_ms)),
    )
}
