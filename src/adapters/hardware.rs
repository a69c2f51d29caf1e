//! Hardware adapter: bridges real peripherals to the control-loop ports.
//!
//! [`HardwareAdapter`] owns the debounced [`ControlPanel`] (exposed as an
//! [`InputSource`]) and the [`DisplayDriver`] plus [`BuzzerDriver`] (exposed
//! as an [`OutputSink`]).  [`split`](HardwareAdapter::split) hands the
//! control loop both halves at once.  This is the only module that touches
//! panel GPIO.  On non-espidf targets the underlying drivers use cfg-gated
//! simulation stubs.

use crate::adapters::time::MonotonicClock;
use crate::app::ports::{InputSource, OutputSink};
use crate::config::ApplianceConfig;
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::display::DisplayDriver;
use crate::drivers::hw_init::gpio_read;
use crate::drivers::panel::{ControlPanel, RawPanel};
use crate::fsm::context::InputSnapshot;
use crate::pins;

/// Concrete adapter that combines all panel hardware behind port traits.
pub struct HardwareAdapter {
    inputs: PanelInputs,
    outputs: PanelOutputs,
}

impl HardwareAdapter {
    pub fn new(cfg: &ApplianceConfig) -> Self {
        let boot = read_raw();
        Self {
            inputs: PanelInputs {
                clock: MonotonicClock::new(),
                panel: ControlPanel::new(cfg.debounce_ms, boot),
            },
            outputs: PanelOutputs {
                clock: MonotonicClock::new(),
                display: DisplayDriver::new(cfg.display_refresh_ms),
                buzzer: BuzzerDriver::new(cfg.buzzer_duration_ms),
            },
        }
    }

    /// Borrow the input and output halves together.
    pub fn split(&mut self) -> (&mut PanelInputs, &mut PanelOutputs) {
        (&mut self.inputs, &mut self.outputs)
    }
}

/// Sample every panel pin.  All inputs are active-low.
fn read_raw() -> RawPanel {
    RawPanel {
        increment: !gpio_read(pins::PLUS_30_GPIO),
        decrement: !gpio_read(pins::MINUS_30_GPIO),
        start: !gpio_read(pins::START_GPIO),
        door_closed: !gpio_read(pins::DOOR_GPIO),
    }
}

// ── InputSource implementation ────────────────────────────────

pub struct PanelInputs {
    clock: MonotonicClock,
    panel: ControlPanel,
}

impl InputSource for PanelInputs {
    fn read_inputs(&mut self) -> InputSnapshot {
        self.panel.sample(read_raw(), self.clock.uptime_ms())
    }
}

// ── OutputSink implementation ─────────────────────────────────

pub struct PanelOutputs {
    clock: MonotonicClock,
    display: DisplayDriver,
    buzzer: BuzzerDriver,
}

impl PanelOutputs {
    pub fn display(&self) -> &DisplayDriver {
        &self.display
    }

    pub fn buzzer(&self) -> &BuzzerDriver {
        &self.buzzer
    }

    /// Current time with the buzzer deadline serviced first.  Every output
    /// call goes through here, and the loop refreshes outputs every cycle.
    fn now(&mut self) -> u32 {
        let now = self.clock.uptime_ms();
        self.buzzer.poll(now);
        now
    }
}

impl OutputSink for PanelOutputs {
    fn show_seconds(&mut self, seconds: u32) {
        let now = self.now();
        self.display.show(seconds, now);
    }

    fn show_zero(&mut self) {
        let now = self.now();
        self.display.show_now(0, now);
    }

    fn sound_finish(&mut self) {
        let now = self.now();
        self.buzzer.sound(now);
    }

    fn silence(&mut self) {
        self.buzzer.silence();
    }

    fn clear(&mut self) {
        self.now();
        self.display.clear();
    }
}
