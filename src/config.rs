//! Appliance configuration parameters
//!
//! All tunable timing parameters for the microwave controller.  Nothing is
//! persisted: the firmware starts from [`ApplianceConfig::default`] and may
//! apply a JSON override baked in at build time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core appliance configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplianceConfig {
    // --- Control loop ---
    /// Control loop period (milliseconds).  Must stay below `debounce_ms`
    /// so every stable input change is sampled.
    pub control_loop_interval_ms: u32,

    // --- Inputs ---
    /// Settling time before a raw button/door level is accepted (milliseconds)
    pub debounce_ms: u32,

    // --- Countdown ---
    /// Period of the countdown decrement tick (milliseconds)
    pub tick_period_ms: u32,

    // --- Outputs ---
    /// How long the finish buzzer sounds before switching itself off (milliseconds)
    pub buzzer_duration_ms: u32,
    /// Minimum interval between display redraws (milliseconds)
    pub display_refresh_ms: u32,
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self {
            // Control loop
            control_loop_interval_ms: 5,

            // Inputs
            debounce_ms: 30,

            // Countdown
            tick_period_ms: 1000, // 1 Hz

            // Outputs
            buzzer_duration_ms: 800,
            display_refresh_ms: 50, // ~20 Hz
        }
    }
}

impl ApplianceConfig {
    /// Reject values that would break the control loop's timing contract.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be > 0",
            ));
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ValidationFailed("debounce_ms must be > 0"));
        }
        if self.control_loop_interval_ms >= self.debounce_ms {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be below debounce_ms",
            ));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_period_ms must be > 0"));
        }
        if self.buzzer_duration_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "buzzer_duration_ms must be > 0",
            ));
        }
        Ok(())
    }

    /// Parse a JSON override and validate it.  Missing fields keep their
    /// defaults.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(doc).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Build-time configuration: the `MICROWAVE_CONFIG_JSON` override if one
    /// was set when the firmware was compiled, defaults otherwise.
    pub fn compiled() -> Result<Self, ConfigError> {
        match option_env!("MICROWAVE_CONFIG_JSON") {
            Some(doc) => Self::from_json(doc),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }
}
