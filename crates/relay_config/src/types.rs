//! Configuration types deserialized from `relay.toml`.

use relay_sim::{GateDelays, DEFAULT_MAX_ACTIONS};
use serde::Deserialize;

use crate::error::ConfigError;

/// The simulator settings parsed from `relay.toml`.
///
/// Every section and field is optional; omitted values fall back to the
/// conventional defaults.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SimSettings {
    /// Gate propagation delays in ticks.
    pub delays: DelayTable,
    /// Watchdog limits for the propagation driver.
    pub limits: LimitTable,
}

/// The `[delays]` table: per-gate propagation delays in ticks.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DelayTable {
    /// AND gate delay.
    pub and: u64,
    /// OR gate delay.
    pub or: u64,
    /// Inverter delay.
    pub not: u64,
}

impl Default for DelayTable {
    fn default() -> Self {
        let d = GateDelays::default();
        Self {
            and: d.and,
            or: d.or,
            not: d.not,
        }
    }
}

/// The `[limits]` table: propagation watchdog settings.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LimitTable {
    /// Maximum actions executed per propagation run.
    pub max_actions: u64,
}

impl Default for LimitTable {
    fn default() -> Self {
        Self {
            max_actions: DEFAULT_MAX_ACTIONS,
        }
    }
}

impl SimSettings {
    /// Converts the delay table into the engine's validated form.
    pub fn gate_delays(&self) -> Result<GateDelays, ConfigError> {
        GateDelays::new(self.delays.and, self.delays.or, self.delays.not)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
