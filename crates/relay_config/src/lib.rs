//! TOML configuration for the relay logic simulator.
//!
//! Gate delays and watchdog limits are process-wide configuration, fixed
//! before any circuit is built. This crate loads them from `relay.toml`
//! and validates them (all delays must be at least one tick, which is
//! what guarantees propagation terminates).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_settings, load_settings_file, load_settings_from_str};
pub use types::{DelayTable, LimitTable, SimSettings};
