//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::SimSettings;

/// Loads `<dir>/relay.toml`, falling back to defaults if the file is absent.
pub fn load_settings(dir: &Path) -> Result<SimSettings, ConfigError> {
    let path = dir.join("relay.toml");
    if !path.exists() {
        return Ok(SimSettings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    load_settings_from_str(&content)
}

/// Loads settings from an explicit file path.
pub fn load_settings_file(path: &Path) -> Result<SimSettings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_settings_from_str(&content)
}

/// Parses and validates settings from a TOML string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_settings_from_str(content: &str) -> Result<SimSettings, ConfigError> {
    let settings: SimSettings =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Checks that delays and limits are positive.
fn validate_settings(settings: &SimSettings) -> Result<(), ConfigError> {
    for (name, value) in [
        ("delays.and", settings.delays.and),
        ("delays.or", settings.delays.or),
        ("delays.not", settings.delays.not),
        ("limits.max_actions", settings.limits.max_actions),
    ] {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{name} must be at least 1"
            )));
        }
    }
    Ok(())
}
