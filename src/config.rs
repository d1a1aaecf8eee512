//! Panel configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::DEFAULT_PANEL_MAX_HEIGHT;

pub const PANEL_MAX_HEIGHT_VAR: &str = "TWEAK_PANEL_MAX_HEIGHT";

/// Error returned by [`PanelConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Height hint for the panel area, in points.
    pub max_height: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { max_height: DEFAULT_PANEL_MAX_HEIGHT }
    }
}

impl PanelConfig {
    /// Build panel config from environment variables.
    ///
    /// Optional:
    /// - `TWEAK_PANEL_MAX_HEIGHT`: positive number, default 200
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var_os(key).map(|raw| raw.to_string_lossy().into_owned()))
    }

    /// Build panel config from any variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but malformed.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_height = match var(PANEL_MAX_HEIGHT_VAR) {
            None => DEFAULT_PANEL_MAX_HEIGHT,
            Some(raw) => parse_height(&raw)?,
        };
        Ok(Self { max_height })
    }
}

fn parse_height(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason| ConfigError::Invalid { var: PANEL_MAX_HEIGHT_VAR, value: raw.to_owned(), reason };
    let value: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid("must be a positive finite number"));
    }
    Ok(value)
}
