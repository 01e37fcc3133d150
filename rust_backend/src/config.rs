//! Calculator configuration file support.
//!
//! A configuration file lists the twilight definitions evaluated by
//! [`SunCalc::get_times`](crate::SunCalc::get_times) and an optional
//! default observer height:
//!
//! ```toml
//! [observer]
//! height = 120.0
//!
//! [[times]]
//! angle = -0.833
//! rise = "sunrise"
//! set = "sunset"
//! ```
//!
//! Without a `[[times]]` array the default table is used.

use std::fs;
use std::path::Path;

use qtty::Meters;
use serde::{Deserialize, Serialize};

use crate::core::domain::{default_times, TwilightDefinition};
use crate::error::{SunCalcError, SunCalcResult};

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesConfig {
    #[serde(default)]
    pub observer: ObserverSettings,
    #[serde(default = "default_times")]
    pub times: Vec<TwilightDefinition>,
}

/// Observer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverSettings {
    /// Height above the horizon, meters.
    #[serde(default = "default_height")]
    pub height: Meters,
}

fn default_height() -> Meters {
    Meters::new(0.0)
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            height: default_height(),
        }
    }
}

impl Default for TimesConfig {
    fn default() -> Self {
        Self {
            observer: ObserverSettings::default(),
            times: default_times(),
        }
    }
}

impl TimesConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(TimesConfig)` if successful
    /// * `Err(SunCalcError::ConfigurationError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> SunCalcResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SunCalcError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// Errors name the offending field, e.g. `times[2].angle`.
    pub fn from_toml_str(content: &str) -> SunCalcResult<Self> {
        let deserializer = toml::Deserializer::new(content);
        let config: TimesConfig = serde_path_to_error::deserialize(deserializer).map_err(|e| {
            SunCalcError::ConfigurationError(format!(
                "Failed to parse config at `{}`: {}",
                e.path(),
                e.inner()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML text.
    pub fn to_toml_string(&self) -> SunCalcResult<String> {
        toml::to_string(self).map_err(|e| {
            SunCalcError::ConfigurationError(format!("Failed to serialize config: {}", e))
        })
    }

    fn validate(&self) -> SunCalcResult<()> {
        let height = self.observer.height.value();
        if !height.is_finite() || height < 0.0 {
            return Err(SunCalcError::ConfigurationError(
                "observer.height must be a finite, non-negative number of meters".to_string(),
            ));
        }

        for (i, time) in self.times.iter().enumerate() {
            if !time.angle.value().is_finite() {
                return Err(SunCalcError::ConfigurationError(format!(
                    "times[{}].angle must be a finite number of degrees",
                    i
                )));
            }
            if time.rise_name.is_empty() || time.set_name.is_empty() {
                return Err(SunCalcError::ConfigurationError(format!(
                    "times[{}] requires non-empty 'rise' and 'set' names",
                    i
                )));
            }
        }

        Ok(())
    }
}
