//! Runtime tuning for the controllers.
//!
//! [`ControllerSettings`] is a Bevy resource. Hosts may insert their own copy
//! before adding [`ControllerPlugin`](crate::ControllerPlugin); otherwise the
//! defaults from [`crate::constants`] apply. Settings can also be read from a
//! JSON file where any omitted field keeps its default:
//!
//! ```json
//! { "walk_speed": 150.0, "turn_duration": 0.5 }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DOLLY_SPEED, FLY_SPEED, LOOK_SENSITIVITY, PROXIMITY_THRESHOLD, TURN_DURATION, WALK_SPEED,
};

/// Failure to produce usable [`ControllerSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The settings document is not valid JSON for this schema.
    #[error("malformed settings")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but cannot drive the simulation.
    #[error("setting `{name}` must be finite and positive, got {value}")]
    Invalid {
        /// Field name as it appears in the file.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
}

/// Speeds, durations and thresholds used by the controllers.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerSettings {
    /// Walking speed of both actors in world units per second.
    pub walk_speed: f32,
    /// Seconds a smooth turn takes.
    pub turn_duration: f32,
    /// Distance below which the ninja starts chasing and above which it gives
    /// up.
    pub proximity: f32,
    /// Free-fly camera speed in world units per second.
    pub fly_speed: f32,
    /// Degrees of camera rotation per unit of mouse motion.
    pub look_sensitivity: f32,
    /// World units the camera moves per unit of scroll.
    pub dolly_speed: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            turn_duration: TURN_DURATION,
            proximity: PROXIMITY_THRESHOLD,
            fly_speed: FLY_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            dolly_speed: DOLLY_SPEED,
        }
    }
}

impl ControllerSettings {
    /// Parses and validates settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] for malformed JSON or unknown fields
    /// and [`SettingsError::Invalid`] for unusable values.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates settings from `path`.
    ///
    /// # Errors
    /// Returns [`SettingsError::Read`] when the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every value is finite and strictly positive.
    ///
    /// # Errors
    /// Returns [`SettingsError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("walk_speed", self.walk_speed),
            ("turn_duration", self.turn_duration),
            ("proximity", self.proximity),
            ("fly_speed", self.fly_speed),
            ("look_sensitivity", self.look_sensitivity),
            ("dolly_speed", self.dolly_speed),
        ];
        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            Some((name, value)) => Err(SettingsError::Invalid { name, value }),
            None => Ok(()),
        }
    }
}
