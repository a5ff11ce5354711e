//! Display parameters and gesture tuning.

use crate::color::SerializableColor;
use crate::line::DEFAULT_THICKNESS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Distance within which a tap or long press picks a line.
pub const DEFAULT_HIT_RADIUS: f64 = 20.0;
/// Upper bound for velocity-driven thickness.
pub const DEFAULT_MAX_THICKNESS: f64 = 40.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How finished lines are tested against a query point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitTestMode {
    /// Twenty evenly spaced samples per segment, end point excluded.
    #[default]
    Sampled,
    /// True point-to-segment distance.
    Exact,
}

/// Tracker and display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Thickness of new strokes.
    pub line_thickness: f64,
    /// Tap and long-press pick radius.
    pub hit_radius: f64,
    /// Proximity test used for picking.
    pub hit_test: HitTestMode,
    /// Color of finished lines.
    pub finished_color: SerializableColor,
    /// Color of active strokes when not colored by angle.
    pub current_color: SerializableColor,
    /// Color of the selected line.
    pub selected_color: SerializableColor,
    /// Color active strokes by their angle instead of `current_color`.
    pub color_by_angle: bool,
    /// Extra thickness per unit of contact speed (points per second).
    /// Zero disables velocity-driven thickness.
    pub velocity_scale: f64,
    /// Cap for velocity-driven thickness.
    pub max_thickness: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            line_thickness: DEFAULT_THICKNESS,
            hit_radius: DEFAULT_HIT_RADIUS,
            hit_test: HitTestMode::default(),
            finished_color: SerializableColor::black(),
            current_color: SerializableColor::red(),
            selected_color: SerializableColor::green(),
            color_by_angle: true,
            velocity_scale: 0.0,
            max_thickness: DEFAULT_MAX_THICKNESS,
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.line_thickness.is_finite() && self.line_thickness > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "line_thickness must be positive, got {}",
                self.line_thickness
            )));
        }
        if !(self.hit_radius.is_finite() && self.hit_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "hit_radius must be positive, got {}",
                self.hit_radius
            )));
        }
        if !(self.velocity_scale.is_finite() && self.velocity_scale >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "velocity_scale must be non-negative, got {}",
                self.velocity_scale
            )));
        }
        if !self.max_thickness.is_finite() || self.max_thickness < self.line_thickness {
            return Err(ConfigError::Invalid(format!(
                "max_thickness {} is below line_thickness {}",
                self.max_thickness, self.line_thickness
            )));
        }
        Ok(())
    }

    /// Thickness for a contact moving at `speed`, or `None` when
    /// velocity-driven thickness is off.
    pub fn thickness_for_speed(&self, speed: f64) -> Option<f64> {
        if self.velocity_scale <= 0.0 {
            return None;
        }
        Some((self.line_thickness + speed.abs() * self.velocity_scale).min(self.max_thickness))
    }
}
