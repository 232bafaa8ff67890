//! Editor Configuration
//!
//! Every tunable constant of the placement engine lives here. `Default`
//! returns the production values; a JSON file may override any subset of
//! them because every struct is `#[serde(default)]`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::error::ConfigError;

/// Maximum number of undo snapshots retained.
pub const DEFAULT_UNDO_LIMIT: usize = 20;

const_assert!(DEFAULT_UNDO_LIMIT > 0);

/// Shrink factors applied to an item's rotation-projected footprint.
///
/// Small items shrink a lot so books can sit spine to spine; large items
/// keep a near-exact footprint with a small safety margin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShrinkPolicy {
    /// Factor for small-class items
    pub small: f32,
    /// Factor for large-class items
    pub large: f32,
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        Self {
            small: 0.5,
            large: 0.95,
        }
    }
}

/// Grid snapping policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapPolicy {
    /// Grid snapping on/off
    pub enabled: bool,
    /// Cell size for small-class items (meters, near-continuous)
    pub small_cell: f32,
    /// Cell size for large-class items (meters). The room's grid size.
    pub large_cell: f32,
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            small_cell: 0.01,
            large_cell: 0.25,
        }
    }
}

/// Spacing constants for the batch arrangement algorithms (meters).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementConfig {
    /// Gap between neighbouring books in a row
    pub row_gap: f32,
    /// Vertical gap between stacked items
    pub stack_gap: f32,
    /// Maximum horizontal jitter applied to stacked items
    pub stack_jitter: f32,
    /// Maximum number of items in a shrine (centerpiece included)
    pub shrine_max: usize,
    /// Gap between shrine neighbours
    pub shrine_gap: f32,
    /// Height the shrine centerpiece is raised by
    pub shrine_raise: f32,
    /// Distance the shrine centerpiece is pulled toward the front
    pub shrine_forward: f32,
    /// Inset from each host edge used by space-evenly
    pub edge_margin: f32,
    /// Extra reach beyond the host footprint when gathering members
    pub proximity_slack: f32,
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            row_gap: 0.005,
            stack_gap: 0.002,
            stack_jitter: 0.01,
            shrine_max: 11,
            shrine_gap: 0.004,
            shrine_raise: 0.02,
            shrine_forward: 0.04,
            edge_margin: 0.05,
            proximity_slack: 0.1,
        }
    }
}

/// Spring-damper parameters for the presentational drag tilt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Spring stiffness (higher = faster response)
    pub stiffness: f32,
    /// Damping coefficient (higher = less oscillation)
    pub damping: f32,
    /// Target tilt in radians per m/s of drag speed
    pub tilt_per_speed: f32,
    /// Largest tilt the target may request (radians)
    pub max_tilt: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            tilt_per_speed: 0.12,
            max_tilt: 0.3,
        }
    }
}

/// Central configuration for the placement engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Footprint shrink factors per size class
    pub shrink: ShrinkPolicy,
    /// Snap grid policy
    pub snap: SnapPolicy,
    /// Undo stack capacity, at most [`DEFAULT_UNDO_LIMIT`]
    pub undo_limit: usize,
    /// Number of shelf intervals on a host (levels = shelf_levels + 1)
    pub shelf_levels: u32,
    /// Arrangement spacing
    pub arrangement: ArrangementConfig,
    /// Drag tilt feedback
    pub motion: MotionConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            shrink: ShrinkPolicy::default(),
            snap: SnapPolicy::default(),
            undo_limit: DEFAULT_UNDO_LIMIT,
            shelf_levels: 4,
            arrangement: ArrangementConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "editor config loaded");
        Ok(config)
    }

    /// Reject values the placement math cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("shrink.small", self.shrink.small),
            ("shrink.large", self.shrink.large),
        ];
        for (name, factor) in factors {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ConfigError::Invalid(format!("{name} must be in (0, 1], got {factor}")));
            }
        }
        let cells = [
            ("snap.small_cell", self.snap.small_cell),
            ("snap.large_cell", self.snap.large_cell),
        ];
        for (name, cell) in cells {
            if !(cell.is_finite() && cell > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {cell}")));
            }
        }
        if !(1..=DEFAULT_UNDO_LIMIT).contains(&self.undo_limit) {
            return Err(ConfigError::Invalid(format!(
                "undo_limit must be in 1..={DEFAULT_UNDO_LIMIT}, got {}",
                self.undo_limit
            )));
        }
        if self.shelf_levels == 0 {
            return Err(ConfigError::Invalid("shelf_levels must be at least 1".into()));
        }
        if self.motion.stiffness < 0.0 || self.motion.damping < 0.0 {
            return Err(ConfigError::Invalid("motion spring must be non-negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.shrink.small, 0.5);
        assert_eq!(config.shrink.large, 0.95);
        assert_eq!(config.undo_limit, 20);
        assert_eq!(config.arrangement.shrine_max, 11);
        assert!(config.snap.small_cell < config.snap.large_cell);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let json = r#"{ "shrink": { "large": 0.9 }, "undo_limit": 5 }"#;
        let config = EditorConfig::from_json_str(json).unwrap();
        assert_eq!(config.shrink.large, 0.9);
        assert_eq!(config.shrink.small, 0.5);
        assert_eq!(config.undo_limit, 5);
        assert_eq!(config.snap, SnapPolicy::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(EditorConfig::from_json_str(r#"{ "shrink": { "small": 0.0 } }"#).is_err());
        assert!(EditorConfig::from_json_str(r#"{ "snap": { "large_cell": -1.0 } }"#).is_err());
        assert!(EditorConfig::from_json_str(r#"{ "undo_limit": 0 }"#).is_err());
        assert!(EditorConfig::from_json_str(r#"{ "undo_limit": 21 }"#).is_err());
        assert!(EditorConfig::from_json_str(r#"{ "undo_limit": 20 }"#).is_ok());
        assert!(EditorConfig::from_json_str("not json").is_err());
    }
}
