//! Interaction settings.
//!
//! Tunables for the divider engine, loadable from a JSON file. Every field
//! has a default from `constants`, so a partial (or empty) file is valid.

use crate::constants::{
    DRAG_THRESHOLD_PX, HIT_TOLERANCE, IMPERIAL_MIN_GAP, IMPERIAL_MIN_SECTION_SIZE,
    IMPERIAL_SNAP_INCREMENT, METRIC_MIN_GAP, METRIC_MIN_SECTION_SIZE, METRIC_SNAP_INCREMENT,
    ORIENTATION_THRESHOLD,
};
use crate::error::{SettingsError, SettingsResult};
use crate::types::Units;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What the machine does with the selection when a drag ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragReleasePolicy {
    /// Return to `normal` and clear the selection
    #[default]
    Deselect,
    /// Return to `selected`, keeping the dragged divider selected
    KeepSelection,
}

/// Unit-dependent placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRules {
    /// Minimum distance between two same-orientation dividers
    pub min_gap: f64,
    /// Positions are snapped to multiples of this
    pub snap_increment: f64,
    /// A section must span twice this to accept a new divider
    pub min_section_size: f64,
}

impl UnitRules {
    pub fn metric() -> Self {
        Self {
            min_gap: METRIC_MIN_GAP,
            snap_increment: METRIC_SNAP_INCREMENT,
            min_section_size: METRIC_MIN_SECTION_SIZE,
        }
    }

    pub fn imperial() -> Self {
        Self {
            min_gap: IMPERIAL_MIN_GAP,
            snap_increment: IMPERIAL_SNAP_INCREMENT,
            min_section_size: IMPERIAL_MIN_SECTION_SIZE,
        }
    }

    fn validate(&self, name: &'static str) -> SettingsResult<()> {
        for value in [self.min_gap, self.snap_increment, self.min_section_size] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid {
                    name,
                    reason: format!("all rules must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionSettings {
    pub drag_threshold_px: f64,
    pub orientation_threshold: f64,
    pub hit_tolerance: f64,
    pub drag_release: DragReleasePolicy,
    pub metric: UnitRules,
    pub imperial: UnitRules,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            orientation_threshold: ORIENTATION_THRESHOLD,
            hit_tolerance: HIT_TOLERANCE,
            drag_release: DragReleasePolicy::default(),
            metric: UnitRules::metric(),
            imperial: UnitRules::imperial(),
        }
    }
}

impl InteractionSettings {
    /// Rules in force for a shelf measured in `units`
    pub fn rules_for(&self, units: Units) -> UnitRules {
        match units {
            Units::Metric => self.metric,
            Units::Imperial => self.imperial,
        }
    }

    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), "Loaded interaction settings");
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(SettingsError::Invalid {
                name: "dragThresholdPx",
                reason: format!("must be non-negative, got {}", self.drag_threshold_px),
            });
        }
        if !(0.0..=1.0).contains(&self.orientation_threshold) {
            return Err(SettingsError::Invalid {
                name: "orientationThreshold",
                reason: format!("must be within 0..=1, got {}", self.orientation_threshold),
            });
        }
        if !self.hit_tolerance.is_finite() || self.hit_tolerance < 0.0 {
            return Err(SettingsError::Invalid {
                name: "hitTolerance",
                reason: format!("must be non-negative, got {}", self.hit_tolerance),
            });
        }
        self.metric.validate("metric")?;
        self.imperial.validate("imperial")?;
        Ok(())
    }
}
