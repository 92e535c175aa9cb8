// File: crates/skychart-core/src/config.rs
// Summary: Pipeline limits and chart presentation settings, loadable from TOML.

use serde::Deserialize;

use crate::error::Result;
use crate::types::{RenderGeometry, MAX_RAW_POINTS, TARGET_POINTS};

/// Numeric limits of the render pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Decimation cap on raw samples.
    pub max_raw_points: usize,
    /// Render resolution each drawn series is resampled to.
    pub target_points: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { max_raw_points: MAX_RAW_POINTS, target_points: TARGET_POINTS }
    }
}

/// Legend/tooltip names of the two series.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeriesLabels {
    pub a: String,
    pub b: String,
}

impl Default for SeriesLabels {
    fn default() -> Self {
        Self { a: "City A".to_string(), b: "City B".to_string() }
    }
}

/// Everything a chart view needs besides its data.
///
/// ```toml
/// unit = "°"
///
/// [pipeline]
/// max_raw_points = 800
/// target_points = 200
///
/// [geometry]
/// width = 1200.0
/// height = 500.0
/// padding = 60.0
///
/// [labels]
/// a = "Warsaw"
/// b = "London"
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub pipeline: PipelineConfig,
    pub geometry: RenderGeometry,
    pub labels: SeriesLabels,
    /// Suffix appended to tooltip values.
    pub unit: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            geometry: RenderGeometry::default(),
            labels: SeriesLabels::default(),
            unit: "°".to_string(),
        }
    }
}

impl ChartSettings {
    /// Parse settings from TOML; omitted keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
