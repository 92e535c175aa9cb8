// File: crates/skychart-core/src/types.rs
// Summary: Shared types and constants (render geometry, pipeline limits).

use serde::Deserialize;

use crate::error::{ChartError, Result};

/// Default surface width in device-independent pixels.
pub const WIDTH: f64 = 1200.0;
/// Default surface height in device-independent pixels.
pub const HEIGHT: f64 = 500.0;
/// Default padding on every side of the plot area.
pub const PADDING: f64 = 60.0;

/// Upper bound on raw samples kept after decimation. Bounds path building and
/// hit-testing cost independent of how many hours the source covers.
pub const MAX_RAW_POINTS: usize = 800;
/// Number of interpolated points every drawn series is resampled to.
pub const TARGET_POINTS: usize = 200;
/// Upper bound on horizontal grid lines per chart. Wider scales keep every
/// k-th step so the lines still span the axis.
pub const MAX_GRID_LINES: usize = 1000;

/// Canvas size and symmetric padding, in device-independent pixels.
/// Contract: drawable only when `width > 2*padding` and `height > 2*padding`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl RenderGeometry {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// Construct, rejecting geometry that leaves no plot area.
    pub fn try_new(width: f64, height: f64, padding: f64) -> Result<Self> {
        let g = Self::new(width, height, padding);
        if g.is_drawable() {
            Ok(g)
        } else {
            Err(ChartError::DegenerateGeometry { width, height, padding })
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.plot_width() > 0.0 && self.plot_height() > 0.0
    }

    /// Width of the plot area (width minus both paddings).
    pub fn plot_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Height of the plot area (height minus both paddings).
    pub fn plot_height(&self) -> f64 { self.height - 2.0 * self.padding }

    /// Screen y of the plot's bottom edge.
    pub fn bottom(&self) -> f64 { self.height - self.padding }
}

impl Default for RenderGeometry {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}

/// A screen-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
