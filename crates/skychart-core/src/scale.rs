// File: crates/skychart-core/src/scale.rs
// Summary: "Nice" value-axis scale selection and the value <-> screen-y mapping.

use tracing::debug;

use crate::types::RenderGeometry;

/// Ranges below this use unit steps.
pub const FINE_RANGE_LIMIT: f64 = 10.0;
/// Ranges above this use steps of [`COARSE_STEP`].
pub const COARSE_RANGE_LIMIT: f64 = 50.0;
/// Ranges above this use steps of [`COARSEST_STEP`].
pub const COARSEST_RANGE_LIMIT: f64 = 100.0;

pub const FINE_STEP: f64 = 1.0;
pub const DEFAULT_STEP: f64 = 5.0;
pub const COARSE_STEP: f64 = 10.0;
pub const COARSEST_STEP: f64 = 25.0;

/// Vertical axis bounds snapped to multiples of `step`.
/// Contract: `min < max`; both are multiples of `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Grid step for a raw data range. Non-decreasing in `raw_range`; a range of
/// exactly 10 takes the default step.
pub fn step_for_range(raw_range: f64) -> f64 {
    if raw_range < FINE_RANGE_LIMIT {
        FINE_STEP
    } else if raw_range > COARSEST_RANGE_LIMIT {
        COARSEST_STEP
    } else if raw_range > COARSE_RANGE_LIMIT {
        COARSE_STEP
    } else {
        DEFAULT_STEP
    }
}

impl Scale {
    /// Derive a scale covering every value. `None` when there are no values.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut raw_min = f64::INFINITY;
        let mut raw_max = f64::NEG_INFINITY;
        for v in values {
            raw_min = raw_min.min(v);
            raw_max = raw_max.max(v);
        }
        if !raw_min.is_finite() || !raw_max.is_finite() {
            return None;
        }

        let step = step_for_range(raw_max - raw_min);
        let min = (raw_min / step).floor() * step;
        let mut max = (raw_max / step).ceil() * step;
        if max == min {
            max += step;
        }
        debug!(raw_min, raw_max, min, max, step, "computed scale");
        Some(Self { min, max, step })
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Map a value to screen y; larger values draw higher (smaller y).
    #[inline]
    pub fn to_screen_y(&self, value: f64, geometry: &RenderGeometry) -> f64 {
        let norm = (value - self.min) / self.span();
        geometry.bottom() - norm * geometry.plot_height()
    }

    /// Inverse of [`Scale::to_screen_y`].
    #[inline]
    pub fn from_screen_y(&self, y: f64, geometry: &RenderGeometry) -> f64 {
        let norm = (geometry.bottom() - y) / geometry.plot_height();
        self.min + norm * self.span()
    }
}
