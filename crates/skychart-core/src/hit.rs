// File: crates/skychart-core/src/hit.rs
// Summary: Pointer -> nearest decimated sample resolution for crosshair and tooltip display.

use crate::error::Result;
use crate::scale::Scale;
use crate::series::{Sample, SeriesSlot, TimeSeriesDataset};
use crate::tooltip::TimestampParts;
use crate::types::{Point, RenderGeometry};

/// The decimated sample nearest to the pointer and where to mark it on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct HitResult {
    pub index: usize,
    pub sample: Sample,
    pub screen_x: f64,
    /// `None` when the sample has no value for the series; the marker is then hidden.
    pub screen_y_a: Option<f64>,
    pub screen_y_b: Option<f64>,
    /// Axis value under the pointer's y coordinate.
    pub pointer_value: f64,
}

impl HitResult {
    pub fn marker(&self, slot: SeriesSlot) -> Option<Point> {
        let y = match slot {
            SeriesSlot::A => self.screen_y_a,
            SeriesSlot::B => self.screen_y_b,
        };
        y.map(|y| Point::new(self.screen_x, y))
    }

    /// Vertical guide through the hit, spanning the plot area.
    pub fn crosshair(&self, geometry: &RenderGeometry) -> Crosshair {
        Crosshair { x: self.screen_x, top: geometry.padding, bottom: geometry.bottom() }
    }

    /// Day/month/time breakdown of the sample timestamp.
    pub fn timestamp_parts(&self) -> Result<TimestampParts> {
        TimestampParts::parse(&self.sample.timestamp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Index of the sample column nearest `pointer_x` among `len` evenly spaced
/// columns, clamped to `[0, len-1]`. `None` for no samples or no plot area.
pub fn nearest_index(pointer_x: f64, geometry: &RenderGeometry, len: usize) -> Option<usize> {
    if len == 0 || !geometry.is_drawable() {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let last = (len - 1) as f64;
    let step_x = geometry.plot_width() / last;
    let index = ((pointer_x - geometry.padding) / step_x).round();
    Some(index.clamp(0.0, last) as usize)
}

/// Screen x of sample column `index` out of `len`.
pub fn column_x(index: usize, geometry: &RenderGeometry, len: usize) -> f64 {
    if len < 2 {
        return geometry.padding;
    }
    geometry.padding + index as f64 * geometry.plot_width() / (len - 1) as f64
}

/// Resolve the pointer against the decimated dataset, mapping values with the
/// current scale. Operates on real (decimated) samples, never interpolated ones.
pub fn resolve_nearest(
    pointer: Point,
    geometry: &RenderGeometry,
    decimated: &TimeSeriesDataset,
    scale: &Scale,
) -> Option<HitResult> {
    let len = decimated.len();
    let index = nearest_index(pointer.x, geometry, len)?;
    let sample = decimated.get(index)?.clone();
    let y = |v: Option<f64>| v.map(|v| scale.to_screen_y(v, geometry));
    Some(HitResult {
        index,
        screen_x: column_x(index, geometry, len),
        screen_y_a: y(sample.value_a),
        screen_y_b: y(sample.value_b),
        pointer_value: scale.from_screen_y(pointer.y, geometry),
        sample,
    })
}
