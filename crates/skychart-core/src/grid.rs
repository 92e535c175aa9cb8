// File: crates/skychart-core/src/grid.rs
// Summary: Horizontal grid line layout derived from the value scale.

use crate::scale::Scale;
use crate::types::{RenderGeometry, MAX_GRID_LINES};

/// One horizontal grid line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub value: f64,
    /// Axis label text value, `round(value)`.
    pub label: i64,
    pub y: f64,
}

/// Lazy iterator over grid lines from `scale.min` to `scale.max` inclusive.
/// Cloning restarts it.
#[derive(Clone, Debug)]
pub struct GridLines {
    scale: Scale,
    geometry: RenderGeometry,
    spacing: f64,
    next: usize,
    count: usize,
}

/// Grid lines at every `scale.step` between the scale bounds, at most
/// [`MAX_GRID_LINES`]. Past that cap only every k-th step is kept.
pub fn grid_lines(scale: &Scale, geometry: &RenderGeometry) -> GridLines {
    let intervals = (scale.span() / scale.step).round();
    let (spacing, count) = if scale.step > 0.0 && intervals.is_finite() && intervals >= 0.0 {
        let stride = (intervals / (MAX_GRID_LINES - 1) as f64).ceil().max(1.0);
        let count = ((intervals / stride).floor() as usize).saturating_add(1);
        (scale.step * stride, count.min(MAX_GRID_LINES))
    } else {
        (scale.step, 0)
    };
    GridLines { scale: *scale, geometry: *geometry, spacing, next: 0, count }
}

impl Iterator for GridLines {
    type Item = GridLine;

    fn next(&mut self) -> Option<GridLine> {
        if self.next >= self.count {
            return None;
        }
        // min + k*spacing, not a running sum.
        let value = self.scale.min + self.next as f64 * self.spacing;
        self.next += 1;
        Some(GridLine {
            value,
            label: value.round() as i64,
            y: self.scale.to_screen_y(value, &self.geometry),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for GridLines {}
