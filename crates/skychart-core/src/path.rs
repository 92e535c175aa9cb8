// File: crates/skychart-core/src/path.rs
// Summary: Screen-space polyline for one resampled series.

use std::fmt::Write as _;

use crate::scale::Scale;
use crate::types::{Point, RenderGeometry};

/// Points of one series, one per resampled index, x strictly increasing.
/// Drawn as straight segments between consecutive points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedPath {
    pub points: Vec<Point>,
}

impl RenderedPath {
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn len(&self) -> usize { self.points.len() }

    /// SVG path data: `M x,y` then ` L x y` per further point, one decimal place.
    pub fn to_svg_data(&self) -> String {
        let mut points = self.points.iter();
        let Some(first) = points.next() else { return String::new() };
        let mut d = format!("M {:.1},{:.1}", first.x, first.y);
        for p in points {
            let _ = write!(d, " L {:.1} {:.1}", p.x, p.y);
        }
        d
    }
}

/// Lay `values` out evenly across the plot width and map them through `scale`.
///
/// Nulls are drawn at `scale.min` so the line stays continuous; fewer than two
/// values produce an empty path.
pub fn build_path<V>(values: &[V], geometry: &RenderGeometry, scale: &Scale) -> RenderedPath
where
    V: Copy + Into<Option<f64>>,
{
    let n = values.len();
    if n < 2 {
        return RenderedPath::default();
    }
    let step_x = geometry.plot_width() / (n - 1) as f64;
    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let value = (*v).into().unwrap_or(scale.min);
            Point::new(
                geometry.padding + i as f64 * step_x,
                scale.to_screen_y(value, geometry),
            )
        })
        .collect();
    RenderedPath { points }
}
