// File: crates/skychart-core/src/chart.rs
// Summary: The render pipeline: decimate -> scale -> resample -> paths, plus hit-testing on the result.

use tracing::{debug, trace};

use crate::config::PipelineConfig;
use crate::downsample::{decimate, resample};
use crate::grid::{grid_lines, GridLines};
use crate::hit::{resolve_nearest, HitResult};
use crate::path::{build_path, RenderedPath};
use crate::scale::Scale;
use crate::series::{SeriesSlot, TimeSeriesDataset};
use crate::types::{Point, RenderGeometry};

/// Geometry-independent output of the pipeline: the decimated samples and the
/// shared value scale. Reused for hit-testing between renders.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedData {
    pub decimated: TimeSeriesDataset,
    pub scale: Scale,
}

/// Decimate `dataset` and derive the shared scale from both series.
/// `None` when there is nothing to scale.
pub fn prepare(dataset: &TimeSeriesDataset, config: &PipelineConfig) -> Option<PreparedData> {
    if dataset.is_empty() {
        trace!("empty dataset; nothing to prepare");
        return None;
    }
    let decimated = decimate(dataset, config.max_raw_points);
    let scale = Scale::from_values(decimated.all_values())?;
    Some(PreparedData { decimated, scale })
}

impl PreparedData {
    /// Resample each present series to `target_points` and lay it out on `geometry`.
    /// `None` when the geometry leaves no plot area.
    pub fn draw(&self, geometry: &RenderGeometry, target_points: usize) -> Option<RenderedChart> {
        if !geometry.is_drawable() {
            debug!(?geometry, "degenerate geometry; skipping render");
            return None;
        }
        let path_for = |slot: SeriesSlot| -> Option<RenderedPath> {
            if !self.decimated.has_series(slot) {
                trace!(?slot, "series absent; not drawn");
                return None;
            }
            let values = self.decimated.values(slot);
            let resampled = resample(&values, target_points, self.scale.min);
            Some(build_path(&resampled, geometry, &self.scale))
        };
        Some(RenderedChart {
            geometry: *geometry,
            scale: self.scale,
            series_a: path_for(SeriesSlot::A),
            series_b: path_for(SeriesSlot::B),
        })
    }

    pub fn resolve_nearest(&self, pointer: Point, geometry: &RenderGeometry) -> Option<HitResult> {
        resolve_nearest(pointer, geometry, &self.decimated, &self.scale)
    }
}

/// Drawable result of one render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    pub geometry: RenderGeometry,
    pub scale: Scale,
    /// `None` for an absent series; its legend marker is suppressed too.
    pub series_a: Option<RenderedPath>,
    pub series_b: Option<RenderedPath>,
}

impl RenderedChart {
    pub fn path(&self, slot: SeriesSlot) -> Option<&RenderedPath> {
        match slot {
            SeriesSlot::A => self.series_a.as_ref(),
            SeriesSlot::B => self.series_b.as_ref(),
        }
    }

    /// Horizontal grid lines for the value axis, recomputed on every call.
    pub fn grid(&self) -> GridLines {
        grid_lines(&self.scale, &self.geometry)
    }
}

/// Run the whole pipeline in one go.
pub fn render_chart(
    dataset: &TimeSeriesDataset,
    geometry: &RenderGeometry,
    config: &PipelineConfig,
) -> Option<RenderedChart> {
    prepare(dataset, config)?.draw(geometry, config.target_points)
}
