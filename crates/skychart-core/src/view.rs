// File: crates/skychart-core/src/view.rs
// Summary: Stateful chart view: current data, geometry and hover, with the prepared data memoized between events.

use tracing::debug;

use crate::chart::{prepare, PreparedData, RenderedChart};
use crate::config::{ChartSettings, SeriesLabels};
use crate::error::Result;
use crate::hit::HitResult;
use crate::series::TimeSeriesDataset;
use crate::stats::ComparisonStats;
use crate::tooltip::Tooltip;
use crate::types::{Point, RenderGeometry};

/// Event-driven wrapper around the pipeline.
///
/// Each trigger (new data, resize, pointer move) recomputes what it needs from
/// the current state; later calls simply overwrite earlier ones.
#[derive(Clone, Debug, Default)]
pub struct ChartView {
    settings: ChartSettings,
    dataset: TimeSeriesDataset,
    prepared: Option<PreparedData>,
    hover: Option<HitResult>,
}

impl ChartView {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings, ..Self::default() }
    }

    pub fn settings(&self) -> &ChartSettings { &self.settings }
    pub fn geometry(&self) -> &RenderGeometry { &self.settings.geometry }
    pub fn dataset(&self) -> &TimeSeriesDataset { &self.dataset }
    pub fn hover(&self) -> Option<&HitResult> { self.hover.as_ref() }

    /// Replace the dataset wholesale.
    pub fn set_data(&mut self, dataset: TimeSeriesDataset) {
        debug!(samples = dataset.len(), "dataset replaced");
        self.dataset = dataset;
        self.invalidate();
    }

    pub fn resize(&mut self, geometry: RenderGeometry) {
        debug!(width = geometry.width, height = geometry.height, "resized");
        self.settings.geometry = geometry;
        self.invalidate();
    }

    pub fn set_labels(&mut self, labels: SeriesLabels) { self.settings.labels = labels; }
    pub fn set_unit(&mut self, unit: impl Into<String>) { self.settings.unit = unit.into(); }

    fn invalidate(&mut self) {
        self.prepared = None;
        self.hover = None;
    }

    fn prepared(&mut self) -> Option<&PreparedData> {
        if self.prepared.is_none() {
            self.prepared = prepare(&self.dataset, &self.settings.pipeline);
        }
        self.prepared.as_ref()
    }

    /// Render the current state. `None` means keep showing the previous frame.
    pub fn render(&mut self) -> Option<RenderedChart> {
        let geometry = self.settings.geometry;
        let target = self.settings.pipeline.target_points;
        let chart = self.prepared()?.draw(&geometry, target);
        if chart.is_none() {
            debug!("render skipped");
        }
        chart
    }

    /// Resolve the pointer (content-box coordinates) to the nearest decimated sample.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<&HitResult> {
        let geometry = self.settings.geometry;
        let hit = self.prepared()?.resolve_nearest(Point::new(x, y), &geometry);
        self.hover = hit;
        self.hover.as_ref()
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// Tooltip for the current hover, if any.
    pub fn tooltip(&self) -> Result<Option<Tooltip>> {
        self.hover
            .as_ref()
            .map(|hit| Tooltip::from_hit(hit, &self.settings.labels, &self.settings.unit))
            .transpose()
    }

    pub fn stats(&self) -> Option<ComparisonStats> {
        ComparisonStats::compute(&self.dataset)
    }
}
