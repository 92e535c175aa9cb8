// File: crates/skychart-core/src/lib.rs
// Summary: Core library entry point; exports the time-series visualization pipeline.

pub mod align;
pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod grid;
pub mod hit;
pub mod metric;
pub mod path;
pub mod scale;
pub mod series;
pub mod stats;
pub mod svg;
pub mod tooltip;
pub mod types;
pub mod view;

pub use align::{align, forward_fill};
pub use chart::{prepare, render_chart, PreparedData, RenderedChart};
pub use config::{ChartSettings, PipelineConfig, SeriesLabels};
pub use downsample::{decimate, resample};
pub use error::{ChartError, Result};
pub use grid::{grid_lines, GridLine, GridLines};
pub use hit::{resolve_nearest, Crosshair, HitResult};
pub use metric::{Metric, MetricSummary};
pub use path::{build_path, RenderedPath};
pub use scale::Scale;
pub use series::{RawSeries, Sample, SeriesSlot, TimeSeriesDataset};
pub use stats::ComparisonStats;
pub use tooltip::{place_tooltip, TimestampParts, Tooltip, TooltipRow};
pub use types::{Point, RenderGeometry};
pub use view::ChartView;
