// File: crates/skychart-core/src/tooltip.rs
// Summary: Tooltip content (timestamp breakdown, per-series rows) and placement.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::config::SeriesLabels;
use crate::error::{ChartError, Result};
use crate::hit::HitResult;
use crate::series::SeriesSlot;
use crate::types::Point;

/// Distance from the pointer to the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 20.0;
/// Assumed tooltip box size used to decide when to flip.
pub const TOOLTIP_WIDTH: f64 = 180.0;
pub const TOOLTIP_HEIGHT: f64 = 100.0;
/// Extra gap when the tooltip is flipped to the other side of the pointer.
pub const TOOLTIP_FLIP_GAP: f64 = 10.0;

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Human-readable pieces of a sample timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampParts {
    /// e.g. "Monday"
    pub day_name: String,
    pub day: u32,
    /// e.g. "March"
    pub month_name: String,
    /// "HH:MM"
    pub time: String,
}

impl TimestampParts {
    /// Parse a local ISO-8601 timestamp (`2024-03-04T13:00`, seconds optional),
    /// an RFC 3339 timestamp, or a bare date (midnight).
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let mut last_err = None;
        for pattern in LOCAL_FORMATS {
            match NaiveDateTime::parse_from_str(value, pattern) {
                Ok(dt) => return Ok(Self::from_naive(&dt)),
                Err(e) => last_err = Some(e),
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self::from_naive(&dt.naive_local()));
        }
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(d) => Ok(Self::from_naive(&d.and_time(chrono::NaiveTime::MIN))),
            Err(e) => Err(ChartError::Timestamp {
                value: value.to_string(),
                source: last_err.unwrap_or(e),
            }),
        }
    }

    fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            day_name: dt.format("%A").to_string(),
            day: dt.day(),
            month_name: dt.format("%B").to_string(),
            time: dt.format("%H:%M").to_string(),
        }
    }
}

impl fmt::Display for TimestampParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {} • {}", self.day_name, self.day, self.month_name, self.time)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub slot: SeriesSlot,
    pub label: String,
    /// Value with unit suffix, e.g. "12.5°".
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub time: TimestampParts,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    /// Rows for every series with a value at the hit; B is omitted when null.
    pub fn from_hit(hit: &HitResult, labels: &SeriesLabels, unit: &str) -> Result<Self> {
        let time = hit.timestamp_parts()?;
        let rows = [(SeriesSlot::A, &labels.a), (SeriesSlot::B, &labels.b)]
            .into_iter()
            .filter_map(|(slot, label)| {
                hit.sample.value(slot).map(|v| TooltipRow {
                    slot,
                    label: label.clone(),
                    value: format!("{v}{unit}"),
                })
            })
            .collect();
        Ok(Self { time, rows })
    }
}

/// Top-left corner for a tooltip shown next to `pointer` inside `viewport`
/// (width, height), flipped to the other side of the pointer near the edges.
pub fn place_tooltip(pointer: Point, viewport: (f64, f64)) -> Point {
    let (vw, vh) = viewport;
    let mut x = pointer.x + TOOLTIP_OFFSET;
    let mut y = pointer.y + TOOLTIP_OFFSET;
    if x + TOOLTIP_WIDTH > vw {
        x = pointer.x - TOOLTIP_WIDTH - TOOLTIP_FLIP_GAP;
    }
    if y + TOOLTIP_HEIGHT > vh {
        y = pointer.y - TOOLTIP_HEIGHT - TOOLTIP_FLIP_GAP;
    }
    Point::new(x, y)
}
