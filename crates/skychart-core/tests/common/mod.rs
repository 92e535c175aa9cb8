// File: crates/skychart-core/tests/common/mod.rs
// Purpose: Shared dataset builders for the integration tests.
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use skychart_core::{align, RawSeries, TimeSeriesDataset};

/// `n` consecutive hourly ISO-8601 timestamps starting Monday 2024-03-04 00:00.
pub fn hourly(n: usize) -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
    (0..n)
        .map(|i| (start + Duration::hours(i as i64)).format("%Y-%m-%dT%H:%M").to_string())
        .collect()
}

pub fn raw(values: &[Option<f64>]) -> RawSeries {
    RawSeries::new(hourly(values.len()), values.to_vec())
}

pub fn dense(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Two-series dataset from dense value slices of equal length.
pub fn pair(a: &[f64], b: &[f64]) -> TimeSeriesDataset {
    align(&raw(&dense(a)), Some(&raw(&dense(b)))).unwrap()
}

/// Single-series dataset.
pub fn single(a: &[f64]) -> TimeSeriesDataset {
    align(&raw(&dense(a)), None).unwrap()
}

/// A smooth, deterministic waveform of `n` points.
pub fn wave(n: usize, offset: f64) -> Vec<f64> {
    (0..n).map(|i| offset + (i as f64 * 0.05).sin() * 8.0).collect()
}
