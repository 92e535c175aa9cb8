// File: crates/skychart-core/src/align.rs
// Summary: Cleans raw series (forward-fill) and merges them onto one timestamp axis.

use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::series::{RawSeries, Sample, TimeSeriesDataset};

/// Replace every missing value with the most recent valid one.
///
/// Leading gaps take the first valid value found; a series with no valid
/// value at all becomes zeros.
pub fn forward_fill(values: &[Option<f64>]) -> Vec<f64> {
    let mut last_valid = values.iter().flatten().copied().next().unwrap_or(0.0);
    values
        .iter()
        .map(|v| match v {
            Some(v) => {
                last_valid = *v;
                *v
            }
            None => last_valid,
        })
        .collect()
}

/// Merge `a` and the optional `b` into one dataset indexed by `a`'s timestamps.
///
/// A series lacking its value container yields an empty dataset. Arrays whose
/// length disagrees with the timestamp axis are a caller contract violation.
pub fn align(a: &RawSeries, b: Option<&RawSeries>) -> Result<TimeSeriesDataset> {
    let Some(values_a) = a.values.as_deref() else {
        warn!("series A has no values; producing empty dataset");
        return Ok(TimeSeriesDataset::empty());
    };
    check_len("A", a.timestamps.len(), values_a.len())?;
    let clean_a = forward_fill(values_a);

    let clean_b = match b {
        None => None,
        Some(raw) => {
            let Some(values_b) = raw.values.as_deref() else {
                warn!("series B has no values; producing empty dataset");
                return Ok(TimeSeriesDataset::empty());
            };
            check_len("B", a.timestamps.len(), values_b.len())?;
            Some(forward_fill(values_b))
        }
    };

    let dataset: TimeSeriesDataset = a
        .timestamps
        .iter()
        .enumerate()
        .map(|(i, ts)| {
            let vb = clean_b.as_ref().map(|b| b[i]);
            Sample::new(ts.as_str(), Some(clean_a[i]), vb)
        })
        .collect();
    debug!(samples = dataset.len(), has_b = clean_b.is_some(), "aligned dataset");
    Ok(dataset)
}

fn check_len(series: &'static str, timestamps: usize, values: usize) -> Result<()> {
    if timestamps == values {
        Ok(())
    } else {
        Err(ChartError::LengthMismatch { series, timestamps, values })
    }
}
