// File: crates/skychart-core/src/downsample.rs
// Summary: Downsampling utilities (fixed-stride decimation; linear resampling to a render resolution).

use tracing::{debug, trace};

use crate::series::TimeSeriesDataset;

/// Keep every `stride`-th sample so at most `max_raw_points` remain.
/// `stride = ceil(len / max_raw_points)`; datasets within the cap are returned unchanged.
pub fn decimate(dataset: &TimeSeriesDataset, max_raw_points: usize) -> TimeSeriesDataset {
    let n = dataset.len();
    if max_raw_points == 0 || n <= max_raw_points {
        return dataset.clone();
    }
    let stride = n.div_ceil(max_raw_points);
    debug!(len = n, stride, "decimating dataset");
    dataset
        .samples()
        .iter()
        .step_by(stride)
        .cloned()
        .collect()
}

/// Linearly resample `series` to exactly `target_count` values.
///
/// Output point `i` sits at fractional source index `i * (n-1) / (target_count-1)`,
/// so the first and last outputs equal the first and last inputs. Null inputs are
/// read as `fill` (the axis minimum at the call site).
pub fn resample<V>(series: &[V], target_count: usize, fill: f64) -> Vec<f64>
where
    V: Copy + Into<Option<f64>>,
{
    let n = series.len();
    let at = |i: usize| -> f64 { series[i].into().unwrap_or(fill) };

    if n == 0 {
        return vec![0.0; target_count];
    }
    if n == 1 || target_count < 2 {
        return vec![at(0); target_count];
    }

    trace!(from = n, to = target_count, "resampling series");
    let last = n - 1;
    let denom = (target_count - 1) as f64;
    (0..target_count)
        .map(|i| {
            let x = (i * last) as f64 / denom;
            let idx = (x.floor() as usize).min(last);
            let t = x - idx as f64;
            let v0 = at(idx);
            let v1 = at((idx + 1).min(last));
            v0 + (v1 - v0) * t
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_interpolates_midpoints() {
        let got = resample(&[0.0, 10.0], 3, 0.0);
        assert_eq!(got, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn resample_reads_nulls_as_fill() {
        let got = resample(&[Some(4.0), None], 2, -2.0);
        assert_eq!(got, vec![4.0, -2.0]);
    }
}
