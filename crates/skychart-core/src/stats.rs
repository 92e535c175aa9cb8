// File: crates/skychart-core/src/stats.rs
// Summary: Head-to-head statistics for a two-series comparison.

use crate::series::{SeriesSlot, TimeSeriesDataset};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonStats {
    pub avg_a: f64,
    pub avg_b: f64,
    pub max_a: f64,
    pub max_b: f64,
    /// Share of samples where A is strictly greater than B, rounded to a whole percent.
    /// Ties count for B.
    pub a_wins_percent: u8,
}

impl ComparisonStats {
    /// `None` for an empty dataset or when series B is absent.
    pub fn compute(dataset: &TimeSeriesDataset) -> Option<Self> {
        if dataset.is_empty() || !dataset.has_series(SeriesSlot::B) {
            return None;
        }
        let n = dataset.len() as f64;
        let (mut sum_a, mut sum_b) = (0.0, 0.0);
        let (mut max_a, mut max_b) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut a_wins = 0usize;
        for s in dataset.samples() {
            let a = s.value_a.unwrap_or(0.0);
            let b = s.value_b.unwrap_or(0.0);
            sum_a += a;
            sum_b += b;
            max_a = max_a.max(a);
            max_b = max_b.max(b);
            if a > b {
                a_wins += 1;
            }
        }
        Some(Self {
            avg_a: sum_a / n,
            avg_b: sum_b / n,
            max_a,
            max_b,
            a_wins_percent: (a_wins as f64 / n * 100.0).round() as u8,
        })
    }

    pub fn b_wins_percent(&self) -> u8 { 100 - self.a_wins_percent }

    /// Average of A minus average of B.
    pub fn mean_difference(&self) -> f64 { self.avg_a - self.avg_b }

    /// Mean difference relative to B's average, in percent. `None` when B averages zero.
    pub fn relative_difference_percent(&self) -> Option<f64> {
        if self.avg_b == 0.0 {
            None
        } else {
            Some(self.mean_difference() / self.avg_b * 100.0)
        }
    }

    /// The series winning more than half of the samples; B otherwise.
    pub fn leader(&self) -> SeriesSlot {
        if self.a_wins_percent > 50 { SeriesSlot::A } else { SeriesSlot::B }
    }
}
