// File: crates/skychart-core/src/series.rs
// Summary: Raw and aligned time-series models shared by every pipeline stage.
// Notes:
// - A dataset is built once per fetch and never mutated; stages produce new
//   datasets or plain vectors instead of editing samples in place.

/// Which of the (up to) two compared series a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesSlot {
    A,
    B,
}

/// Series as delivered by the data source: a timestamp axis plus a parallel
/// value array. `values` is `None` when the payload lacks the value container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawSeries {
    pub timestamps: Vec<String>,
    pub values: Option<Vec<Option<f64>>>,
}

impl RawSeries {
    pub fn new(timestamps: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self { timestamps, values: Some(values) }
    }

    /// A series whose value container is missing.
    pub fn without_values(timestamps: Vec<String>) -> Self {
        Self { timestamps, values: None }
    }

    pub fn len(&self) -> usize { self.timestamps.len() }
    pub fn is_empty(&self) -> bool { self.timestamps.is_empty() }
}

/// One aligned row: a shared timestamp and the value of each series at it.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// ISO-8601 timestamp as received.
    pub timestamp: String,
    pub value_a: Option<f64>,
    /// `None` throughout for single-series views.
    pub value_b: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: impl Into<String>, value_a: Option<f64>, value_b: Option<f64>) -> Self {
        Self { timestamp: timestamp.into(), value_a, value_b }
    }

    pub fn value(&self, slot: SeriesSlot) -> Option<f64> {
        match slot {
            SeriesSlot::A => self.value_a,
            SeriesSlot::B => self.value_b,
        }
    }
}

/// Chronologically ordered samples on one timestamp axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeriesDataset {
    samples: Vec<Sample>,
}

impl TimeSeriesDataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }

    /// Values of one series, in sample order.
    pub fn values(&self, slot: SeriesSlot) -> Vec<Option<f64>> {
        self.samples.iter().map(|s| s.value(slot)).collect()
    }

    /// A series is present when at least one of its values is non-null.
    pub fn has_series(&self, slot: SeriesSlot) -> bool {
        self.samples.iter().any(|s| s.value(slot).is_some())
    }

    /// Every non-null value of both series.
    pub fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples
            .iter()
            .flat_map(|s| [s.value_a, s.value_b])
            .flatten()
    }
}

impl FromIterator<Sample> for TimeSeriesDataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}
