// File: crates/skychart-core/src/metric.rs
// Summary: Weather metric catalogue (payload keys, display units) and per-metric averages.

use std::fmt;

/// Hourly weather quantities the charts can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    WindSpeed,
    RelativeHumidity,
    Precipitation,
    Pm25,
}

impl Metric {
    /// Metrics shown side by side for a single location.
    pub const SINGLE_LOCATION: [Metric; 4] = [
        Metric::Temperature,
        Metric::WindSpeed,
        Metric::RelativeHumidity,
        Metric::Precipitation,
    ];

    /// Key of the hourly value array in the data source payload.
    pub const fn key(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature_2m",
            Metric::WindSpeed => "windspeed_10m",
            Metric::RelativeHumidity => "relativehumidity_2m",
            Metric::Precipitation => "precipitation",
            Metric::Pm25 => "pm2_5",
        }
    }

    /// Suffix appended to displayed values.
    pub const fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°",
            Metric::WindSpeed => " km/h",
            Metric::RelativeHumidity => "%",
            Metric::Precipitation => " mm",
            Metric::Pm25 => " µg/m³",
        }
    }

    /// Recognize a payload key by substring (`temp`, `wind`, `humid`, `precip`, `pm`).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        if key.contains("temp") {
            Some(Metric::Temperature)
        } else if key.contains("wind") {
            Some(Metric::WindSpeed)
        } else if key.contains("humid") {
            Some(Metric::RelativeHumidity)
        } else if key.contains("precip") {
            Some(Metric::Precipitation)
        } else if key.contains("pm") {
            Some(Metric::Pm25)
        } else {
            None
        }
    }

    /// Display unit for a payload key; empty for keys not in the catalogue.
    pub fn unit_for_key(key: &str) -> &'static str {
        Self::from_key(key).map_or("", Self::unit)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Headline average of one metric for a location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,
    pub average: f64,
}

impl MetricSummary {
    /// Mean of the values with nulls counted as zero; `None` for no values.
    pub fn from_values(metric: Metric, values: &[Option<f64>]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().map(|v| v.unwrap_or(0.0)).sum();
        Some(Self { metric, average: sum / values.len() as f64 })
    }

    /// Average with the metric's unit, one decimal place ("12.3 km/h").
    pub fn display(&self) -> String {
        format!("{:.1}{}", self.average, self.metric.unit())
    }
}
