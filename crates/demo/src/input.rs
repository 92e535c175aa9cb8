// File: crates/demo/src/input.rs
// Summary: Loads a raw series from CSV or an hourly JSON document.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use skychart_core::RawSeries;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct HourlyDocument {
    hourly: Option<Hourly>,
}

#[derive(Debug, Deserialize)]
struct Hourly {
    #[serde(default)]
    time: Vec<String>,
    #[serde(flatten)]
    columns: HashMap<String, serde_json::Value>,
}

/// Load by extension: `.json` as an hourly document, anything else as CSV.
pub fn load_series(path: &Path, metric: &str) -> Result<RawSeries> {
    let is_json = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let parsed = if is_json {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        parse_hourly_json(&text, metric)
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        read_csv(file, metric)
    };
    let series = parsed.with_context(|| format!("failed to load series '{}'", path.display()))?;
    debug!(path = %path.display(), samples = series.len(), "loaded series");
    Ok(series)
}

/// `{"hourly": {"time": [...], "<metric>": [number|null, ...]}}`.
/// A missing `hourly` object or metric column yields a series without values.
pub fn parse_hourly_json(text: &str, metric: &str) -> Result<RawSeries> {
    let doc: HourlyDocument = serde_json::from_str(text).context("parsing hourly JSON")?;
    let Some(hourly) = doc.hourly else {
        warn!("document has no hourly block");
        return Ok(RawSeries::without_values(Vec::new()));
    };
    match hourly.columns.get(metric) {
        Some(column) => {
            let values: Vec<Option<f64>> = serde_json::from_value(column.clone())
                .with_context(|| format!("column '{metric}' is not an array of numbers"))?;
            Ok(RawSeries::new(hourly.time, values))
        }
        None => {
            warn!(metric, "hourly block has no such column");
            Ok(RawSeries::without_values(hourly.time))
        }
    }
}

/// CSV with a time column and a value column named after `metric` or `value`.
/// Empty or non-numeric cells are missing values.
pub fn read_csv<R: Read>(reader: R, metric: &str) -> Result<RawSeries> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };

    let i_time = idx(&["time", "timestamp", "date", "datetime"])
        .context("no time/timestamp column")?;
    let metric = metric.to_lowercase();
    let i_value = idx(&[metric.as_str(), "value"]);
    if i_value.is_none() {
        warn!(metric = %metric, "no value column found");
    }

    let mut timestamps = Vec::new();
    let mut values = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        timestamps.push(rec.get(i_time).unwrap_or_default().trim().to_string());
        let v = i_value
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok());
        values.push(v);
    }

    Ok(match i_value {
        Some(_) => RawSeries::new(timestamps, values),
        None => RawSeries::without_values(timestamps),
    })
}
