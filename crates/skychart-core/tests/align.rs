// File: crates/skychart-core/tests/align.rs
// Purpose: Forward-fill and merge behavior of the aligner.

mod common;

use common::{hourly, raw};
use skychart_core::{align, forward_fill, ChartError, RawSeries, Scale, SeriesSlot};

#[test]
fn leading_and_internal_gaps_fill_forward() {
    let got = forward_fill(&[None, Some(5.0), None, None, Some(8.0)]);
    assert_eq!(got, vec![5.0, 5.0, 5.0, 5.0, 8.0]);
}

#[test]
fn aligned_series_contain_no_nulls() {
    let a = raw(&[None, Some(1.5), None, Some(-2.0), None]);
    let b = raw(&[Some(3.0), None, None, None, Some(4.0)]);
    let ds = align(&a, Some(&b)).unwrap();
    assert_eq!(ds.len(), 5);
    assert!(ds.samples().iter().all(|s| s.value_a.is_some() && s.value_b.is_some()));
    assert_eq!(ds.values(SeriesSlot::B), vec![Some(3.0), Some(3.0), Some(3.0), Some(3.0), Some(4.0)]);
}

#[test]
fn samples_follow_the_shared_timestamp_axis() {
    let a = raw(&[Some(1.0), Some(2.0), Some(3.0)]);
    let ds = align(&a, None).unwrap();
    let ts: Vec<_> = ds.samples().iter().map(|s| s.timestamp.clone()).collect();
    assert_eq!(ts, hourly(3));
    assert!(!ds.has_series(SeriesSlot::B));
    assert!(ds.samples().iter().all(|s| s.value_b.is_none()));
}

#[test]
fn missing_value_container_yields_empty_dataset() {
    let a = raw(&[Some(1.0), Some(2.0)]);
    let b = RawSeries::without_values(hourly(2));
    assert!(align(&a, Some(&b)).unwrap().is_empty());
    assert!(align(&b, None).unwrap().is_empty());
}

#[test]
fn length_mismatch_is_rejected() {
    let a = raw(&[Some(1.0), Some(2.0), Some(3.0)]);
    let b = raw(&[Some(1.0), Some(2.0)]);
    match align(&a, Some(&b)) {
        Err(ChartError::LengthMismatch { series, timestamps, values }) => {
            assert_eq!(series, "B");
            assert_eq!((timestamps, values), (3, 2));
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }
}

#[test]
fn boundary_range_of_ten_takes_default_step() {
    let ds = align(&raw(&[Some(10.0), None, None, Some(20.0)]), None).unwrap();
    assert_eq!(ds.values(SeriesSlot::A), vec![Some(10.0), Some(10.0), Some(10.0), Some(20.0)]);
    let scale = Scale::from_values(ds.all_values()).unwrap();
    assert_eq!(scale, Scale { min: 10.0, max: 20.0, step: 5.0 });
}
