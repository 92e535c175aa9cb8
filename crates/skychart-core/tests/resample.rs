// File: crates/skychart-core/tests/resample.rs
// Purpose: Decimation bounds and resampling endpoints/degenerate cases.

mod common;

use common::{single, wave};
use skychart_core::{decimate, resample, SeriesSlot};

#[test]
fn decimation_never_exceeds_cap() {
    for len in [0usize, 1, 799, 800, 801, 1599, 1600, 1601, 5000] {
        let ds = single(&wave(len, 0.0));
        let out = decimate(&ds, 800);
        assert!(out.len() <= 800, "len {len} -> {}", out.len());
        if len <= 800 {
            assert_eq!(out, ds);
        }
    }
}

#[test]
fn decimation_keeps_every_stride_th_sample() {
    let values: Vec<f64> = (0..1601).map(|i| i as f64).collect();
    let out = decimate(&single(&values), 800);
    // stride = ceil(1601 / 800) = 3
    assert_eq!(out.len(), 534);
    let kept: Vec<_> = out.values(SeriesSlot::A).into_iter().flatten().collect();
    assert_eq!(kept[0], 0.0);
    assert_eq!(kept[1], 3.0);
    assert_eq!(*kept.last().unwrap(), 1599.0);
}

#[test]
fn resample_preserves_endpoints() {
    let series = [3.25, -1.0, 7.5, 0.125, 42.0, 9.75, -6.5];
    for n in [2usize, 3, 7, 13, 200, 1000] {
        let out = resample(&series, n, 0.0);
        assert_eq!(out.len(), n);
        assert_eq!(out[0], series[0]);
        assert_eq!(out[n - 1], series[series.len() - 1]);
    }
}

#[test]
fn resampled_values_stay_between_neighbours() {
    let series = [0.0, 10.0, 5.0];
    let out = resample(&series, 5, 0.0);
    assert_eq!(out, vec![0.0, 5.0, 10.0, 7.5, 5.0]);
}

#[test]
fn degenerate_sources() {
    let empty: [f64; 0] = [];
    assert_eq!(resample(&empty, 4, 9.0), vec![0.0; 4]);
    assert_eq!(resample(&[6.5], 3, 0.0), vec![6.5; 3]);
    assert_eq!(resample(&[Some(1.0), Some(2.0)], 0, 0.0), Vec::<f64>::new());
    assert_eq!(resample(&[Some(1.0), Some(2.0)], 1, 0.0), vec![1.0]);
}
