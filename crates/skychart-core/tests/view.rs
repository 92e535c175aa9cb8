// File: crates/skychart-core/tests/view.rs
// Purpose: Event-driven chart view: renders, resizes, hover and tooltip.

mod common;

use common::{pair, single, wave};
use skychart_core::svg::render_svg;
use skychart_core::{
    render_chart, ChartSettings, ChartView, PipelineConfig, RenderGeometry, SeriesLabels, SeriesSlot,
    TimeSeriesDataset,
};

fn view_with(ds: TimeSeriesDataset) -> ChartView {
    let mut view = ChartView::new(ChartSettings::default());
    view.set_data(ds);
    view
}

#[test]
fn empty_view_renders_nothing() {
    let mut view = ChartView::new(ChartSettings::default());
    assert!(view.render().is_none());
    assert!(view.pointer_move(300.0, 200.0).is_none());
}

#[test]
fn rendering_twice_is_identical() {
    let mut view = view_with(pair(&wave(2000, 5.0), &wave(2000, 9.0)));
    let first = view.render().unwrap();
    let second = view.render().unwrap();
    assert_eq!(first, second);
    assert_eq!(render_svg(&first, None), render_svg(&second, None));

    let again = render_chart(view.dataset(), view.geometry(), &PipelineConfig::default()).unwrap();
    assert_eq!(first, again);
}

#[test]
fn paths_have_render_resolution() {
    let mut view = view_with(pair(&wave(500, 5.0), &wave(500, 9.0)));
    let chart = view.render().unwrap();
    assert_eq!(chart.series_a.as_ref().unwrap().len(), 200);
    assert_eq!(chart.series_b.as_ref().unwrap().len(), 200);
}

#[test]
fn absent_series_b_is_not_drawn() {
    let mut view = view_with(single(&wave(100, 0.0)));
    let chart = view.render().unwrap();
    assert!(chart.path(SeriesSlot::A).is_some());
    assert!(chart.path(SeriesSlot::B).is_none());
    assert!(view.stats().is_none());
}

#[test]
fn degenerate_geometry_skips_render() {
    let mut view = view_with(single(&wave(100, 0.0)));
    view.resize(RenderGeometry::new(100.0, 500.0, 60.0));
    assert!(view.render().is_none());
    view.resize(RenderGeometry::new(800.0, 400.0, 40.0));
    let chart = view.render().unwrap();
    assert_eq!(chart.geometry.width, 800.0);
}

#[test]
fn hover_tracks_pointer_and_clears() {
    let mut view = view_with(pair(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]));
    view.set_labels(SeriesLabels { a: "Warsaw".into(), b: "London".into() });
    view.set_unit("°");

    let hit = view.pointer_move(1140.0, 100.0).unwrap();
    assert_eq!(hit.index, 2);

    let tip = view.tooltip().unwrap().unwrap();
    assert_eq!(tip.rows.len(), 2);
    assert_eq!(tip.rows[0].label, "Warsaw");
    assert_eq!(tip.rows[0].value, "3°");
    assert_eq!(tip.rows[1].value, "6°");
    assert_eq!(tip.time.time, "02:00");

    view.pointer_leave();
    assert!(view.hover().is_none());
    assert!(view.tooltip().unwrap().is_none());
}

#[test]
fn new_data_invalidates_hover() {
    let mut view = view_with(single(&[1.0, 2.0, 3.0]));
    assert!(view.pointer_move(600.0, 100.0).is_some());
    view.set_data(single(&[7.0, 8.0]));
    assert!(view.hover().is_none());
    let hit = view.pointer_move(2000.0, 100.0).unwrap();
    assert_eq!(hit.sample.value_a, Some(8.0));
}

#[test]
fn settings_load_from_toml() {
    let settings = ChartSettings::from_toml_str(
        r#"
        unit = " km/h"

        [pipeline]
        max_raw_points = 400

        [geometry]
        width = 640.0
        height = 320.0
        padding = 20.0

        [labels]
        a = "Berlin"
        "#,
    )
    .unwrap();
    assert_eq!(settings.pipeline.max_raw_points, 400);
    assert_eq!(settings.pipeline.target_points, 200);
    assert_eq!(settings.geometry, RenderGeometry::new(640.0, 320.0, 20.0));
    assert_eq!(settings.labels.a, "Berlin");
    assert_eq!(settings.labels.b, "City B");
    assert_eq!(settings.unit, " km/h");

    assert!(ChartSettings::from_toml_str("pipeline = 3").is_err());
}
