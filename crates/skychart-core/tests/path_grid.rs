// File: crates/skychart-core/tests/path_grid.rs
// Purpose: Screen-space polyline layout and grid line derivation.

mod common;

use common::pair;
use skychart_core::svg::render_svg;
use skychart_core::types::MAX_GRID_LINES;
use skychart_core::{build_path, grid_lines, render_chart, PipelineConfig, RenderGeometry, Scale};

fn geometry() -> RenderGeometry {
    RenderGeometry::new(1000.0, 500.0, 60.0)
}

#[test]
fn fewer_than_two_values_draw_nothing() {
    let s = Scale { min: 0.0, max: 10.0, step: 1.0 };
    assert!(build_path(&[5.0], &geometry(), &s).is_empty());
    assert!(build_path::<f64>(&[], &geometry(), &s).is_empty());
    assert_eq!(build_path(&[5.0], &geometry(), &s).to_svg_data(), "");
}

#[test]
fn two_point_path_spans_plot_area() {
    let s = Scale { min: 0.0, max: 10.0, step: 1.0 };
    let path = build_path(&[0.0, 10.0], &geometry(), &s);
    assert_eq!(path.to_svg_data(), "M 60.0,440.0 L 940.0 60.0");
}

#[test]
fn x_is_strictly_increasing() {
    let s = Scale { min: -10.0, max: 10.0, step: 5.0 };
    let values: Vec<f64> = (0..200).map(|i| (i as f64 * 0.3).sin() * 9.0).collect();
    let path = build_path(&values, &geometry(), &s);
    assert_eq!(path.len(), 200);
    assert!(path.points.windows(2).all(|w| w[1].x > w[0].x));
    assert_eq!(path.points[0].x, 60.0);
    assert!((path.points[199].x - 940.0).abs() < 1e-9);
}

#[test]
fn larger_values_draw_higher() {
    let s = Scale { min: 0.0, max: 20.0, step: 5.0 };
    let path = build_path(&[5.0, 15.0], &geometry(), &s);
    assert!(path.points[1].y < path.points[0].y);
}

#[test]
fn nulls_draw_at_axis_minimum() {
    let s = Scale { min: 0.0, max: 20.0, step: 5.0 };
    let path = build_path(&[Some(10.0), None, Some(10.0)], &geometry(), &s);
    assert_eq!(path.points[1].y, 440.0);
    assert_eq!(path.points[0].y, 250.0);
}

#[test]
fn grid_covers_scale_inclusive() {
    let s = Scale { min: 0.0, max: 20.0, step: 5.0 };
    let lines: Vec<_> = grid_lines(&s, &geometry()).collect();
    let labels: Vec<i64> = lines.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec![0, 5, 10, 15, 20]);
    assert_eq!(lines.first().unwrap().y, 440.0);
    assert_eq!(lines.last().unwrap().y, 60.0);
}

#[test]
fn grid_is_restartable_and_sized() {
    let s = Scale { min: -4.0, max: 5.0, step: 1.0 };
    let grid = grid_lines(&s, &geometry());
    assert_eq!(grid.len(), 10);
    let first: Vec<_> = grid.clone().collect();
    let second: Vec<_> = grid.collect();
    assert_eq!(first, second);
    assert_eq!(first[0].label, -4);
    assert_eq!(first[9].label, 5);
}

#[test]
fn huge_range_grid_is_capped_and_spans_axis() {
    let g = RenderGeometry::default();
    let s = Scale::from_values([0.0, 1e21]).unwrap();
    let grid = grid_lines(&s, &g);
    assert!(grid.len() > 1);
    assert!(grid.len() <= MAX_GRID_LINES);

    let lines: Vec<_> = grid.collect();
    assert_eq!(lines[0].value, 0.0);
    assert_eq!(lines[0].y, g.bottom());
    assert!(lines.windows(2).all(|w| w[1].value > w[0].value));
    let top = lines.last().unwrap();
    assert!(top.value > s.max * 0.99);
    assert!(top.y >= g.padding - 1e-6);
}

#[test]
fn huge_range_chart_still_serializes() {
    let dataset = pair(&[0.0, 1e21, 3.0], &[5.0, 7.0, 1e20]);
    let chart = render_chart(&dataset, &RenderGeometry::default(), &PipelineConfig::default()).unwrap();
    let svg = render_svg(&chart, None);
    assert!(svg.matches("<line ").count() <= MAX_GRID_LINES);
    assert_eq!(svg.matches("<path ").count(), 2);
}
