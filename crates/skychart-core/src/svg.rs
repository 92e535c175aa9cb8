// File: crates/skychart-core/src/svg.rs
// Summary: Markup adapter writing a rendered chart (and optional hover) as a standalone SVG document.

use std::fmt::Write as _;

use crate::chart::RenderedChart;
use crate::hit::HitResult;
use crate::series::SeriesSlot;

const GRID_STROKE: &str = "#1e2430";
const LABEL_FILL: &str = "#94a3b8";
const CROSSHAIR_STROKE: &str = "rgba(255,255,255,0.2)";
const MARKER_FILL: &str = "#13161b";

/// Stroke color per series.
pub const fn series_color(slot: SeriesSlot) -> &'static str {
    match slot {
        SeriesSlot::A => "#22d3ee",
        SeriesSlot::B => "#f59e0b",
    }
}

/// Serialize `chart` to SVG. With a `hover`, the crosshair and series markers
/// are added; the B marker is left out when the hovered sample has no B value.
pub fn render_svg(chart: &RenderedChart, hover: Option<&HitResult>) -> String {
    let g = &chart.geometry;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = g.width,
        h = g.height
    );

    out.push_str("  <g class=\"grid\">\n");
    for line in chart.grid() {
        let _ = writeln!(
            out,
            r#"    <line x1="{x1}" x2="{x2}" y1="{y:.1}" y2="{y:.1}" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
            x1 = g.padding,
            x2 = g.width - g.padding,
            y = line.y
        );
        let _ = writeln!(
            out,
            r#"    <text x="{x}" y="{ty:.1}" text-anchor="end" fill="{LABEL_FILL}" font-family="monospace" font-size="11">{label}</text>"#,
            x = g.padding - 10.0,
            ty = line.y + 4.0,
            label = line.label
        );
    }
    out.push_str("  </g>\n");

    for slot in [SeriesSlot::A, SeriesSlot::B] {
        if let Some(path) = chart.path(slot).filter(|p| !p.is_empty()) {
            let _ = writeln!(
                out,
                r#"  <path d="{d}" fill="none" stroke="{color}" stroke-width="2.5"/>"#,
                d = path.to_svg_data(),
                color = series_color(slot)
            );
        }
    }

    if let Some(hit) = hover {
        let c = hit.crosshair(g);
        let _ = writeln!(
            out,
            r#"  <line x1="{x:.1}" x2="{x:.1}" y1="{top}" y2="{bottom}" stroke="{CROSSHAIR_STROKE}" stroke-dasharray="4"/>"#,
            x = c.x,
            top = c.top,
            bottom = c.bottom
        );
        for slot in [SeriesSlot::A, SeriesSlot::B] {
            if let Some(p) = hit.marker(slot) {
                let _ = writeln!(
                    out,
                    r#"  <circle cx="{:.1}" cy="{:.1}" r="4" fill="{MARKER_FILL}" stroke="{}" stroke-width="2"/>"#,
                    p.x,
                    p.y,
                    series_color(slot)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
