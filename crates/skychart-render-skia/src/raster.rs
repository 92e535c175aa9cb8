// File: crates/skychart-render-skia/src/raster.rs
// Summary: Headless PNG rendering of a RenderedChart using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use skychart_core::{HitResult, RenderedChart, RenderedPath, SeriesSlot};
use tracing::debug;

use crate::palette::{Argb, Palette};

const LABEL_SIZE: f32 = 11.0;
const SERIES_STROKE: f32 = 2.5;
const MARKER_RADIUS: f32 = 4.0;

fn color((a, r, g, b): Argb) -> skia::Color {
    skia::Color::from_argb(a, r, g, b)
}

fn stroke(c: Argb, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn fill(c: Argb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

pub struct SkiaRenderer {
    palette: Palette,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { palette: Palette::default() }
    }

    /// Rasterize `chart` (plus crosshair and markers for `hover`) to PNG bytes.
    pub fn render_png_bytes(&self, chart: &RenderedChart, hover: Option<&HitResult>) -> Result<Vec<u8>> {
        let g = &chart.geometry;
        let (w, h) = ((g.width.round() as i32).max(1), (g.height.round() as i32).max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(self.palette.background));

        self.draw_grid(canvas, chart);
        for slot in [SeriesSlot::A, SeriesSlot::B] {
            if let Some(path) = chart.path(slot) {
                self.draw_series(canvas, path, self.palette.series(slot));
            }
        }
        if let Some(hit) = hover {
            self.draw_hover(canvas, chart, hit);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(width = w, height = h, bytes = data.len(), "rasterized chart");
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_png(
        &self,
        chart: &RenderedChart,
        hover: Option<&HitResult>,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(chart, hover)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_grid(&self, canvas: &skia::Canvas, chart: &RenderedChart) {
        let g = &chart.geometry;
        let line = stroke(self.palette.grid, 1.0);
        let text = fill(self.palette.axis_label);
        let mut font = skia::Font::default();
        font.set_size(LABEL_SIZE);

        let (left, right) = (g.padding as f32, (g.width - g.padding) as f32);
        for grid_line in chart.grid() {
            let y = grid_line.y as f32;
            canvas.draw_line((left, y), (right, y), &line);

            // right-aligned 10px left of the plot area
            let label = grid_line.label.to_string();
            let (width, _) = font.measure_str(&label, Some(&text));
            canvas.draw_str(&label, (left - 10.0 - width, y + 4.0), &font, &text);
        }
    }

    fn draw_series(&self, canvas: &skia::Canvas, series: &RenderedPath, c: Argb) {
        let mut points = series.points.iter();
        let Some(first) = points.next() else { return };

        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in points {
            path.line_to((p.x as f32, p.y as f32));
        }
        canvas.draw_path(&path, &stroke(c, SERIES_STROKE));
    }

    fn draw_hover(&self, canvas: &skia::Canvas, chart: &RenderedChart, hit: &HitResult) {
        let cross = hit.crosshair(&chart.geometry);
        let mut guide = stroke(self.palette.crosshair, 1.0);
        guide.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));
        let x = cross.x as f32;
        canvas.draw_line((x, cross.top as f32), (x, cross.bottom as f32), &guide);

        for slot in [SeriesSlot::A, SeriesSlot::B] {
            if let Some(p) = hit.marker(slot) {
                let center = (p.x as f32, p.y as f32);
                canvas.draw_circle(center, MARKER_RADIUS, &fill(self.palette.marker_fill));
                canvas.draw_circle(center, MARKER_RADIUS, &stroke(self.palette.series(slot), 2.0));
            }
        }
    }
}
