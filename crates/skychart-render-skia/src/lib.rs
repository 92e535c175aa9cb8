// File: crates/skychart-render-skia/src/lib.rs
// Summary: Skia raster adapter for rendered charts.
// Notes:
// - The Skia-backed renderer lives behind the `raster` feature; without it only
//   the palette is compiled.

pub mod palette;

#[cfg(feature = "raster")]
mod raster;

pub use palette::Palette;
#[cfg(feature = "raster")]
pub use raster::SkiaRenderer;
