// File: crates/skychart-render-skia/src/palette.rs
// Summary: Fixed dark palette (ARGB) used by the raster adapter.

use skychart_core::SeriesSlot;

/// Color as (alpha, red, green, blue).
pub type Argb = (u8, u8, u8, u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Argb,
    pub grid: Argb,
    pub axis_label: Argb,
    pub crosshair: Argb,
    pub marker_fill: Argb,
    pub series_a: Argb,
    pub series_b: Argb,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: (255, 0x0d, 0x0f, 0x13),
        grid: (255, 0x1e, 0x24, 0x30),
        axis_label: (255, 0x94, 0xa3, 0xb8),
        crosshair: (51, 255, 255, 255),
        marker_fill: (255, 0x13, 0x16, 0x1b),
        series_a: (255, 0x22, 0xd3, 0xee), // cyan
        series_b: (255, 0xf5, 0x9e, 0x0b), // amber
    };

    pub const fn series(&self, slot: SeriesSlot) -> Argb {
        match slot {
            SeriesSlot::A => self.series_a,
            SeriesSlot::B => self.series_b,
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::DARK }
}
