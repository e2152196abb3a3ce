// File: crates/burndown-render-skia/src/options.rs
// Summary: Surface size, margins and palette for rendering.

use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for the title on top and date labels below
        Self::new(72, 24, 48, 56)
    }
}

/// Fixed Tango palette used by the release pages.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub ideal: skia::Color,
    pub trend: skia::Color,
    pub prediction: skia::Color,
    pub reality: skia::Color,
    pub target_line: skia::Color,
    pub target_label: skia::Color,
    pub now_line: skia::Color,
    pub now_label: skia::Color,
    pub band: skia::Color,
    pub band_label: skia::Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: skia::Color::from_rgb(0xff, 0xff, 0xff),
            grid: skia::Color::from_rgb(0xd3, 0xd7, 0xcf),
            axis_line: skia::Color::from_rgb(0x55, 0x57, 0x53),
            axis_label: skia::Color::from_rgb(0x2e, 0x34, 0x36),
            ideal: skia::Color::from_rgb(0x73, 0xd2, 0x16),
            trend: skia::Color::from_rgb(0xad, 0x7f, 0xa8),
            prediction: skia::Color::from_rgb(0x75, 0x50, 0x7b),
            reality: skia::Color::from_rgb(0x34, 0x65, 0xa4),
            target_line: skia::Color::from_rgb(0xef, 0x29, 0x29),
            target_label: skia::Color::from_rgb(0xa4, 0x00, 0x00),
            now_line: skia::Color::from_rgb(0x75, 0x50, 0x7b),
            now_label: skia::Color::from_rgb(0x5c, 0x35, 0x66),
            band: skia::Color::from_rgb(0xee, 0xee, 0xec),
            band_label: skia::Color::from_rgb(0x55, 0x57, 0x53),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub palette: Palette,
    /// Text is skipped when false (keeps snapshots font-independent).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            palette: Palette::default(),
            draw_labels: true,
        }
    }
}
