// File: crates/burndown-render-skia/src/lib.rs
// Summary: Skia renderer crate; draws a `BurndownChart` headlessly to PNG.

pub mod options;
pub mod render;

pub use options::{Insets, Palette, RenderOptions};
pub use render::SkiaRenderer;
