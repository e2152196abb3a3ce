// File: crates/burndown-render-skia/src/render.rs
// Summary: Burndown chart -> PNG using Skia CPU raster surfaces.

use anyhow::Result;
use burndown_core::{Axis, AxisKind, BurndownChart, ChartSeries, PlotLineKind, SeriesKind};
use skia_safe as skia;

use crate::options::{Palette, RenderOptions};

/// Plot rectangle in pixels plus the data -> pixel mapping.
struct Plot<'a> {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x_axis: &'a Axis,
    y_axis: &'a Axis,
}

impl Plot<'_> {
    fn sx(&self, x: f64) -> f32 {
        let span = self.x_axis.span().max(1e-9);
        self.l + ((x - self.x_axis.min) / span) as f32 * (self.r - self.l)
    }

    fn sy(&self, y: f64) -> f32 {
        let span = self.y_axis.span().max(1e-9);
        self.b - ((y - self.y_axis.min) / span) as f32 * (self.b - self.t)
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Render to PNG bytes.
    pub fn render_to_png_bytes(&self, chart: &BurndownChart) -> Result<Vec<u8>> {
        let opts = &self.opts;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.palette.background);

        let plot = Plot {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
            x_axis: &chart.x_axis,
            y_axis: &chart.y_axis,
        };

        draw_bands(canvas, &plot, chart, &opts.palette, opts.draw_labels);
        draw_grid(canvas, &plot, &opts.palette);
        draw_axes(canvas, &plot, &opts.palette, opts.draw_labels);
        for s in chart.series.iter().filter(|s| s.visible) {
            draw_series(canvas, &plot, s, &opts.palette);
        }
        draw_plot_lines(canvas, &plot, chart, &opts.palette, opts.draw_labels);
        if opts.draw_labels {
            draw_title(canvas, &plot, &chart.title, &opts.palette);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(bytes = data.as_bytes().len(), "rendered burndown chart");
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&self, chart: &BurndownChart, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

const SHORT_DASH: &[f32] = &[6.0, 2.0];
const SHORT_DOT: &[f32] = &[2.0, 2.0];
const SOLID: &[f32] = &[];

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn text(canvas: &skia::Canvas, s: &str, x: f32, y: f32, color: skia::Color, size: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(size);
    canvas.draw_str(s, (x, y), &font, &paint);
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn tick_label(axis: &Axis, v: f64) -> String {
    match axis.kind {
        AxisKind::DateTime => chrono::DateTime::from_timestamp_millis(v as i64)
            .map(|dt| dt.format("%b %d").to_string())
            .unwrap_or_default(),
        AxisKind::Linear => format!("{v:.0}"),
    }
}

fn draw_bands(canvas: &skia::Canvas, p: &Plot, chart: &BurndownChart, pal: &Palette, labels: bool) {
    let mut fill = skia::Paint::default();
    fill.set_color(pal.band);
    fill.set_style(skia::paint::Style::Fill);
    for band in &chart.plot_bands {
        let x0 = p.sx(band.from).clamp(p.l, p.r);
        let x1 = p.sx(band.to).clamp(p.l, p.r);
        if x1 <= x0 { continue; }
        canvas.draw_rect(skia::Rect::from_ltrb(x0, p.t, x1, p.b), &fill);
        if labels {
            text(canvas, &band.label, x0 + 4.0, p.t + 14.0, pal.band_label, 12.0);
        }
    }
}

fn draw_grid(canvas: &skia::Canvas, p: &Plot, pal: &Palette) {
    let paint = stroke(pal.grid, 1.0);
    // horizontals only; dates read better without vertical rules
    for y in linspace(p.t as f64, p.b as f64, 6) {
        canvas.draw_line((p.l, y as f32), (p.r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, p: &Plot, pal: &Palette, labels: bool) {
    let paint = stroke(pal.axis_line, 1.5);
    canvas.draw_line((p.l, p.b), (p.r, p.b), &paint);
    canvas.draw_line((p.l, p.t), (p.l, p.b), &paint);
    if !labels { return; }

    for v in linspace(p.x_axis.min, p.x_axis.max, 6) {
        let x = p.sx(v);
        text(canvas, &tick_label(p.x_axis, v), x - 18.0, p.b + 16.0, pal.axis_label, 11.0);
    }
    for v in linspace(p.y_axis.min, p.y_axis.max, 6) {
        let y = p.sy(v);
        text(canvas, &tick_label(p.y_axis, v), p.l - 40.0, y + 4.0, pal.axis_label, 11.0);
    }
    text(canvas, &p.x_axis.label, p.r - 40.0, p.b + 40.0, pal.axis_label, 14.0);
    text(canvas, &p.y_axis.label, p.l - 56.0, p.t - 8.0, pal.axis_label, 12.0);
}

fn draw_title(canvas: &skia::Canvas, p: &Plot, title: &str, pal: &Palette) {
    text(canvas, title, p.l, p.t - 24.0, pal.axis_label, 18.0);
}

fn draw_plot_lines(canvas: &skia::Canvas, p: &Plot, chart: &BurndownChart, pal: &Palette, labels: bool) {
    for line in &chart.plot_lines {
        if !p.x_axis.contains(line.value) { continue; }
        let (color, label_color) = match line.kind {
            PlotLineKind::Target => (pal.target_line, pal.target_label),
            PlotLineKind::Now => (pal.now_line, pal.now_label),
        };
        let x = p.sx(line.value);
        canvas.draw_line((x, p.t), (x, p.b), &stroke(color, 1.0));
        if labels {
            text(canvas, &line.label, x + 3.0, p.t + 28.0, label_color, 12.0);
        }
    }
}

fn draw_series(canvas: &skia::Canvas, p: &Plot, series: &ChartSeries, pal: &Palette) {
    let data = series.polyline();
    if data.len() < 2 { return; }

    let (color, width, dash) = match series.kind {
        SeriesKind::Ideal => (pal.ideal, 1.5, SHORT_DASH),
        SeriesKind::Trend => (pal.trend, 1.5, SHORT_DOT),
        SeriesKind::Prediction => (pal.prediction, 1.5, SHORT_DASH),
        SeriesKind::Reality => (pal.reality, 2.0, SOLID),
    };

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((p.sx(x0), p.sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((p.sx(x), p.sy(y)));
    }

    let mut paint = stroke(color, width);
    if !dash.is_empty() {
        paint.set_path_effect(skia::PathEffect::dash(dash, 0.0));
    }
    canvas.draw_path(&path, &paint);
}
