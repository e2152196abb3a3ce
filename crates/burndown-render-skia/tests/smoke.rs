// File: crates/burndown-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG.

use burndown_core::{burndown, Burndown, BurndownData, BurndownOptions, RawDate, RawReleaseDates, ReleaseScheduleMap};
use burndown_render_skia::{RenderOptions, SkiaRenderer};

fn sample_chart() -> burndown_core::BurndownChart {
    let mut releases = ReleaseScheduleMap::new();
    releases.insert(
        "15.2",
        RawReleaseDates {
            start: RawDate::from("2015-01-05"),
            rcs: RawDate::from("2015-02-16"),
            target: RawDate::from("2015-03-02"),
        },
    );
    let data = BurndownData {
        to_burn: 40,
        closed: vec![
            (RawDate::from("2015-01-05"), 40),
            (RawDate::from("2015-01-12"), 36),
            (RawDate::from("2015-01-19"), 37),
            (RawDate::from("2015-01-26"), 28),
            (RawDate::from("2015-02-02"), 22),
        ],
    };
    let now = 1_423_008_000_000.0; // 2015-02-04
    let opts = BurndownOptions { show_trend: true, ..BurndownOptions::default() };
    match burndown("15.2", &releases, Some(&data), now, &opts).expect("burndown") {
        Burndown::Chart(c) => c,
        Burndown::Placeholder(p) => panic!("unexpected placeholder: {p}"),
    }
}

#[test]
fn render_smoke_png() {
    let chart = sample_chart();
    let renderer = SkiaRenderer::new(RenderOptions::default());

    let out = std::path::PathBuf::from("target/test_out/burndown_smoke.png");
    renderer.render_to_png(&chart, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&chart).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn decoded_size_matches_options() {
    let chart = sample_chart();
    let opts = RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() };
    let bytes = SkiaRenderer::new(opts).render_to_png_bytes(&chart).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    // Top-left corner is background.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn default_renderer_uses_default_surface() {
    let renderer = SkiaRenderer::default();
    assert_eq!((renderer.options().width, renderer.options().height), (1024, 640));
    assert!(renderer.options().draw_labels);
}
