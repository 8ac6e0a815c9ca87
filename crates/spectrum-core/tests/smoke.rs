// File: crates/spectrum-core/tests/smoke.rs
// Purpose: End-to-end render through the Skia engine: PNG/RGBA output and pixel hit-testing.

use spectrum_core::{MarkerEvent, MemoryHost, PlotOptions, PointerEvent, SpectrumPlot, Theme};

fn skia_plot(options: PlotOptions) -> SpectrumPlot {
    let mut host = MemoryHost::new();
    host.register("plot");
    let mut plot: SpectrumPlot = SpectrumPlot::create(&mut host, "plot", 400, 200, options).expect("create plot");
    plot.add_spectrum("A", vec![0.0, 2.0, 1.0, 3.5, 2.5], "rgba(255, 0, 0, 1)");
    plot.add_spectrum_with("B", vec![1.0, 1.5, 2.5, 0.5], "#0000ff", false);
    plot.set_labels(None);
    plot.draw().expect("draw");
    plot
}

#[test]
fn render_smoke_png() {
    let mut plot = skia_plot(PlotOptions::default());

    let bytes = plot.to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    plot.save_png(&out).expect("save png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_rgba8_buffer() {
    let mut plot = skia_plot(PlotOptions::default().with_legend(false));
    plot.set_theme(Theme::dark()).expect("theme");

    let (px, w, h, stride) = plot.to_rgba8().expect("rgba render");
    assert_eq!((w, h), (400, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    // Opaque background in the top-left pixel
    assert_eq!(px[3], 255);
}

#[test]
fn click_pixel_maps_to_nearest_label() {
    // Default insets (56, 16, 12, 32) plus a 24 px legend row: plot spans
    // x 56..384, y 36..168; five labels sit 82 px apart.
    let mut plot = skia_plot(PlotOptions::default());
    plot.enable_markers().expect("markers");

    plot.dispatch(PointerEvent::Click { x: 56.0 + 82.0 * 2.0 + 30.0, y: 100.0 }).expect("click");
    let data = plot.marker_data();
    assert_eq!(data.len(), 2);
    assert_eq!((data[0].label.as_str(), data[0].x, data[0].y), ("A", 2.0, 1.0));
    assert_eq!((data[1].label.as_str(), data[1].x, data[1].y), ("B", 2.0, 2.5));
    assert_eq!(plot.marker_line(MarkerEvent::Click).value, Some(2.0));

    // Index 4 only exists in "A"
    plot.dispatch(PointerEvent::Click { x: 380.0, y: 100.0 }).expect("click");
    assert_eq!(plot.marker_data().len(), 1);

    // Outside the plot area nothing is hit
    plot.dispatch(PointerEvent::Click { x: 10.0, y: 100.0 }).expect("click");
    assert!(plot.marker_data().is_empty());
}

// Plot rect with the legend row: x 56..384, y 36..168; five slots 82 px apart.
const PLOT_TOP: usize = 36;
const PLOT_BOTTOM: usize = 168;
const SLOT_2_X: usize = 56 + 82 * 2;

/// Blue/green spectra without dots, click line in magenta.
fn marker_plot(labels: Option<Vec<f64>>) -> SpectrumPlot {
    let mut host = MemoryHost::new();
    host.register("plot");
    let mut plot: SpectrumPlot =
        SpectrumPlot::create(&mut host, "plot", 400, 200, PlotOptions::default()).expect("create plot");
    plot.add_spectrum_with("A", vec![0.0, 1.0, 0.5, 0.2, 0.8], "#0000ff", false);
    plot.add_spectrum_with("B", vec![0.3, 0.6, 0.9, 0.4, 0.1], "#008000", false);
    if labels.is_some() {
        plot.set_labels(labels);
    }
    plot.draw().expect("draw");
    plot.set_marker_color("click", "#ff00ff").expect("marker color");
    plot
}

/// Rows inside the plot with a magenta-ish pixel within 2 px of column `x`.
fn magenta_rows(px: &[u8], stride: usize, x: usize) -> usize {
    (PLOT_TOP + 2..PLOT_BOTTOM - 2)
        .filter(|&y| {
            (x - 2..=x + 2).any(|cx| {
                let i = y * stride + cx * 4;
                let (r, g, b) = (px[i], px[i + 1], px[i + 2]);
                r > 200 && b > 200 && g < 160
            })
        })
        .count()
}

fn assert_click_line_painted(mut plot: SpectrumPlot) {
    plot.enable_markers().expect("markers");
    plot.dispatch(PointerEvent::Click { x: SLOT_2_X as f32 + 10.0, y: 100.0 }).expect("click");
    assert_eq!(plot.marker_line(MarkerEvent::Click).index, Some(2));

    let (px, _, _, stride) = plot.to_rgba8().expect("rgba");
    assert!(magenta_rows(&px, stride, SLOT_2_X) > 100, "click line spans the plot height");
    assert_eq!(magenta_rows(&px, stride, SLOT_2_X - 82), 0, "no line at other slots");
    assert_eq!(magenta_rows(&px, stride, SLOT_2_X - 164), 0, "no line at other slots");

    plot.disable_markers().expect("markers off");
    let (px, _, _, stride) = plot.to_rgba8().expect("rgba");
    assert_eq!(magenta_rows(&px, stride, SLOT_2_X), 0, "hidden line is not painted");
}

#[test]
fn click_line_painted_with_labels() {
    assert_click_line_painted(marker_plot(Some(vec![400.0, 425.0, 450.0, 475.0, 500.0])));
}

#[test]
fn click_line_painted_without_labels() {
    assert_click_line_painted(marker_plot(None));
}

#[test]
fn click_line_painted_at_hit_slot_with_duplicate_labels() {
    assert_click_line_painted(marker_plot(Some(vec![1.0; 5])));
}
