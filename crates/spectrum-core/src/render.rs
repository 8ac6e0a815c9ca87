// File: crates/spectrum-core/src/render.rs
// Summary: Skia CPU raster chart engine: draws spectra, legend and marker lines, and hit-tests pointers.

use anyhow::Result;
use skia_safe as skia;
use tracing::{debug, trace};

use crate::annotation::MarkerLine;
use crate::config::ChartConfig;
use crate::engine::{ChartEngine, HitElement};
use crate::error::{PlotError, PlotResult};
use crate::geometry::RectF;
use crate::grid::{category_ticks, format_tick, linspace};
use crate::scale::{value_range, CategoryScale, ValueScale};
use crate::series::Spectrum;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, SurfaceSize};

const LEGEND_ROW_HEIGHT: f32 = 24.0;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_SPACING: f32 = 10.0;
const FONT_SIZE: f32 = 11.0;
const MAX_X_TICKS: usize = 10;
const Y_TICKS: usize = 6;

/// Geometry of the last drawn frame; hit-testing works against it.
#[derive(Clone, Debug)]
struct Frame {
    plot: RectF,
    x: CategoryScale,
    dataset_lens: Vec<usize>,
}

/// Chart engine rendering into a Skia raster surface.
pub struct SkiaEngine {
    surface: skia::Surface,
    size: SurfaceSize,
    config: ChartConfig,
    theme: Theme,
    insets: Insets,
    text: TextShaper,
    frame: Option<Frame>,
}

impl SkiaEngine {
    /// Takes effect at the next `update`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Encode the last drawn frame as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the last drawn frame to `path` as PNG, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Last drawn frame as unpremultiplied RGBA8; returns (pixels, width, height, row_bytes).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.size.width, self.size.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read surface pixels");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    fn legend_shown(&self) -> bool {
        self.config.options.show_legend && !self.config.data.datasets.is_empty()
    }

    fn layout(&self) -> Frame {
        let top_extra = if self.legend_shown() { LEGEND_ROW_HEIGHT } else { 0.0 };
        let plot = RectF::plot_area(self.size, &self.insets, top_extra);
        let data = &self.config.data;
        let count = if data.labels.is_empty() {
            data.datasets.iter().map(Spectrum::len).max().unwrap_or(0)
        } else {
            data.labels.len()
        };
        Frame {
            plot,
            x: CategoryScale::new(plot.left, plot.right, count),
            dataset_lens: data.datasets.iter().map(Spectrum::len).collect(),
        }
    }

    fn render(&mut self) {
        let frame = self.layout();
        let (vmin, vmax) = value_range(&self.config.data.datasets);
        let y = ValueScale::new_linear(frame.plot.top, frame.plot.bottom, vmin, vmax);
        let legend = self.legend_shown();

        let canvas = self.surface.canvas();
        canvas.clear(self.theme.background);

        draw_grid(canvas, &frame, &y, &self.theme);
        draw_axes(canvas, &frame, &y, &self.config, &self.theme, &self.text);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(frame.plot.left, frame.plot.top, frame.plot.right, frame.plot.bottom), skia::ClipOp::Intersect, true);
        for s in &self.config.data.datasets {
            draw_spectrum(canvas, &frame.x, &y, s);
        }
        canvas.restore();

        draw_markers(canvas, &frame, self.config.options.annotations.iter());

        if legend {
            draw_legend(canvas, self.size, &self.insets, &self.config.data.datasets, &self.theme, &self.text);
        }

        trace!(datasets = self.config.data.datasets.len(), labels = self.config.data.labels.len(), "frame drawn");
        self.frame = Some(frame);
    }
}

impl ChartEngine for SkiaEngine {
    fn init(size: SurfaceSize, config: ChartConfig) -> PlotResult<Self> {
        if size.width <= 0 || size.height <= 0 {
            return Err(PlotError::InvalidSurface { width: size.width, height: size.height });
        }
        let surface = skia::surfaces::raster_n32_premul((size.width, size.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let mut engine = Self {
            surface,
            size,
            config,
            theme: Theme::default(),
            insets: Insets::default(),
            text: TextShaper::new(),
            frame: None,
        };
        engine.render();
        debug!(width = size.width, height = size.height, "skia engine ready");
        Ok(engine)
    }

    fn config(&self) -> &ChartConfig { &self.config }

    fn config_mut(&mut self) -> &mut ChartConfig { &mut self.config }

    fn update(&mut self) -> PlotResult<()> {
        self.render();
        Ok(())
    }

    fn elements_at(&self, x: f32, y: f32) -> Vec<HitElement> {
        let Some(frame) = &self.frame else { return Vec::new() };
        if !frame.plot.contains(x, y) {
            return Vec::new();
        }
        let Some(index) = frame.x.index_at(x) else { return Vec::new() };
        frame
            .dataset_lens
            .iter()
            .enumerate()
            .filter(|(_, len)| index < **len)
            .map(|(dataset_index, _)| HitElement { dataset_index, index })
            .collect()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, frame: &Frame, y: &ValueScale, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let p = &frame.plot;
    for i in category_ticks(frame.x.count, MAX_X_TICKS) {
        let x = frame.x.to_px(i as f64);
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
    for v in linspace(y.vmin, y.vmax, Y_TICKS) {
        let py = y.to_px(v);
        canvas.draw_line((p.left, py), (p.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, frame: &Frame, y: &ValueScale, config: &ChartConfig, theme: &Theme, text: &TextShaper) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let p = &frame.plot;
    let (x_axis, y_axis) = (&config.options.x_axis, &config.options.y_axis);

    if x_axis.display {
        canvas.draw_line((p.left, p.bottom), (p.right, p.bottom), &axis_paint);
        for i in category_ticks(frame.x.count, MAX_X_TICKS) {
            let label = config.data.labels.get(i).copied().unwrap_or(i as f64);
            let x = frame.x.to_px(i as f64);
            text.draw(canvas, &format_tick(label), x, p.bottom + 12.0, FONT_SIZE, theme.tick_label, Anchor::Center);
        }
        if x_axis.show_title {
            text.draw(canvas, &x_axis.title, (p.left + p.right) * 0.5, p.bottom + 26.0, FONT_SIZE, theme.tick_label, Anchor::Center);
        }
    }
    if y_axis.display {
        canvas.draw_line((p.left, p.top), (p.left, p.bottom), &axis_paint);
        for v in linspace(y.vmin, y.vmax, Y_TICKS) {
            text.draw(canvas, &format_tick(v), p.left - 6.0, y.to_px(v), FONT_SIZE, theme.tick_label, Anchor::Right);
        }
        if y_axis.show_title {
            text.draw(canvas, &y_axis.title, 4.0, p.top, FONT_SIZE, theme.tick_label, Anchor::Left);
        }
    }
}

fn draw_spectrum(canvas: &skia::Canvas, x: &CategoryScale, y: &ValueScale, s: &Spectrum) {
    let style = &s.style;

    // Non-finite values break the line into segments.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (i, &v) in s.values.iter().enumerate().take(x.count) {
        if !v.is_finite() {
            pen_down = false;
            continue;
        }
        let pt = (x.to_px(i as f64), y.to_px(v));
        if pen_down { path.line_to(pt); } else { path.move_to(pt); }
        pen_down = true;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.border_width);
    stroke.set_color(style.border_color.to_skia());
    canvas.draw_path(&path, &stroke);

    if style.point_radius <= 0.0 || style.point_color.is_transparent() {
        return;
    }
    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(style.point_color.to_skia());
    for (i, &v) in s.values.iter().enumerate().take(x.count) {
        if v.is_finite() {
            canvas.draw_circle((x.to_px(i as f64), y.to_px(v)), style.point_radius, &dot);
        }
    }
}

fn draw_markers<'a>(canvas: &skia::Canvas, frame: &Frame, lines: impl Iterator<Item = &'a MarkerLine>) {
    for line in lines.filter(|l| l.is_drawn()) {
        let Some(index) = line.index else { continue };
        // Slots past the current axis (data shrunk since the hit) are not drawn.
        if index >= frame.x.count {
            continue;
        }
        let x = frame.x.to_px(index as f64);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_stroke_width(line.width);
        paint.set_color(line.color.to_skia());
        canvas.draw_line((x, frame.plot.top), (x, frame.plot.bottom), &paint);
    }
}

fn draw_legend(canvas: &skia::Canvas, size: SurfaceSize, insets: &Insets, spectra: &[Spectrum], theme: &Theme, text: &TextShaper) {
    let widths = spectra
        .iter()
        .map(|s| LEGEND_SWATCH + 4.0 + text.measure_width(&s.name, FONT_SIZE))
        .collect::<Vec<_>>();
    let total = widths.iter().sum::<f32>() + LEGEND_SPACING * (widths.len().saturating_sub(1)) as f32;
    let mut x = ((size.width as f32 - total) * 0.5).max(insets.left as f32);
    let cy = insets.top as f32 + LEGEND_ROW_HEIGHT * 0.5;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Fill);

    for (s, w) in spectra.iter().zip(widths) {
        swatch.set_color(s.color().to_skia());
        let half = LEGEND_SWATCH * 0.5;
        canvas.draw_rect(skia::Rect::from_xywh(x, cy - half, LEGEND_SWATCH, LEGEND_SWATCH), &swatch);
        text.draw(canvas, &s.name, x + LEGEND_SWATCH + 4.0, cy, FONT_SIZE, theme.legend_text, Anchor::Left);
        x += w + LEGEND_SPACING;
    }
}
