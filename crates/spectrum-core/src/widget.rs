// File: crates/spectrum-core/src/widget.rs
// Summary: SpectrumPlot widget: dataset management, marker lines and pointer event translation
// on top of a delegate chart engine.

use anyhow::Result;
use tracing::{debug, trace, warn};

use crate::annotation::{MarkerEvent, MarkerLine};
use crate::color::CssColor;
use crate::config::ChartConfig;
use crate::engine::{ChartEngine, HitElement};
use crate::error::{PlotError, PlotResult};
use crate::host::{Container, Host, MountId};
use crate::options::PlotOptions;
use crate::reading::{build_readings, MarkerReading};
use crate::render::SkiaEngine;
use crate::series::{auto_labels, Spectrum};
use crate::theme::Theme;
use crate::types::SurfaceSize;

/// Click/hover listener; receives one reading per series at the pointed label.
pub type MarkerCallback = Box<dyn FnMut(&[MarkerReading])>;

/// Pointer input in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Click { x: f32, y: f32 },
    Enter,
    Leave,
}

/// Line chart of named spectra on a fixed-size surface, with optional
/// vertical click/hover marker lines.
///
/// Data mutations (`set_labels`, `add_spectrum`, `update_spectrum`) are only
/// committed to the surface by [`SpectrumPlot::draw`]. Marker and legend
/// toggles redraw on their own.
pub struct SpectrumPlot<E: ChartEngine = SkiaEngine> {
    engine: E,
    mount: MountId,
    size: SurfaceSize,
    options: PlotOptions,
    markers_enabled: bool,
    marker_data: Vec<MarkerReading>,
    on_click: Option<MarkerCallback>,
    on_hover: Option<MarkerCallback>,
}

impl<E: ChartEngine> SpectrumPlot<E> {
    /// Resolve `container` through `host`, attach a `width` x `height` surface
    /// to it and start the chart engine.
    pub fn create<H: Host + ?Sized>(
        host: &mut H,
        container: impl Into<Container>,
        width: i32,
        height: i32,
        options: PlotOptions,
    ) -> PlotResult<Self> {
        let container = container.into();
        let mount = host.resolve(&container).ok_or_else(|| {
            PlotError::ContainerNotFound(match &container {
                Container::Id(id) => id.clone(),
                Container::Mount(m) => format!("mount #{}", m.0),
            })
        })?;
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidSurface { width, height });
        }
        let size = SurfaceSize::new(width, height);
        let engine = E::init(size, ChartConfig::line(options.show_legend))?;
        host.attach(mount, size)?;
        debug!(mount = mount.0, width, height, "spectrum plot created");

        Ok(Self {
            engine,
            mount,
            size,
            options,
            markers_enabled: false,
            marker_data: Vec::new(),
            on_click: None,
            on_hover: None,
        })
    }

    /// Assign the X labels, or derive `0..n-1` from the longest spectrum when `None`.
    pub fn set_labels(&mut self, labels: Option<Vec<f64>>) {
        let data = &mut self.engine.config_mut().data;
        data.labels = match labels {
            Some(l) => l,
            None => auto_labels(&data.datasets),
        };
    }

    /// Append a spectrum drawn with point dots; returns its index for later updates.
    pub fn add_spectrum(&mut self, name: impl Into<String>, values: Vec<f64>, color: impl Into<CssColor>) -> usize {
        self.add_spectrum_with(name, values, color, true)
    }

    /// Append a spectrum; point dots are transparent unless `show_points`.
    pub fn add_spectrum_with(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
        color: impl Into<CssColor>,
        show_points: bool,
    ) -> usize {
        let datasets = &mut self.engine.config_mut().data.datasets;
        let index = datasets.len();
        datasets.push(Spectrum::new(name, values, color.into(), show_points));
        index
    }

    /// Replace the values of spectrum `index`. Unknown indices are logged and ignored.
    pub fn update_spectrum(&mut self, index: usize, values: Vec<f64>) {
        let datasets = &mut self.engine.config_mut().data.datasets;
        let count = datasets.len();
        match datasets.get_mut(index) {
            Some(s) => s.values = values,
            None => warn!(index, count, "updating dataset: wrong dataset index"),
        }
    }

    /// Commit pending label/data changes to the surface.
    pub fn draw(&mut self) -> PlotResult<()> {
        self.engine.update()
    }

    /// Register the callback for `"click"` or `"hover"`, replacing any previous
    /// one. Other names are ignored.
    pub fn on<F>(&mut self, event_name: &str, callback: F)
    where
        F: FnMut(&[MarkerReading]) + 'static,
    {
        if let Ok(event) = event_name.parse::<MarkerEvent>() {
            self.on_event(event, callback);
        }
    }

    pub fn on_event<F>(&mut self, event: MarkerEvent, callback: F)
    where
        F: FnMut(&[MarkerReading]) + 'static,
    {
        let slot = match event {
            MarkerEvent::Click => &mut self.on_click,
            MarkerEvent::Hover => &mut self.on_hover,
        };
        *slot = Some(Box::new(callback));
    }

    /// Reading captured by the most recent click.
    pub fn marker_data(&self) -> &[MarkerReading] {
        &self.marker_data
    }

    pub fn enable_markers(&mut self) -> PlotResult<()> {
        self.set_markers_visible(true)
    }

    pub fn disable_markers(&mut self) -> PlotResult<()> {
        self.set_markers_visible(false)
    }

    fn set_markers_visible(&mut self, visible: bool) -> PlotResult<()> {
        self.markers_enabled = visible;
        let annotations = &mut self.engine.config_mut().options.annotations;
        annotations.click.visible = visible;
        annotations.hover.visible = visible;
        self.engine.update()
    }

    /// Color of the `"click"` or `"hover"` line while markers are enabled.
    /// Other names are ignored.
    pub fn set_marker_color(&mut self, event_name: &str, color: impl Into<CssColor>) -> PlotResult<()> {
        let Ok(event) = event_name.parse::<MarkerEvent>() else { return Ok(()) };
        self.engine.config_mut().options.annotations.line_mut(event).color = color.into();
        self.engine.update()
    }

    pub fn show_legend(&mut self, show: bool) -> PlotResult<()> {
        self.engine.config_mut().options.show_legend = show;
        self.engine.update()
    }

    /// Feed one pointer event from the host.
    pub fn dispatch(&mut self, event: PointerEvent) -> PlotResult<()> {
        trace!(?event, "pointer event");
        match event {
            PointerEvent::Move { x, y } => {
                let hits = self.engine.elements_at(x, y);
                self.handle_hit(MarkerEvent::Hover, &hits)
            }
            PointerEvent::Click { x, y } => {
                let hits = self.engine.elements_at(x, y);
                self.handle_hit(MarkerEvent::Click, &hits)
            }
            PointerEvent::Leave => {
                let hover = &mut self.engine.config_mut().options.annotations.hover;
                if !hover.visible {
                    return Ok(());
                }
                hover.visible = false;
                self.engine.update()
            }
            PointerEvent::Enter => {
                if !self.markers_enabled {
                    return Ok(());
                }
                self.engine.config_mut().options.annotations.hover.visible = true;
                self.engine.update()
            }
        }
    }

    fn handle_hit(&mut self, event: MarkerEvent, hits: &[HitElement]) -> PlotResult<()> {
        let readings = {
            let data = &self.engine.config().data;
            build_readings(hits, &data.datasets, &data.labels, self.options.decimals)
        };

        let mut moved = false;
        if let Some(first) = hits.first() {
            let labels = &self.engine.config().data.labels;
            let x = labels.get(first.index).copied().unwrap_or(first.index as f64);
            moved = self.engine.config_mut().options.annotations.line_mut(event).move_to(first.index, x);
        }

        if event == MarkerEvent::Click {
            self.marker_data = readings.clone();
        }
        let callback = match event {
            MarkerEvent::Click => self.on_click.as_mut(),
            MarkerEvent::Hover => self.on_hover.as_mut(),
        };
        if let Some(cb) = callback {
            cb(&readings);
        }

        if moved && self.markers_enabled {
            self.engine.update()?;
        }
        Ok(())
    }

    // ---- accessors ----------------------------------------------------------

    pub fn series_count(&self) -> usize {
        self.engine.config().data.datasets.len()
    }

    pub fn spectrum(&self, index: usize) -> Option<&Spectrum> {
        self.engine.config().data.datasets.get(index)
    }

    pub fn labels(&self) -> &[f64] {
        &self.engine.config().data.labels
    }

    pub fn marker_line(&self, event: MarkerEvent) -> &MarkerLine {
        self.engine.config().options.annotations.line(event)
    }

    pub fn markers_enabled(&self) -> bool {
        self.markers_enabled
    }

    pub fn legend_visible(&self) -> bool {
        self.engine.config().options.show_legend
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    /// Delegate engine, read-only; its config reflects every committed and pending change.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl SpectrumPlot<SkiaEngine> {
    /// Switch color theme and redraw.
    pub fn set_theme(&mut self, theme: Theme) -> PlotResult<()> {
        self.engine.set_theme(theme);
        self.engine.update()
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        self.engine.png_bytes()
    }

    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.engine.save_png(path)
    }

    /// Surface pixels as RGBA8: (pixels, width, height, row_bytes).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.engine.rgba8()
    }
}
