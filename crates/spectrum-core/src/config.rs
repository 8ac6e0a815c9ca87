// File: crates/spectrum-core/src/config.rs
// Summary: Chart configuration handed to a chart engine: kind, data, axes, animation, legend, annotations.

use crate::annotation::Annotations;
use crate::axis::Axis;
use crate::series::Spectrum;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
}

/// How pointer positions map to data elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Every dataset's element at the nearest label index, independent of pointer Y.
    Index,
}

/// Animation durations in milliseconds. The widget keeps all of them at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    pub duration_ms: u32,
    pub hover_duration_ms: u32,
    pub resize_duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<f64>,
    pub datasets: Vec<Spectrum>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Bezier tension of line segments; 0 draws straight segments.
    pub line_tension: f32,
    pub animation: Animation,
    pub show_legend: bool,
    pub interaction: InteractionMode,
    pub annotations: Annotations,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            line_tension: 0.0,
            animation: Animation::default(),
            show_legend: true,
            interaction: InteractionMode::Index,
            annotations: Annotations::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Empty line chart with the widget defaults; `show_legend` comes from the caller.
    pub fn line(show_legend: bool) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData::default(),
            options: ChartOptions { show_legend, ..ChartOptions::default() },
        }
    }
}
