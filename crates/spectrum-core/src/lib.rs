// File: crates/spectrum-core/src/lib.rs
// Summary: Core library entry point; exports the spectrum plot widget, its chart engine seam
// and the Skia-backed engine.

pub mod annotation;
pub mod axis;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod options;
pub mod reading;
pub mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod widget;

pub use annotation::{Annotations, MarkerEvent, MarkerLine, UnknownMarkerEvent};
pub use color::CssColor;
pub use config::ChartConfig;
pub use engine::{ChartEngine, HitElement};
pub use error::{PlotError, PlotResult};
pub use host::{Container, Host, MemoryHost, MountId};
pub use options::PlotOptions;
pub use reading::MarkerReading;
pub use render::SkiaEngine;
pub use series::Spectrum;
pub use theme::Theme;
pub use types::SurfaceSize;
pub use widget::{MarkerCallback, PointerEvent, SpectrumPlot};
