// File: crates/spectrum-core/src/engine.rs
// Summary: Chart engine trait: the delegate that owns chart state, draws it and hit-tests pointers.

use crate::config::ChartConfig;
use crate::error::PlotResult;
use crate::types::SurfaceSize;

/// Data element under the pointer: dataset `dataset_index` at label index `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitElement {
    pub dataset_index: usize,
    pub index: usize,
}

/// Rendering delegate used by [`crate::SpectrumPlot`].
///
/// Engines own the [`ChartConfig`]; mutations through `config_mut` become
/// visible on the surface only after `update`.
pub trait ChartEngine {
    /// Initialize on a fresh surface of `size` pixels.
    fn init(size: SurfaceSize, config: ChartConfig) -> PlotResult<Self>
    where
        Self: Sized;

    fn config(&self) -> &ChartConfig;

    fn config_mut(&mut self) -> &mut ChartConfig;

    /// Redraw the surface from the current config.
    fn update(&mut self) -> PlotResult<()>;

    /// Elements under the surface pixel (`x`, `y`), one per dataset sharing
    /// the same label index. Empty when nothing is hit.
    fn elements_at(&self, x: f32, y: f32) -> Vec<HitElement>;
}
