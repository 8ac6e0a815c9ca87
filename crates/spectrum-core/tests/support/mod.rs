// File: crates/spectrum-core/tests/support/mod.rs
// Purpose: Recording chart engine for widget tests; pointer x selects the label index directly.

#![allow(dead_code)]

use std::cell::Cell;

use spectrum_core::{ChartConfig, ChartEngine, HitElement, MemoryHost, PlotOptions, PlotResult, SpectrumPlot, SurfaceSize};

thread_local! {
    static UPDATES: Cell<usize> = const { Cell::new(0) };
}

/// Number of engine redraws on this test thread.
pub fn updates() -> usize {
    UPDATES.with(Cell::get)
}

pub struct RecordingEngine {
    config: ChartConfig,
}

impl ChartEngine for RecordingEngine {
    fn init(_size: SurfaceSize, config: ChartConfig) -> PlotResult<Self> {
        UPDATES.with(|u| u.set(0));
        Ok(Self { config })
    }

    fn config(&self) -> &ChartConfig { &self.config }

    fn config_mut(&mut self) -> &mut ChartConfig { &mut self.config }

    fn update(&mut self) -> PlotResult<()> {
        UPDATES.with(|u| u.set(u.get() + 1));
        Ok(())
    }

    /// `x` is the label index; a negative `y` is outside the plot.
    fn elements_at(&self, x: f32, y: f32) -> Vec<HitElement> {
        if y < 0.0 || x < 0.0 {
            return Vec::new();
        }
        let index = x.round() as usize;
        self.config
            .data
            .datasets
            .iter()
            .enumerate()
            .filter(|(_, s)| index < s.len())
            .map(|(dataset_index, _)| HitElement { dataset_index, index })
            .collect()
    }
}

pub fn plot(options: PlotOptions) -> SpectrumPlot<RecordingEngine> {
    let mut host = MemoryHost::new();
    host.register("plot");
    SpectrumPlot::create(&mut host, "plot", 400, 200, options).expect("create plot")
}
