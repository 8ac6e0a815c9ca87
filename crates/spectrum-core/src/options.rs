// File: crates/spectrum-core/src/options.rs
// Summary: Widget construction options; serde-loadable so hosts can keep them in config files.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Options recognized at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotOptions {
    /// Truncate marker reading Y values to this many decimals (floor based).
    pub decimals: Option<u32>,
    /// Legend visibility at init.
    pub show_legend: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { decimals: None, show_legend: true }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Parse options from JSON, e.g. `{"decimals": 2, "showLegend": false}`.
    /// Missing keys keep their defaults.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidOptions(format!("failed to parse options: {e}")))
    }
}
