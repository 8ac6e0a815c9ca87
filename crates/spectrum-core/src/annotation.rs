// File: crates/spectrum-core/src/annotation.rs
// Summary: Vertical marker lines (click and hover) kept in the chart's annotation layer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::CssColor;
use crate::types::MARKER_LINE_WIDTH;

pub const DEFAULT_CLICK_COLOR: &str = "rgba(255, 0, 0, 0.6)";
pub const DEFAULT_HOVER_COLOR: &str = "rgba(0, 0, 0, 0.3)";

/// The two pointer events the widget reacts to. Each owns one marker line
/// and one callback slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerEvent {
    Click,
    Hover,
}

impl MarkerEvent {
    pub const fn name(self) -> &'static str {
        match self {
            MarkerEvent::Click => "click",
            MarkerEvent::Hover => "hover",
        }
    }
}

impl fmt::Display for MarkerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Event name other than "click" or "hover".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown marker event '{0}'")]
pub struct UnknownMarkerEvent(pub String);

impl FromStr for MarkerEvent {
    type Err = UnknownMarkerEvent;

    /// Exact, case-sensitive match on "click" / "hover".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(MarkerEvent::Click),
            "hover" => Ok(MarkerEvent::Hover),
            _ => Err(UnknownMarkerEvent(s.to_string())),
        }
    }
}

/// Vertical line at a label slot, painted over the datasets.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLine {
    pub event: MarkerEvent,
    /// Label value reported for the line; `None` until a matching pointer event.
    pub value: Option<f64>,
    /// Label index the line is drawn at. Set together with `value`.
    pub index: Option<usize>,
    pub color: CssColor,
    pub visible: bool,
    pub width: f32,
}

impl MarkerLine {
    pub fn hidden(event: MarkerEvent, color: CssColor) -> Self {
        Self {
            event,
            value: None,
            index: None,
            color,
            visible: false,
            width: MARKER_LINE_WIDTH,
        }
    }

    /// Place the line at label slot `index` whose label value is `value`.
    /// Returns true when the position changed.
    pub fn move_to(&mut self, index: usize, value: f64) -> bool {
        let moved = self.index != Some(index) || self.value != Some(value);
        self.index = Some(index);
        self.value = Some(value);
        moved
    }

    /// Color the line is drawn with right now; transparent while hidden.
    pub fn effective_color(&self) -> CssColor {
        if self.visible { self.color.clone() } else { CssColor::transparent() }
    }

    /// True when the engine should paint this line.
    pub fn is_drawn(&self) -> bool {
        self.visible && self.index.is_some() && !self.color.is_transparent()
    }
}

/// Annotation layer: one marker line per event.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotations {
    pub click: MarkerLine,
    pub hover: MarkerLine,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            click: MarkerLine::hidden(MarkerEvent::Click, CssColor::new(DEFAULT_CLICK_COLOR)),
            hover: MarkerLine::hidden(MarkerEvent::Hover, CssColor::new(DEFAULT_HOVER_COLOR)),
        }
    }
}

impl Annotations {
    pub fn line(&self, event: MarkerEvent) -> &MarkerLine {
        match event {
            MarkerEvent::Click => &self.click,
            MarkerEvent::Hover => &self.hover,
        }
    }

    pub fn line_mut(&mut self, event: MarkerEvent) -> &mut MarkerLine {
        match event {
            MarkerEvent::Click => &mut self.click,
            MarkerEvent::Hover => &mut self.hover,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerLine> {
        [&self.click, &self.hover].into_iter()
    }
}
