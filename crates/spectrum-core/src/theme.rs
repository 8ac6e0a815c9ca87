// File: crates/spectrum-core/src/theme.rs
// Summary: Light/Dark theming for the chart frame (background, grid, axes, legend text).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 230),
            axis_line: skia::Color::from_argb(255, 120, 120, 120),
            tick_label: skia::Color::from_argb(255, 102, 102, 102),
            legend_text: skia::Color::from_argb(255, 102, 102, 102),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    /// Built-in theme by `name` (case-insensitive), falling back to light.
    pub fn find(name: &str) -> Self {
        [Self::light(), Self::dark()]
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(Self::light)
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}
