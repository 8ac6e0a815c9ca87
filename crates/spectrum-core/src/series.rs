// File: crates/spectrum-core/src/series.rs
// Summary: Spectrum dataset model: named Y values plotted against the shared label axis.

use crate::color::CssColor;
use crate::types::{LINE_WIDTH, POINT_RADIUS};

/// Per-dataset drawing style handed to the chart engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub border_color: CssColor,
    pub border_width: f32,
    pub point_color: CssColor,
    pub point_border_color: CssColor,
    pub point_border_width: f32,
    pub point_radius: f32,
    pub fill: bool,
}

/// One named spectrum.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub name: String,
    pub values: Vec<f64>,
    pub show_points: bool,
    pub style: LineStyle,
}

impl Spectrum {
    /// Build a spectrum with the widget's default style: thin unfilled line, and
    /// point dots in the line color when `show_points` (transparent otherwise).
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: CssColor, show_points: bool) -> Self {
        let point_color = if show_points { color.clone() } else { CssColor::transparent() };
        Self {
            name: name.into(),
            values,
            show_points,
            style: LineStyle {
                border_color: color,
                border_width: LINE_WIDTH,
                point_color,
                point_border_color: CssColor::transparent(),
                point_border_width: 0.0,
                point_radius: POINT_RADIUS,
                fill: false,
            },
        }
    }

    pub fn color(&self) -> &CssColor { &self.style.border_color }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Value at label index `index`, if this spectrum is long enough.
    pub fn value_at(&self, index: usize) -> Option<f64> { self.values.get(index).copied() }
}

/// Auto labels `0..n-1` where `n` is the length of the longest spectrum.
pub fn auto_labels(spectra: &[Spectrum]) -> Vec<f64> {
    let longest = spectra.iter().map(Spectrum::len).max().unwrap_or(0);
    (0..longest).map(|i| i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_points_are_transparent() {
        let s = Spectrum::new("a", vec![1.0], CssColor::new("#ff0000"), false);
        assert!(s.style.point_color.is_transparent());
        assert_eq!(s.color().as_str(), "#ff0000");
        assert!(!s.style.fill);
    }

    #[test]
    fn auto_labels_follow_longest() {
        let red = CssColor::new("red");
        let spectra = vec![
            Spectrum::new("a", vec![1.0, 2.0], red.clone(), true),
            Spectrum::new("b", vec![1.0, 2.0, 3.0, 4.0], red, true),
        ];
        assert_eq!(auto_labels(&spectra), vec![0.0, 1.0, 2.0, 3.0]);
        assert!(auto_labels(&[]).is_empty());
    }
}
