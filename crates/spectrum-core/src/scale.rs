// File: crates/spectrum-core/src/scale.rs
// Summary: Category (X, label index) and value (Y) scale transforms plus data-driven Y range.

use crate::series::Spectrum;

/// Horizontal scale placing label `i` of `count` evenly between `left_px` and `right_px`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    fn step(&self) -> f32 {
        if self.count < 2 { 0.0 } else { (self.right_px - self.left_px) / (self.count - 1) as f32 }
    }

    #[inline]
    pub fn to_px(&self, index: f64) -> f32 {
        if self.count < 2 {
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + index as f32 * self.step()
    }

    /// Nearest label index to `px`, clamped to the axis. `None` on an empty axis.
    pub fn index_at(&self, px: f32) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        if self.count == 1 {
            return Some(0);
        }
        let raw = ((px - self.left_px) / self.step()).round();
        Some(raw.clamp(0.0, (self.count - 1) as f32) as usize)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Y extent over all finite spectrum values, with a 2% margin. Falls back to 0..1.
pub fn value_range(spectra: &[Spectrum]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for y in spectra.iter().flat_map(|s| s.values.iter().copied()).filter(|y| y.is_finite()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return (0.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
    let m = (y_max - y_min) * 0.02;
    (y_min - m, y_max + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CssColor;

    #[test]
    fn nearest_index() {
        let s = CategoryScale::new(0.0, 100.0, 5); // 25 px per label
        assert_eq!(s.index_at(0.0), Some(0));
        assert_eq!(s.index_at(12.0), Some(0));
        assert_eq!(s.index_at(13.0), Some(1));
        assert_eq!(s.index_at(99.0), Some(4));
        assert_eq!(s.index_at(500.0), Some(4));
        assert_eq!(s.index_at(-40.0), Some(0));
        assert_eq!(s.to_px(2.0), 50.0);
        assert_eq!(CategoryScale::new(0.0, 10.0, 0).index_at(3.0), None);
        assert_eq!(CategoryScale::new(0.0, 10.0, 1).index_at(3.0), Some(0));
    }

    #[test]
    fn value_scale_maps_range_to_pixels() {
        let s = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(5.0), 50.0);
        // flat data still gets a unit span
        assert_eq!(ValueScale::new_linear(0.0, 100.0, 3.0, 3.0).to_px(3.0), 100.0);
    }

    #[test]
    fn range_ignores_non_finite() {
        let spectra = vec![Spectrum::new("a", vec![f64::NAN, 0.0, 10.0], CssColor::new("red"), true)];
        let (lo, hi) = value_range(&spectra);
        assert!(lo < 0.0 && lo > -1.0);
        assert!(hi > 10.0 && hi < 11.0);
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }
}
