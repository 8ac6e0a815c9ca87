// File: crates/spectrum-core/src/reading.rs
// Summary: Marker readings (series label, x, y) captured at a hit label index.

use serde::Serialize;

use crate::engine::HitElement;
use crate::series::Spectrum;

/// One series' value at the pointed X index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerReading {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Truncate `value` to `decimals` places using floor.
/// Negative values move toward negative infinity: -1.25 at 1 decimal is -1.3.
///
/// Past the precision of `f64` the value is returned unchanged.
pub fn truncate(value: f64, decimals: u32) -> f64 {
    if decimals > MAX_DECIMALS {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.floor() / factor
}

/// Largest decimal count that still changes an `f64` reading.
const MAX_DECIMALS: u32 = f64::DIGITS + 2;

/// Build the reading for a set of hit elements.
///
/// `x` is the label at the hit index; when the label axis is shorter than the
/// index, the index itself stands in for the label. Elements pointing past a
/// series' data or at an unknown series are skipped.
pub fn build_readings(
    hits: &[HitElement],
    spectra: &[Spectrum],
    labels: &[f64],
    decimals: Option<u32>,
) -> Vec<MarkerReading> {
    hits.iter()
        .filter_map(|hit| {
            let spectrum = spectra.get(hit.dataset_index)?;
            let y = spectrum.value_at(hit.index)?;
            let x = labels.get(hit.index).copied().unwrap_or(hit.index as f64);
            let y = match decimals {
                Some(d) => truncate(y, d),
                None => y,
            };
            Some(MarkerReading { label: spectrum.name.clone(), x, y })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CssColor;

    #[test]
    fn truncation_is_floor_based() {
        assert_eq!(truncate(2.567, 1), 2.5);
        assert_eq!(truncate(4.2, 1), 4.2);
        assert_eq!(truncate(1.999, 2), 1.99);
        assert_eq!(truncate(-1.21, 1), -1.3);
        assert_eq!(truncate(7.9, 0), 7.0);
    }

    #[test]
    fn truncation_with_huge_decimals_keeps_value() {
        assert_eq!(truncate(25.0, u32::MAX), 25.0);
        assert_eq!(truncate(2.5, 400), 2.5);
        assert_eq!(truncate(-1.21, 309), -1.21);
        // finite factor but the product overflows
        assert_eq!(truncate(1e300, 17), 1e300);
    }

    #[test]
    fn readings_skip_short_series() {
        let c = CssColor::new("red");
        let spectra = vec![
            Spectrum::new("a", vec![1.0, 2.0, 3.0], c.clone(), true),
            Spectrum::new("b", vec![5.0], c, true),
        ];
        let hits = [
            HitElement { dataset_index: 0, index: 2 },
            HitElement { dataset_index: 1, index: 2 },
        ];
        let r = build_readings(&hits, &spectra, &[10.0, 20.0, 30.0], None);
        assert_eq!(r, vec![MarkerReading { label: "a".into(), x: 30.0, y: 3.0 }]);
    }

    #[test]
    fn missing_label_falls_back_to_index() {
        let spectra = vec![Spectrum::new("a", vec![1.0, 2.0], CssColor::new("red"), true)];
        let r = build_readings(&[HitElement { dataset_index: 0, index: 1 }], &spectra, &[], None);
        assert_eq!(r[0].x, 1.0);
    }
}
