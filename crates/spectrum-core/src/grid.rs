// File: crates/spectrum-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Label indices to tick on a category axis of `count` labels, at most `max_ticks` of them.
pub fn category_ticks(count: usize, max_ticks: usize) -> Vec<usize> {
    if count == 0 || max_ticks == 0 { return Vec::new(); }
    let stride = count.div_ceil(max_ticks).max(1);
    (0..count).step_by(stride).collect()
}

/// Short tick label: integers without decimals, others with up to 3 significant decimals.
pub fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(category_ticks(10, 5), vec![0, 2, 4, 6, 8]);
        assert_eq!(category_ticks(3, 10), vec![0, 1, 2]);
        assert!(category_ticks(0, 4).is_empty());
    }

    #[test]
    fn tick_format() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.12345), "0.123");
    }
}
