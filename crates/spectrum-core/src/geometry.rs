// File: crates/spectrum-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::{Insets, SurfaceSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Surface area minus `insets`, with an extra `top_extra` reserved at the top.
    pub fn plot_area(size: SurfaceSize, insets: &Insets, top_extra: f32) -> Self {
        let left = insets.left as f32;
        let right = (size.width as f32 - insets.right as f32).max(left + 1.0);
        let top = insets.top as f32 + top_extra;
        let bottom = (size.height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Inclusive on all edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
