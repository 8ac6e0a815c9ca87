// File: crates/spectrum-core/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, style defaults).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Border width of a spectrum line, in pixels.
pub const LINE_WIDTH: f32 = 1.0;
/// Radius of the dot drawn at each spectrum value, in pixels.
pub const POINT_RADIUS: f32 = 2.0;
/// Border width of the click/hover marker lines, in pixels.
pub const MARKER_LINE_WIDTH: f32 = 1.0;

/// Fixed pixel size of the drawing surface a widget renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl SurfaceSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 16, 12, 32)
    }
}
