// File: crates/spectrum-core/src/axis.rs
// Summary: Axis display settings (axis drawn, title hidden by default).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    /// One slot per label; values are addressed by label index.
    Category,
    Linear,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub display: bool,
    pub show_title: bool,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(title: impl Into<String>, kind: ScaleKind) -> Self {
        Self { title: title.into(), display: true, show_title: false, kind }
    }

    pub fn default_x() -> Self {
        Self::new("X", ScaleKind::Category)
    }

    pub fn default_y() -> Self {
        Self::new("Y", ScaleKind::Linear)
    }
}
