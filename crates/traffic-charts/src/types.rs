// File: crates/traffic-charts/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels (10in at 100dpi).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels (6in at 100dpi).
pub const HEIGHT: i32 = 600;

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
        // room for title on top, rotated category labels at the bottom
        Self::new(96, 32, 56, 120)
    }
}
