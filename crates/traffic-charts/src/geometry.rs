// File: crates/traffic-charts/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot areas, category bands).

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Never collapses below one pixel in either direction.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    /// Shrink the right edge by `px`, keeping at least one pixel of width.
    pub fn shrink_right(&self, px: i32) -> Self {
        Self { right: (self.right - px).max(self.left + 1), ..*self }
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Start and end (in pixels) of band `index` when `[start, end]` is split into `count` equal bands.
#[inline]
pub fn band(start: f32, end: f32, index: usize, count: usize) -> (f32, f32) {
    let count = count.max(1) as f32;
    let size = (end - start) / count;
    let a = start + size * index as f32;
    (a, a + size)
}
