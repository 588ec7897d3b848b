// File: crates/traffic-charts/src/colormap.rs
// Summary: Sequential and qualitative colormaps (YlGnBu, tab10, tab20) as hex color stops.

use skia_safe as skia;

const YLGNBU: [&str; 9] = [
    "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8", "#253494", "#081d58",
];

const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22",
    "#17becf",
];

const TAB20: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896", "#9467bd",
    "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7", "#bcbd22", "#dbdb8d",
    "#17becf", "#9edae5",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    /// Yellow-green-blue, interpolated between stops.
    YlGnBu,
    /// Ten distinct colors, the usual line color cycle.
    Tab10,
    /// Twenty colors in light/dark pairs.
    Tab20,
}

impl Colormap {
    fn stops(&self) -> &'static [&'static str] {
        match self {
            Colormap::YlGnBu => &YLGNBU,
            Colormap::Tab10 => &TAB10,
            Colormap::Tab20 => &TAB20,
        }
    }

    pub fn is_qualitative(&self) -> bool { !matches!(self, Colormap::YlGnBu) }

    /// Color at position `t` in [0, 1]. Sequential maps blend neighbouring stops,
    /// qualitative maps pick the listed color covering `t`.
    pub fn sample(&self, t: f64) -> skia::Color {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if self.is_qualitative() {
            let idx = ((t * stops.len() as f64).floor() as usize).min(stops.len() - 1);
            return stop_color(stops[idx]);
        }
        let pos = t * (stops.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = (pos - lo as f64) as f32;
        lerp_color(stop_color(stops[lo]), stop_color(stops[hi]), frac)
    }

    /// Color of entry `index` out of `count` evenly spaced picks across the whole map.
    pub fn categorical(&self, index: usize, count: usize) -> skia::Color {
        if count <= 1 { return self.sample(0.0); }
        self.sample(index as f64 / (count - 1) as f64)
    }

    /// Color `index` of the listed colors, cycling.
    pub fn nth(&self, index: usize) -> skia::Color {
        let stops = self.stops();
        stop_color(stops[index % stops.len()])
    }
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

fn stop_color(hex: &str) -> skia::Color {
    let (r, g, b) = hex_to_rgb(hex).unwrap_or((200, 200, 200));
    skia::Color::from_argb(255, r, g, b)
}

fn lerp_color(a: skia::Color, b: skia::Color, t: f32) -> skia::Color {
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8 };
    skia::Color::from_argb(mix(a.a(), b.a()), mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Relative luminance in [0, 1] (sRGB, no gamma correction).
pub fn luminance(c: skia::Color) -> f32 {
    (0.2126 * c.r() as f32 + 0.7152 * c.g() as f32 + 0.0722 * c.b() as f32) / 255.0
}
