// File: crates/traffic-charts/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Annotation text drawn over light heatmap cells.
    pub annotation_dark: skia::Color,
    /// Annotation text drawn over dark heatmap cells.
    pub annotation_light: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            title: skia::Color::from_argb(255, 20, 20, 30),
            grid: skia::Color::from_argb(255, 226, 226, 230),
            axis_line: skia::Color::from_argb(255, 40, 40, 48),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 210),
            annotation_dark: skia::Color::from_argb(255, 38, 38, 38),
            annotation_light: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(230, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            annotation_dark: skia::Color::from_argb(255, 20, 20, 24),
            annotation_light: skia::Color::from_argb(255, 245, 245, 250),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            annotation_dark: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            annotation_light: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
