// File: crates/traffic-charts/src/figure.rs
// Summary: Figure trait with the headless raster pipeline (PNG file/bytes, RGBA8) and shared frame drawing.

use std::path::Path;

use log::debug;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub const TITLE_SIZE: f32 = 16.0;
pub const LABEL_SIZE: f32 = 13.0;
pub const TICK_SIZE: f32 = 11.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn plot_area(&self) -> RectI32 {
        RectI32::plot_area(self.width, self.height, &self.insets)
    }
}

/// Anything that can paint itself onto a canvas. Rendering to PNG or raw
/// pixels is provided on top of [`Figure::draw`]; each call owns its surface.
pub trait Figure {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper);

    /// Paint onto a fresh CPU raster surface.
    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let shaper = TextShaper::new();
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        self.draw(canvas, opts, &shaper);
        Ok(surface)
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()>
    where
        Self: Sized,
    {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels as (buffer, width, height, row stride in bytes).
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, w, h, stride))
    }
}

// ---- shared frame helpers ---------------------------------------------------

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

/// Title centred above the plot area, x label below it, y label rotated along the left edge.
pub(crate) fn draw_titles(
    canvas: &skia::Canvas,
    text: &TextShaper,
    opts: &RenderOptions,
    area: &RectI32,
    title: &str,
    x_label: &str,
    y_label: &str,
) {
    if !opts.draw_labels { return; }
    let theme = &opts.theme;
    let cx = (area.left + area.right) as f32 * 0.5;
    text.draw(canvas, title, cx, area.top as f32 - 18.0, TITLE_SIZE, theme.title, false, Anchor::Center);
    text.draw(canvas, x_label, cx, opts.height as f32 - 14.0, LABEL_SIZE, theme.axis_label, false, Anchor::Center);
    let cy = (area.top + area.bottom) as f32 * 0.5;
    text.draw_rotated(canvas, y_label, 22.0, cy, 90.0, LABEL_SIZE, theme.axis_label, Anchor::Center);
}

/// Left and bottom axis lines of the plot area.
pub(crate) fn draw_axis_lines(canvas: &skia::Canvas, theme: &Theme, area: &RectI32) {
    let paint = stroke_paint(theme.axis_line, 1.2);
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

/// Legend box with a title and one colored swatch per entry, top-left corner at (`x`, `y`).
pub(crate) fn draw_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    opts: &RenderOptions,
    x: f32,
    y: f32,
    title: &str,
    entries: &[(String, skia::Color)],
) {
    if entries.is_empty() { return; }
    let theme = &opts.theme;
    let row_h = 18.0f32;
    let swatch = 12.0f32;
    let width = legend_width(text, opts, title, entries);
    let rows = entries.len() as f32 + if title.is_empty() { 0.0 } else { 1.0 };
    let rect = skia::Rect::from_xywh(x, y, width, rows * row_h + 10.0);
    canvas.draw_rect(rect, &fill_paint(theme.legend_background));
    canvas.draw_rect(rect, &stroke_paint(theme.legend_border, 1.0));

    let mut row_y = y + 5.0;
    if !title.is_empty() {
        if opts.draw_labels {
            text.draw(canvas, title, x + width * 0.5, row_y + 14.0, LABEL_SIZE, theme.axis_label, false, Anchor::Center);
        }
        row_y += row_h;
    }
    for (label, color) in entries {
        let sw = skia::Rect::from_xywh(x + 8.0, row_y + (row_h - swatch) * 0.5, swatch, swatch);
        canvas.draw_rect(sw, &fill_paint(*color));
        if opts.draw_labels {
            text.draw_left(canvas, label, x + 8.0 + swatch + 6.0, row_y + 13.0, TICK_SIZE, theme.axis_label, false);
        }
        row_y += row_h;
    }
}

/// Width a legend needs; fixed when labels are off so layout does not depend on fonts.
pub(crate) fn legend_width(text: &TextShaper, opts: &RenderOptions, title: &str, entries: &[(String, skia::Color)]) -> f32 {
    if !opts.draw_labels { return 160.0; }
    let widest = entries
        .iter()
        .map(|(l, _)| text.measure_width(l, TICK_SIZE, false))
        .fold(text.measure_width(title, LABEL_SIZE, false) - 26.0, f32::max);
    widest + 8.0 + 12.0 + 6.0 + 10.0
}
