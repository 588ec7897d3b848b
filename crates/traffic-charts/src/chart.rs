// File: crates/traffic-charts/src/chart.rs
// Summary: Multi-line chart (one line per road type) with markers, gaps, grid and legend.

use skia_safe as skia;

use crate::axis::Axis;
use crate::colormap::Colormap;
use crate::figure::{self, Figure, RenderOptions, TICK_SIZE};
use crate::geometry::RectI32;
use crate::series::{Marker, Series};
use crate::text::{Anchor, TextShaper};
use crate::view::ViewState;

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend_title: Option<String>,
    pub show_grid: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend_title: None,
            show_grid: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the known points; `y_margin` is a fraction of the y span.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    fn series_color(&self, index: usize) -> skia::Color {
        self.series[index].color.unwrap_or_else(|| Colormap::Tab10.nth(index))
    }
}

impl Figure for Chart {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) {
        let area = opts.plot_area();
        let x_ticks = self.x_axis.ticks(8);
        let y_ticks = self.y_axis.ticks(6);

        if self.show_grid {
            draw_grid(canvas, opts, &area, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);
        }
        figure::draw_axis_lines(canvas, &opts.theme, &area);
        draw_tick_labels(canvas, text, opts, &area, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);

        canvas.save();
        canvas.clip_rect(area.to_skia().with_outset((6.0, 6.0)), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &area, &self.x_axis, &self.y_axis, s, self.series_color(i));
        }
        canvas.restore();

        let entries: Vec<(String, skia::Color)> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| (s.label.clone(), self.series_color(i)))
            .collect();
        let legend_title = self.legend_title.as_deref().unwrap_or("");
        let w = figure::legend_width(text, opts, legend_title, &entries);
        figure::draw_legend(canvas, text, opts, area.right as f32 - w - 8.0, area.top as f32 + 8.0, legend_title, &entries);

        figure::draw_titles(canvas, text, opts, &area, &self.title, &self.x_axis.label, &self.y_axis.label);
    }
}

// ---- helpers ----------------------------------------------------------------

fn scale_x(area: &RectI32, axis: &Axis, x: f64) -> f32 {
    area.left as f32 + ((x - axis.min) / axis.span()) as f32 * area.width() as f32
}

fn scale_y(area: &RectI32, axis: &Axis, y: f64) -> f32 {
    area.bottom as f32 - ((y - axis.min) / axis.span()) as f32 * area.height() as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    area: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let paint = figure::stroke_paint(opts.theme.grid, 1.0);
    let (t, b) = (area.top as f32, area.bottom as f32);
    let (l, r) = (area.left as f32, area.right as f32);

    // verticals
    for &x in x_ticks {
        let px = scale_x(area, x_axis, x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = scale_y(area, y_axis, y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    opts: &RenderOptions,
    area: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let tick = figure::stroke_paint(opts.theme.axis_line, 1.0);
    let b = area.bottom as f32;
    let l = area.left as f32;
    for &x in x_ticks {
        let px = scale_x(area, x_axis, x);
        canvas.draw_line((px, b), (px, b + 5.0), &tick);
        if opts.draw_labels {
            text.draw(canvas, &x_axis.tick_label(x), px, b + 20.0, TICK_SIZE, opts.theme.tick, true, Anchor::Center);
        }
    }
    for &y in y_ticks {
        let py = scale_y(area, y_axis, y);
        canvas.draw_line((l - 5.0, py), (l, py), &tick);
        if opts.draw_labels {
            text.draw(canvas, &y_axis.tick_label(y), l - 8.0, py + 4.0, TICK_SIZE, opts.theme.tick, true, Anchor::Right);
        }
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    area: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let stroke = figure::stroke_paint(color, 2.0);
    let dot = figure::fill_paint(color);

    for run in series.segments() {
        if run.len() >= 2 {
            let mut path = skia::Path::new();
            let (x0, y0) = run[0];
            path.move_to((scale_x(area, x_axis, x0), scale_y(area, y_axis, y0)));
            for &(x, y) in run.iter().skip(1) {
                path.line_to((scale_x(area, x_axis, x), scale_y(area, y_axis, y)));
            }
            canvas.draw_path(&path, &stroke);
        }
        if series.marker == Marker::Circle {
            for &(x, y) in &run {
                canvas.draw_circle((scale_x(area, x_axis, x), scale_y(area, y_axis, y)), 4.0, &dot);
            }
        }
    }
}
