// File: crates/traffic-charts/src/heatmap.rs
// Summary: Annotated heatmap of road type x vehicle type proportions with a colour bar.

use skia_safe as skia;

use crate::axis::TickFormat;
use crate::colormap::{luminance, Colormap};
use crate::error::{ChartError, Result};
use crate::figure::{self, Figure, RenderOptions, TICK_SIZE};
use crate::geometry::{band, RectI32};
use crate::grid::nice_ticks;
use crate::proportion::ProportionTable;
use crate::text::{Anchor, TextShaper};

pub const DEFAULT_HEATMAP_TITLE: &str = "Heatmap of Vehicle Type Proportions by Road Type";

const COLORBAR_WIDTH: i32 = 18;
const COLORBAR_GAP: i32 = 24;
const COLORBAR_RESERVE: i32 = 90;

pub struct HeatmapChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colormap: Colormap,
    /// Print each cell's value on top of it.
    pub annotate: bool,
    pub annotation_format: TickFormat,
    /// Counter-clockwise rotation of the column labels, in degrees.
    pub label_rotation: f32,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl HeatmapChart {
    /// `values` is row-major; every row must have one value per column label.
    pub fn new(row_labels: Vec<String>, column_labels: Vec<String>, values: Vec<Vec<f64>>) -> Result<Self> {
        if values.len() != row_labels.len() {
            return Err(ChartError::ShapeMismatch { expected: row_labels.len(), found: values.len() });
        }
        if let Some(bad) = values.iter().find(|r| r.len() != column_labels.len()) {
            return Err(ChartError::ShapeMismatch { expected: column_labels.len(), found: bad.len() });
        }
        Ok(Self {
            title: DEFAULT_HEATMAP_TITLE.to_string(),
            x_label: "Vehicle Types".to_string(),
            y_label: "Road Types".to_string(),
            colormap: Colormap::YlGnBu,
            annotate: true,
            annotation_format: TickFormat::Fixed(2),
            label_rotation: 30.0,
            row_labels,
            column_labels,
            values,
        })
    }

    /// Rows are the table's road names; `labels` name its columns and must match their count.
    pub fn from_table(table: &ProportionTable, labels: &[&str]) -> Result<Self> {
        if labels.len() != table.width() {
            return Err(ChartError::ShapeMismatch { expected: table.width(), found: labels.len() });
        }
        Self::new(
            table.road_names().to_vec(),
            labels.iter().map(|l| l.to_string()).collect(),
            table.rows(),
        )
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Finite (min, max) over all cells, or `None` if there is nothing to colour.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in self.values.iter().flatten().filter(|v| v.is_finite()) {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        if lo.is_finite() { Some((lo, hi)) } else { None }
    }

    /// Colour of a value under this heatmap's normalisation.
    pub fn cell_color(&self, v: f64) -> Option<skia::Color> {
        self.normalized_color(v, self.value_range()?)
    }

    fn normalized_color(&self, v: f64, (lo, hi): (f64, f64)) -> Option<skia::Color> {
        if !v.is_finite() { return None; }
        let t = if hi - lo < 1e-12 { 0.5 } else { (v - lo) / (hi - lo) };
        Some(self.colormap.sample(t))
    }
}

impl Figure for HeatmapChart {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) {
        let frame = opts.plot_area();
        let area = frame.shrink_right(COLORBAR_RESERVE);
        let theme = &opts.theme;
        let rows = self.row_labels.len();
        let cols = self.column_labels.len();
        let range = self.value_range();

        for (r, row) in self.values.iter().enumerate() {
            let (top, bottom) = band(area.top as f32, area.bottom as f32, r, rows);
            for (c, &v) in row.iter().enumerate() {
                let (left, right) = band(area.left as f32, area.right as f32, c, cols);
                // NaN cells stay background, like a masked cell
                let Some(color) = range.and_then(|rg| self.normalized_color(v, rg)) else { continue };
                canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), &figure::fill_paint(color));
                if self.annotate && opts.draw_labels {
                    let ink = if luminance(color) > 0.408 { theme.annotation_dark } else { theme.annotation_light };
                    let label = self.annotation_format.format(v);
                    text.draw(canvas, &label, (left + right) * 0.5, (top + bottom) * 0.5 + 4.0, TICK_SIZE, ink, true, Anchor::Center);
                }
            }
        }

        if opts.draw_labels {
            let b = area.bottom as f32;
            for (c, label) in self.column_labels.iter().enumerate() {
                let (left, right) = band(area.left as f32, area.right as f32, c, cols);
                text.draw_rotated(canvas, label, (left + right) * 0.5, b + 14.0, self.label_rotation, TICK_SIZE, theme.tick, Anchor::Right);
            }
            let l = area.left as f32;
            for (r, label) in self.row_labels.iter().enumerate() {
                let (top, bottom) = band(area.top as f32, area.bottom as f32, r, rows);
                text.draw(canvas, label, l - 8.0, (top + bottom) * 0.5 + 4.0, TICK_SIZE, theme.tick, false, Anchor::Right);
            }
        }

        if let Some(range) = range {
            let bar = RectI32::from_ltrb(
                area.right + COLORBAR_GAP,
                area.top,
                area.right + COLORBAR_GAP + COLORBAR_WIDTH,
                area.bottom,
            );
            draw_colorbar(canvas, text, opts, &bar, self.colormap, range);
        }

        figure::draw_titles(canvas, text, opts, &area, &self.title, &self.x_label, &self.y_label);
    }
}

fn draw_colorbar(
    canvas: &skia::Canvas,
    text: &TextShaper,
    opts: &RenderOptions,
    bar: &RectI32,
    colormap: Colormap,
    (lo, hi): (f64, f64),
) {
    let h = bar.height().max(1);
    // one horizontal strip per pixel row, bottom = low
    for i in 0..h {
        let t = i as f64 / (h - 1).max(1) as f64;
        let y = bar.bottom as f32 - i as f32 - 1.0;
        let strip = skia::Rect::from_ltrb(bar.left as f32, y, bar.right as f32, y + 1.0);
        canvas.draw_rect(strip, &figure::fill_paint(colormap.sample(t)));
    }
    canvas.draw_rect(bar.to_skia(), &figure::stroke_paint(opts.theme.axis_line, 1.0));

    let span = (hi - lo).max(1e-12);
    let tick = figure::stroke_paint(opts.theme.axis_line, 1.0);
    for v in nice_ticks(lo, hi, 5) {
        let y = bar.bottom as f32 - ((v - lo) / span) as f32 * h as f32;
        let r = bar.right as f32;
        canvas.draw_line((r, y), (r + 4.0, y), &tick);
        if opts.draw_labels {
            text.draw_left(canvas, &TickFormat::Auto.format(v), r + 7.0, y + 4.0, TICK_SIZE, opts.theme.tick, true);
        }
    }
}
