// File: crates/traffic-charts/src/stacked.rs
// Summary: Stacked bar chart of vehicle proportions, one bar per road type.

use skia_safe as skia;

use crate::axis::{Axis, TickFormat};
use crate::colormap::Colormap;
use crate::error::{ChartError, Result};
use crate::figure::{self, Figure, RenderOptions, TICK_SIZE};
use crate::geometry::band;
use crate::proportion::ProportionTable;
use crate::text::{Anchor, TextShaper};

pub const DEFAULT_STACKED_TITLE: &str = "Vehicle Type Proportions by Road Type (Stacked Bar Chart)";
/// Default figure size (12in x 8in at 100dpi).
pub const STACKED_WIDTH: i32 = 1200;
pub const STACKED_HEIGHT: i32 = 800;

/// Fraction of each category band covered by its bar.
const BAR_WIDTH: f32 = 0.5;

pub struct StackedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub colormap: Colormap,
    pub y_format: TickFormat,
    /// Counter-clockwise rotation of the category labels, in degrees.
    pub label_rotation: f32,
    categories: Vec<String>,
    segment_labels: Vec<String>,
    /// values[category][segment]
    values: Vec<Vec<f64>>,
}

impl StackedBarChart {
    /// One bar per road name, one segment per listed column (bottom to top).
    /// Segments are labelled with their column names.
    pub fn from_table(table: &ProportionTable, columns: &[&str]) -> Result<Self> {
        let selected = table.select(columns)?;
        Ok(Self {
            title: DEFAULT_STACKED_TITLE.to_string(),
            x_label: "Road Type".to_string(),
            y_label: "Proportion of Total Vehicles (%)".to_string(),
            legend_title: "Vehicle Type".to_string(),
            colormap: Colormap::Tab20,
            y_format: TickFormat::Percent(1),
            label_rotation: 45.0,
            categories: selected.road_names().to_vec(),
            segment_labels: columns.iter().map(|c| c.to_string()).collect(),
            values: selected.rows(),
        })
    }

    /// Replace the legend labels; one per segment.
    pub fn with_segment_labels(mut self, labels: &[&str]) -> Result<Self> {
        if labels.len() != self.segment_labels.len() {
            return Err(ChartError::ShapeMismatch { expected: self.segment_labels.len(), found: labels.len() });
        }
        self.segment_labels = labels.iter().map(|l| l.to_string()).collect();
        Ok(self)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn segment_labels(&self) -> &[String] { &self.segment_labels }

    pub fn categories(&self) -> &[String] { &self.categories }

    /// Stack height of every bar; missing values count as zero.
    pub fn totals(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|row| row.iter().filter(|v| v.is_finite()).sum())
            .collect()
    }

    /// Value axis from zero to the tallest stack plus 5% headroom.
    pub fn value_axis(&self) -> Axis {
        let top = self.totals().into_iter().fold(0.0f64, f64::max);
        let top = if top > 0.0 { top * 1.05 } else { 1.0 };
        Axis::new(self.y_label.clone(), 0.0, top).with_format(self.y_format)
    }

    fn segment_color(&self, index: usize) -> skia::Color {
        self.colormap.categorical(index, self.segment_labels.len())
    }
}

impl Figure for StackedBarChart {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) {
        let theme = &opts.theme;
        let entries: Vec<(String, skia::Color)> = self
            .segment_labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), self.segment_color(i)))
            .collect();
        let legend_w = figure::legend_width(text, opts, &self.legend_title, &entries);
        // legend sits outside the plot, to the right
        let area = opts.plot_area().shrink_right(legend_w as i32 + 24);
        let y_axis = self.value_axis();
        let sy = |v: f64| -> f32 { area.bottom as f32 - (v / y_axis.span()) as f32 * area.height() as f32 };

        let grid = figure::stroke_paint(theme.grid, 1.0);
        let tick = figure::stroke_paint(theme.axis_line, 1.0);
        let (l, r) = (area.left as f32, area.right as f32);
        for v in y_axis.ticks(8) {
            let py = sy(v);
            canvas.draw_line((l, py), (r, py), &grid);
            canvas.draw_line((l - 5.0, py), (l, py), &tick);
            if opts.draw_labels {
                text.draw(canvas, &y_axis.tick_label(v), l - 8.0, py + 4.0, TICK_SIZE, theme.tick, true, Anchor::Right);
            }
        }

        let n = self.categories.len();
        for (c, row) in self.values.iter().enumerate() {
            let (band_l, band_r) = band(l, r, c, n);
            let center = (band_l + band_r) * 0.5;
            let half = (band_r - band_l) * BAR_WIDTH * 0.5;
            let mut base = 0.0f64;
            for (s, &v) in row.iter().enumerate() {
                if !v.is_finite() || v <= 0.0 { continue; }
                let rect = skia::Rect::from_ltrb(center - half, sy(base + v), center + half, sy(base));
                canvas.draw_rect(rect, &figure::fill_paint(self.segment_color(s)));
                base += v;
            }
            let b = area.bottom as f32;
            canvas.draw_line((center, b), (center, b + 5.0), &tick);
            if opts.draw_labels {
                text.draw_rotated(canvas, &self.categories[c], center, b + 16.0, self.label_rotation, TICK_SIZE, theme.tick, Anchor::Right);
            }
        }

        figure::draw_axis_lines(canvas, theme, &area);
        figure::draw_legend(canvas, text, opts, area.right as f32 + 16.0, area.top as f32, &self.legend_title, &entries);
        figure::draw_titles(canvas, text, opts, &area, &self.title, &self.x_label, &self.y_label);
    }
}
