// File: crates/traffic-charts/src/series.rs
// Summary: Line series model; points may be absent, which breaks the drawn line.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data: Vec<(f64, Option<f64>)>,
    pub marker: Marker,
    /// Explicit stroke color; the chart's color cycle is used when unset.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self::with_gaps(label, data.into_iter().map(|(x, y)| (x, Some(y))).collect())
    }

    pub fn with_gaps(label: impl Into<String>, data: Vec<(f64, Option<f64>)>) -> Self {
        Self { label: label.into(), data, marker: Marker::None, color: None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Points with a finite y value.
    pub fn known_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data
            .iter()
            .filter_map(|&(x, y)| y.filter(|v| v.is_finite()).map(|v| (x, v)))
    }

    /// Maximal runs of consecutive known points; an absent or non-finite value ends a run.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut out = Vec::new();
        let mut run = Vec::new();
        for &(x, y) in &self.data {
            match y.filter(|v| v.is_finite()) {
                Some(v) => run.push((x, v)),
                None if !run.is_empty() => out.push(std::mem::take(&mut run)),
                None => {}
            }
        }
        if !run.is_empty() { out.push(run); }
        out
    }
}
