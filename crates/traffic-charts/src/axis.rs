// File: crates/traffic-charts/src/axis.rs
// Summary: Axis model with labels, ranges and tick formatting.

use crate::grid::nice_ticks;

/// How tick values are printed next to an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Shortest of up to three decimals.
    Auto,
    /// Whole numbers only; fractional ticks are dropped.
    Integer,
    Fixed(usize),
    /// Fraction shown as percent, e.g. 0.125 -> "12.5%" with one decimal.
    Percent(usize),
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match *self {
            TickFormat::Auto => {
                let s = format!("{:.3}", v);
                let s = s.trim_end_matches('0').trim_end_matches('.');
                if s == "-0" { "0".to_string() } else { s.to_string() }
            }
            TickFormat::Integer => format!("{}", v.round() as i64),
            TickFormat::Fixed(p) => format!("{:.*}", p, v),
            TickFormat::Percent(p) => format!("{:.*}%", p, v * 100.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Auto }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Year", 0.0, 10.0).with_format(TickFormat::Integer)
    }

    pub fn default_y() -> Self {
        Self::new("Ratio", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Tick positions inside the axis range.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let ticks = nice_ticks(self.min, self.max, target);
        match self.format {
            TickFormat::Integer => ticks.into_iter().filter(|v| v.fract().abs() < 1e-9).collect(),
            _ => ticks,
        }
    }

    pub fn tick_label(&self, v: f64) -> String { self.format.format(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_format_matches_one_decimal() {
        assert_eq!(TickFormat::Percent(1).format(0.125), "12.5%");
        assert_eq!(TickFormat::Percent(1).format(1.0), "100.0%");
    }

    #[test]
    fn auto_format_trims_zeros() {
        assert_eq!(TickFormat::Auto.format(0.25), "0.25");
        assert_eq!(TickFormat::Auto.format(2.0), "2");
        assert_eq!(TickFormat::Auto.format(-0.0001), "0");
    }

    #[test]
    fn integer_axis_drops_fractional_ticks() {
        let axis = Axis::new("Year", 2000.0, 2003.0).with_format(TickFormat::Integer);
        let ticks = axis.ticks(8);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| t.fract() == 0.0));
    }
}
