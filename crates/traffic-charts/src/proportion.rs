// File: crates/traffic-charts/src/proportion.rs
// Summary: Per-road-type vehicle proportions, the table behind the heatmap and stacked bar chart.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{ChartError, Result};
use crate::table::TrafficTable;
use crate::vehicle::TOTAL_VEHICLES;

/// One row per road name with ordered, named value columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProportionTable {
    road_names: Vec<String>,
    columns: Vec<(String, Vec<f64>)>,
}

impl ProportionTable {
    pub fn new(road_names: Vec<String>) -> Self {
        Self { road_names, columns: Vec::new() }
    }

    /// Append a column, or replace one with the same name in place.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.road_names.len() {
            return Err(ChartError::ShapeMismatch { expected: self.road_names.len(), found: values.len() });
        }
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name, values)),
        }
        Ok(())
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn road_names(&self) -> &[String] { &self.road_names }

    /// Number of rows (road types).
    pub fn len(&self) -> usize { self.road_names.len() }

    pub fn is_empty(&self) -> bool { self.road_names.is_empty() }

    /// Number of value columns.
    pub fn width(&self) -> usize { self.columns.len() }

    /// Values of row `index` in column order, or `None` past the last road.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.len() { return None; }
        self.columns.iter().map(|(_, v)| v.get(index).copied()).collect()
    }

    /// Row-major copy of all values.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.len()).filter_map(|i| self.row(i)).collect()
    }

    /// Project the named columns, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut out = Self::new(self.road_names.clone());
        for name in names {
            out.columns.push((name.to_string(), self.column(name)?.to_vec()));
        }
        Ok(out)
    }
}

/// Share of each vehicle column in total traffic, per road type over all years.
///
/// Output columns are named `<column>_ratio`; rows are road names in lexicographic order.
pub fn vehicle_proportions(table: &TrafficTable, vehicle_columns: &[&str]) -> Result<ProportionTable> {
    let totals = table.column(TOTAL_VEHICLES)?;
    let columns = vehicle_columns
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<Vec<_>>>()?;

    // road -> (per-column sums, total sum)
    let mut sums: BTreeMap<&str, (Vec<f64>, f64)> = BTreeMap::new();
    for (i, road) in table.road_names().iter().enumerate() {
        let entry = sums.entry(road.as_str()).or_insert_with(|| (vec![0.0; columns.len()], 0.0));
        for (acc, col) in entry.0.iter_mut().zip(&columns) {
            *acc += col[i];
        }
        entry.1 += totals[i];
    }
    debug!("vehicle proportions: {} rows -> {} road types", table.len(), sums.len());

    let mut out = ProportionTable::new(sums.keys().map(|r| r.to_string()).collect());
    for (c, name) in vehicle_columns.iter().enumerate() {
        let values = sums.values().map(|(acc, total)| acc[c] / total).collect();
        out.insert_column(format!("{name}_ratio"), values)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keeps_requested_order() {
        let t = ProportionTable::new(vec!["A".into()])
            .with_column("x", vec![1.0]).unwrap()
            .with_column("y", vec![2.0]).unwrap();
        let s = t.select(&["y", "x"]).unwrap();
        assert_eq!(s.column_names(), vec!["y", "x"]);
        assert_eq!(s.row(0), Some(vec![2.0, 1.0]));
    }

    #[test]
    fn row_past_the_end_is_none() {
        let t = ProportionTable::new(vec!["A".into()]).with_column("x", vec![1.0]).unwrap();
        assert_eq!(t.row(1), None);
        assert_eq!(ProportionTable::new(vec![]).row(0), None);
        assert_eq!(t.rows(), vec![vec![1.0]]);
    }

    #[test]
    fn select_unknown_column_fails() {
        let t = ProportionTable::new(vec!["A".into()]);
        assert!(matches!(t.select(&["nope"]), Err(ChartError::MissingColumn(_))));
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut t = ProportionTable::new(vec!["A".into()]);
        t.insert_column("x", vec![1.0]).unwrap();
        t.insert_column("x", vec![3.0]).unwrap();
        assert_eq!(t.width(), 1);
        assert_eq!(t.column("x").unwrap(), &[3.0]);
    }
}
