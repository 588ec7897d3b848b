// File: crates/traffic-charts/src/table.rs
// Summary: Column-oriented in-memory traffic table keyed by (road_name, year).

use std::collections::BTreeMap;

use crate::error::{ChartError, Result};
use crate::vehicle::{VehicleType, TOTAL_VEHICLES};

/// One observation of vehicle counts on a road type in a given year.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficRecord {
    pub road_name: String,
    pub year: i32,
    /// Counts indexed in [`VehicleType::ALL`] order.
    pub counts: [f64; 6],
    pub total_vehicles: f64,
}

impl TrafficRecord {
    pub fn new(road_name: impl Into<String>, year: i32, total_vehicles: f64) -> Self {
        Self { road_name: road_name.into(), year, counts: [0.0; 6], total_vehicles }
    }

    pub fn with_count(mut self, vehicle: VehicleType, count: f64) -> Self {
        self.counts[vehicle as usize] = count;
        self
    }

    pub fn count(&self, vehicle: VehicleType) -> f64 {
        self.counts[vehicle as usize]
    }
}

/// Rows of (road_name, year) plus named numeric columns of the same length.
///
/// Rows are kept in insertion order; duplicate keys are allowed and are summed
/// by the aggregations that consume the table.
#[derive(Clone, Debug, Default)]
pub struct TrafficTable {
    road_names: Vec<String>,
    years: Vec<i32>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl TrafficTable {
    /// Create a table from its key columns with no value columns yet.
    pub fn new(road_names: Vec<String>, years: Vec<i32>) -> Result<Self> {
        if road_names.len() != years.len() {
            return Err(ChartError::ShapeMismatch { expected: road_names.len(), found: years.len() });
        }
        Ok(Self { road_names, years, columns: BTreeMap::new() })
    }

    /// Build a table with every vehicle column and `total_vehicles`.
    pub fn from_records(records: &[TrafficRecord]) -> Self {
        let road_names = records.iter().map(|r| r.road_name.clone()).collect();
        let years = records.iter().map(|r| r.year).collect();
        let mut columns = BTreeMap::new();
        for vehicle in VehicleType::ALL {
            columns.insert(vehicle.column().to_string(), records.iter().map(|r| r.count(vehicle)).collect());
        }
        columns.insert(TOTAL_VEHICLES.to_string(), records.iter().map(|r| r.total_vehicles).collect());
        Self { road_names, years, columns }
    }

    /// Add or replace a value column. Its length must match the row count.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.len() {
            return Err(ChartError::ShapeMismatch { expected: self.len(), found: values.len() });
        }
        self.columns.insert(name.into(), values);
        Ok(())
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn road_names(&self) -> &[String] { &self.road_names }

    pub fn years(&self) -> &[i32] { &self.years }

    pub fn len(&self) -> usize { self.road_names.len() }

    pub fn is_empty(&self) -> bool { self.road_names.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_fill_every_vehicle_column() {
        let table = TrafficTable::from_records(&[
            TrafficRecord::new("M", 2001, 100.0).with_count(VehicleType::Lgvs, 12.0),
            TrafficRecord::new("A", 2002, 50.0),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("lgvs").unwrap(), &[12.0, 0.0]);
        assert_eq!(table.column(TOTAL_VEHICLES).unwrap(), &[100.0, 50.0]);
        assert_eq!(table.column_names().count(), 7);
    }

    #[test]
    fn column_length_must_match_rows() {
        let mut table = TrafficTable::new(vec!["A".into()], vec![2000]).unwrap();
        let err = table.insert_column("x", vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ChartError::ShapeMismatch { expected: 1, found: 2 }));
    }

    #[test]
    fn unknown_column_is_reported_by_name() {
        let table = TrafficTable::default();
        match table.column("trams") {
            Err(ChartError::MissingColumn(name)) => assert_eq!(name, "trams"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
