// File: crates/traffic-charts/tests/ratio.rs
// Purpose: Ratio builder behavior: complete grid, exclusions, interpolation, grouping, errors.

use traffic_charts::vehicle::TOTAL_VEHICLES;
use traffic_charts::{build_ratio_series, ChartError, RatioSeriesBuilder, TrafficRecord, TrafficTable, VehicleType};

const CARS: VehicleType = VehicleType::CarsAndTaxis;

fn rec(road: &str, year: i32, cars: f64, total: f64) -> TrafficRecord {
    TrafficRecord::new(road, year, total).with_count(CARS, cars)
}

fn approx(got: Option<f64>, want: f64) {
    let v = got.unwrap_or_else(|| panic!("expected {want}, got None"));
    assert!((v - want).abs() < 1e-12, "expected {want}, got {v}");
}

#[test]
fn complete_grid_has_every_road_and_year() {
    let table = TrafficTable::from_records(&[
        rec("M", 2001, 50.0, 100.0),
        rec("A", 2003, 10.0, 100.0),
        rec("B", 1990, 10.0, 100.0), // outside range, road still observed
    ]);
    let s = build_ratio_series(&table, CARS.column(), 2000, 2004, &[]).unwrap();
    assert_eq!(s.len(), 5 * 3);
    assert_eq!(s.road_names(), vec!["A", "B", "M"]);
    for road in ["A", "B", "M"] {
        let years: Vec<i32> = s.for_road(road).map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2001, 2002, 2003, 2004]);
    }
    assert!(s.for_road("B").all(|r| r.ratio.is_none()));
}

#[test]
fn excluded_year_is_interpolated_not_raw() {
    let table = TrafficTable::from_records(&[
        rec("A", 2000, 10.0, 100.0),
        rec("A", 2001, 90.0, 100.0), // raw 0.9, must be discarded
        rec("A", 2002, 30.0, 100.0),
    ]);
    let s = RatioSeriesBuilder::new(CARS.column())
        .years(2000, 2002)
        .exclude_years([2001])
        .build(&table)
        .unwrap();
    approx(s.get("A", 2001), 0.2);
    approx(s.get("A", 2000), 0.1);
    approx(s.get("A", 2002), 0.3);
}

#[test]
fn missing_year_is_interpolated() {
    let table = TrafficTable::from_records(&[rec("A", 2000, 10.0, 100.0), rec("A", 2002, 30.0, 100.0)]);
    let s = build_ratio_series(&table, CARS.column(), 2000, 2002, &[]).unwrap();
    approx(s.get("A", 2001), 0.2);
}

#[test]
fn leading_gap_is_not_extrapolated() {
    let table = TrafficTable::from_records(&[
        rec("A", 2000, 50.0, 100.0),
        rec("A", 2001, 20.0, 100.0),
        rec("A", 2002, 40.0, 100.0),
    ]);
    let s = build_ratio_series(&table, CARS.column(), 2000, 2003, &[2000]).unwrap();
    assert_eq!(s.get("A", 2000), None);
    approx(s.get("A", 2001), 0.2);
    // trailing year has no data and no right neighbour either
    assert_eq!(s.get("A", 2003), None);
}

#[test]
fn interpolation_stays_within_a_road() {
    let table = TrafficTable::from_records(&[
        rec("A", 2000, 10.0, 100.0),
        rec("B", 2001, 50.0, 100.0),
        rec("A", 2002, 30.0, 100.0),
    ]);
    let s = build_ratio_series(&table, CARS.column(), 2000, 2002, &[]).unwrap();
    approx(s.get("A", 2001), 0.2);
    assert_eq!(s.get("B", 2000), None);
    assert_eq!(s.get("B", 2002), None);
}

#[test]
fn division_is_exact() {
    let table = TrafficTable::from_records(&[rec("B", 2010, 40.0, 200.0)]);
    let s = build_ratio_series(&table, CARS.column(), 2010, 2010, &[]).unwrap();
    assert_eq!(s.get("B", 2010), Some(0.2));
}

#[test]
fn duplicate_rows_are_summed_before_dividing() {
    let table = TrafficTable::from_records(&[rec("C", 2015, 10.0, 100.0), rec("C", 2015, 15.0, 150.0)]);
    let s = build_ratio_series(&table, CARS.column(), 2015, 2015, &[]).unwrap();
    assert_eq!(s.len(), 1);
    approx(s.get("C", 2015), 0.1);
}

#[test]
fn build_is_idempotent() {
    let table = TrafficTable::from_records(&[
        rec("A", 2000, 10.0, 100.0),
        rec("M", 2003, 12.0, 80.0),
        rec("A", 2004, 5.0, 90.0),
    ]);
    let b = RatioSeriesBuilder::new(CARS.column()).years(2000, 2005).exclude_years([2003]);
    assert_eq!(b.build(&table).unwrap(), b.build(&table).unwrap());
}

#[test]
fn reversed_range_is_empty_not_an_error() {
    let table = TrafficTable::from_records(&[rec("A", 2000, 10.0, 100.0)]);
    let s = build_ratio_series(&table, CARS.column(), 2005, 2000, &[]).unwrap();
    assert!(s.is_empty());
}

#[test]
fn empty_table_gives_empty_series() {
    let s = build_ratio_series(&TrafficTable::default(), CARS.column(), 2000, 2005, &[]);
    // no columns at all, so the vehicle column is missing
    assert!(matches!(s, Err(ChartError::MissingColumn(_))));

    let table = TrafficTable::from_records(&[]);
    let s = build_ratio_series(&table, CARS.column(), 2000, 2005, &[]).unwrap();
    assert!(s.is_empty());
}

#[test]
fn unknown_vehicle_column_fails_immediately() {
    let table = TrafficTable::from_records(&[rec("A", 2000, 10.0, 100.0)]);
    match build_ratio_series(&table, "trams", 2000, 2001, &[]) {
        Err(ChartError::MissingColumn(name)) => assert_eq!(name, "trams"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_total_column_fails() {
    let table = TrafficTable::new(vec!["A".into()], vec![2000])
        .unwrap()
        .with_column("cars_and_taxis", vec![1.0])
        .unwrap();
    match build_ratio_series(&table, "cars_and_taxis", 2000, 2001, &[]) {
        Err(ChartError::MissingColumn(name)) => assert_eq!(name, TOTAL_VEHICLES),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn series_lines_are_labelled_per_road() {
    let table = TrafficTable::from_records(&[rec("A", 2000, 10.0, 100.0), rec("M", 2000, 20.0, 100.0)]);
    let s = build_ratio_series(&table, CARS.column(), 2000, 2001, &[]).unwrap();
    let lines = s.to_series();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].label, "Road A");
    assert_eq!(lines[1].data, vec![(2000.0, Some(0.2)), (2001.0, None)]);
}
