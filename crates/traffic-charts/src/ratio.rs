// File: crates/traffic-charts/src/ratio.rs
// Summary: Yearly vehicle-type ratio per road type over a complete year grid, with gaps interpolated.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::{debug, warn};

use crate::error::Result;
use crate::series::{Marker, Series};
use crate::table::TrafficTable;
use crate::vehicle::TOTAL_VEHICLES;

pub const DEFAULT_START_YEAR: i32 = 2000;
pub const DEFAULT_END_YEAR: i32 = 2023;

#[derive(Clone, Debug, PartialEq)]
pub struct RatioRow {
    pub road_name: String,
    pub year: i32,
    /// `None` when neither data nor interpolation could supply a value.
    pub ratio: Option<f64>,
}

/// One row per (road_name, year) for every observed road and every year in range,
/// ordered by road name then year.
#[derive(Clone, Debug, PartialEq)]
pub struct RatioSeries {
    pub vehicle_type: String,
    pub start_year: i32,
    pub end_year: i32,
    rows: Vec<RatioRow>,
}

impl RatioSeries {
    pub fn rows(&self) -> &[RatioRow] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Road names in output order.
    pub fn road_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.road_name.as_str()).dedup().collect()
    }

    pub fn for_road<'a>(&'a self, road_name: &'a str) -> impl Iterator<Item = &'a RatioRow> + 'a {
        self.rows.iter().filter(move |r| r.road_name == road_name)
    }

    /// Ratio at (road, year); `None` if the row is absent or has no value.
    pub fn get(&self, road_name: &str, year: i32) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.road_name == road_name && r.year == year)
            .and_then(|r| r.ratio)
    }

    /// One marked line per road type, labelled `Road <name>`.
    pub fn to_series(&self) -> Vec<Series> {
        self.road_names()
            .into_iter()
            .map(|road| {
                let data = self.for_road(road).map(|r| (r.year as f64, r.ratio)).collect();
                Series::with_gaps(format!("Road {road}"), data).with_marker(Marker::Circle)
            })
            .collect()
    }
}

/// Builds a [`RatioSeries`] for one vehicle column of a [`TrafficTable`].
#[derive(Clone, Debug)]
pub struct RatioSeriesBuilder {
    vehicle_type: String,
    start_year: i32,
    end_year: i32,
    exclude_years: BTreeSet<i32>,
}

impl RatioSeriesBuilder {
    pub fn new(vehicle_type: impl Into<String>) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            exclude_years: BTreeSet::new(),
        }
    }

    /// Inclusive year range. `start > end` yields an empty grid.
    pub fn years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Years whose values are discarded and re-derived from their neighbours.
    pub fn exclude_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.exclude_years.extend(years);
        self
    }

    pub fn build(&self, table: &TrafficTable) -> Result<RatioSeries> {
        let counts = table.column(&self.vehicle_type)?;
        let totals = table.column(TOTAL_VEHICLES)?;

        // (road, year) -> (vehicle sum, total sum); BTreeMap keeps roads sorted
        let mut groups: BTreeMap<(&str, i32), (f64, f64)> = BTreeMap::new();
        for (i, (road, &year)) in table.road_names().iter().zip(table.years()).enumerate() {
            let entry = groups.entry((road.as_str(), year)).or_insert((0.0, 0.0));
            entry.0 += counts[i];
            entry.1 += totals[i];
        }

        let road_names: Vec<&str> = groups.keys().map(|&(road, _)| road).dedup().collect();
        let years: Vec<i32> = if self.start_year <= self.end_year {
            (self.start_year..=self.end_year).collect()
        } else {
            warn!("empty year range {}..={}", self.start_year, self.end_year);
            Vec::new()
        };
        debug!(
            "ratio grid for '{}': {} groups, {} roads x {} years, {} excluded",
            self.vehicle_type,
            groups.len(),
            road_names.len(),
            years.len(),
            self.exclude_years.len()
        );

        let mut rows = Vec::with_capacity(road_names.len() * years.len());
        for road in road_names {
            let mut points: Vec<(f64, Option<f64>)> = years
                .iter()
                .map(|&year| {
                    let ratio = if self.exclude_years.contains(&year) {
                        None
                    } else {
                        groups.get(&(road, year)).and_then(|&(count, total)| group_ratio(count, total))
                    };
                    (year as f64, ratio)
                })
                .collect();
            interpolate_linear(&mut points);
            rows.extend(years.iter().zip(points).map(|(&year, (_, ratio))| RatioRow {
                road_name: road.to_string(),
                year,
                ratio,
            }));
        }

        Ok(RatioSeries {
            vehicle_type: self.vehicle_type.clone(),
            start_year: self.start_year,
            end_year: self.end_year,
            rows,
        })
    }
}

/// Free-function form of [`RatioSeriesBuilder`].
pub fn build_ratio_series(
    table: &TrafficTable,
    vehicle_type: &str,
    start_year: i32,
    end_year: i32,
    exclude_years: &[i32],
) -> Result<RatioSeries> {
    RatioSeriesBuilder::new(vehicle_type)
        .years(start_year, end_year)
        .exclude_years(exclude_years.iter().copied())
        .build(table)
}

/// Unguarded division; only 0/0 (NaN) counts as missing.
fn group_ratio(count: f64, total: f64) -> Option<f64> {
    let r = count / total;
    if r.is_nan() { None } else { Some(r) }
}

/// Fill `None` gaps between known values by linear interpolation on `x`.
/// Gaps before the first or after the last known value are left as they are.
pub fn interpolate_linear(points: &mut [(f64, Option<f64>)]) {
    let mut prev: Option<(usize, f64, f64)> = None;
    for i in 0..points.len() {
        let (x1, Some(y1)) = points[i] else { continue };
        if let Some((p, x0, y0)) = prev {
            let span = x1 - x0;
            for gap in &mut points[p + 1..i] {
                gap.1 = Some(y0 + (y1 - y0) * (gap.0 - x0) / span);
            }
        }
        prev = Some((i, x1, y1));
    }
}
