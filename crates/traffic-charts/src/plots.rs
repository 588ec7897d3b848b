// File: crates/traffic-charts/src/plots.rs
// Summary: One-call helpers that aggregate, build a figure and save it as PNG.

use std::path::Path;

use log::info;

use crate::axis::{Axis, TickFormat};
use crate::chart::Chart;
use crate::error::Result;
use crate::figure::{Figure, RenderOptions};
use crate::heatmap::{HeatmapChart, DEFAULT_HEATMAP_TITLE};
use crate::proportion::ProportionTable;
use crate::ratio::{RatioSeries, RatioSeriesBuilder};
use crate::stacked::{StackedBarChart, DEFAULT_STACKED_TITLE, STACKED_HEIGHT, STACKED_WIDTH};
use crate::table::TrafficTable;
use crate::vehicle::{ratio_columns, vehicle_labels};

/// Upper-case the first character and lower-case the rest ("cars_and_taxis" -> "Cars_and_taxis").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Heatmap of `data` with the six vehicle-type labels on the column axis.
pub fn plot_vehicle_proportion_heatmap(
    data: &ProportionTable,
    title: Option<&str>,
    opts: &RenderOptions,
    out: impl AsRef<Path>,
) -> Result<()> {
    let chart = HeatmapChart::from_table(data, &vehicle_labels())?
        .with_title(title.unwrap_or(DEFAULT_HEATMAP_TITLE));
    chart.render_to_png(opts, &out)?;
    info!("heatmap written to {}", out.as_ref().display());
    Ok(())
}

/// Line chart of the yearly `vehicle_type` ratio per road type.
pub fn ratio_chart(series: &RatioSeries) -> Chart {
    let name = capitalize(&series.vehicle_type);
    let mut chart = Chart::new().with_title(format!("Yearly Changes in {name} Ratios by Road Type"));
    for s in series.to_series() {
        chart.add_series(s);
    }
    chart.x_axis = Axis::new("Year", 0.0, 1.0).with_format(TickFormat::Integer);
    chart.y_axis = Axis::new(format!("{name} Ratio"), 0.0, 1.0);
    chart.legend_title = Some("Road Type".to_string());
    chart.autoscale_axes(0.05);
    chart
}

/// Build the ratio series for `vehicle_type` and save its line chart.
/// Returns the series that was plotted.
pub fn plot_vehicle_ratios(
    table: &TrafficTable,
    vehicle_type: &str,
    start_year: i32,
    end_year: i32,
    exclude_years: &[i32],
    opts: &RenderOptions,
    out: impl AsRef<Path>,
) -> Result<RatioSeries> {
    let series = RatioSeriesBuilder::new(vehicle_type)
        .years(start_year, end_year)
        .exclude_years(exclude_years.iter().copied())
        .build(table)?;
    ratio_chart(&series).render_to_png(opts, &out)?;
    info!("ratio chart for '{vehicle_type}' written to {}", out.as_ref().display());
    Ok(series)
}

/// Stacked bars of the given proportion columns (default: the six `<vehicle>_ratio` columns).
///
/// `size` is the figure size in pixels; `None` means 1200x800 regardless of `opts`.
pub fn plot_stacked_vehicle_proportions(
    data: &ProportionTable,
    columns: Option<&[&str]>,
    title: Option<&str>,
    size: Option<(i32, i32)>,
    opts: &RenderOptions,
    out: impl AsRef<Path>,
) -> Result<()> {
    let defaults = ratio_columns();
    let columns = columns.unwrap_or(&defaults);
    let chart = StackedBarChart::from_table(data, columns)?
        .with_title(title.unwrap_or(DEFAULT_STACKED_TITLE));
    let (width, height) = size.unwrap_or((STACKED_WIDTH, STACKED_HEIGHT));
    chart.render_to_png(&opts.clone().with_size(width, height), &out)?;
    info!("stacked bar chart written to {}", out.as_ref().display());
    Ok(())
}
