// File: crates/traffic-charts/src/lib.rs
// Summary: Library entry point; traffic tables, ratio aggregation and chart rendering.

pub mod error;
pub mod vehicle;
pub mod table;
pub mod ratio;
pub mod proportion;
pub mod chart;
pub mod heatmap;
pub mod stacked;
pub mod plots;
pub mod figure;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod view;
pub mod theme;
pub mod text;
pub mod colormap;

pub use error::{ChartError, Result};
pub use vehicle::VehicleType;
pub use table::{TrafficRecord, TrafficTable};
pub use ratio::{build_ratio_series, RatioRow, RatioSeries, RatioSeriesBuilder};
pub use proportion::{vehicle_proportions, ProportionTable};
pub use chart::Chart;
pub use heatmap::HeatmapChart;
pub use stacked::StackedBarChart;
pub use figure::{Figure, RenderOptions};
pub use series::{Marker, Series};
pub use axis::{Axis, TickFormat};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use colormap::Colormap;
pub use plots::{plot_stacked_vehicle_proportions, plot_vehicle_proportion_heatmap, plot_vehicle_ratios};
