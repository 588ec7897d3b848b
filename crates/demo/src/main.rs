// File: crates/demo/src/main.rs
// Summary: Demo builds a synthetic traffic table and renders the heatmap, ratio lines and stacked bars to PNGs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use traffic_charts::plots::{plot_stacked_vehicle_proportions, plot_vehicle_proportion_heatmap, plot_vehicle_ratios};
use traffic_charts::theme;
use traffic_charts::vehicle::vehicle_columns;
use traffic_charts::{vehicle_proportions, RenderOptions, TrafficRecord, TrafficTable, VehicleType};

#[derive(Debug, Parser)]
#[command(name = "traffic-demo", about = "Render traffic proportion charts from a synthetic dataset")]
struct Args {
    /// Directory the PNGs are written to.
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    /// Vehicle count column plotted as a yearly ratio.
    #[arg(long, default_value = "pedal_cycles")]
    vehicle_type: String,
    #[arg(long, default_value_t = 2000)]
    start_year: i32,
    #[arg(long, default_value_t = 2023)]
    end_year: i32,
    /// Years whose ratio is discarded and interpolated (repeatable).
    #[arg(long = "exclude-year")]
    exclude_years: Vec<i32>,
    /// Theme preset: light, dark or high-contrast-dark.
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if VehicleType::from_column(&args.vehicle_type).is_none() {
        warn!("'{}' is not one of the known vehicle columns", args.vehicle_type);
    }

    let records = synthetic_records(args.start_year, args.end_year);
    let table = TrafficTable::from_records(&records);
    info!("synthetic table: {} rows", table.len());

    let opts = RenderOptions::default().with_theme(theme::find(&args.theme));

    let proportions = vehicle_proportions(&table, &vehicle_columns())
        .context("aggregating vehicle proportions")?;

    let out_heat = args.out_dir.join("heatmap.png");
    plot_vehicle_proportion_heatmap(&proportions, None, &opts, &out_heat)
        .with_context(|| format!("rendering {}", out_heat.display()))?;
    println!("Wrote {}", out_heat.display());

    let out_lines = args.out_dir.join(format!("ratios_{}.png", args.vehicle_type));
    let series = plot_vehicle_ratios(
        &table,
        &args.vehicle_type,
        args.start_year,
        args.end_year,
        &args.exclude_years,
        &opts,
        &out_lines,
    )
    .with_context(|| format!("rendering {}", out_lines.display()))?;
    println!("Wrote {} ({} points)", out_lines.display(), series.len());

    let out_stacked = args.out_dir.join("stacked.png");
    plot_stacked_vehicle_proportions(&proportions, None, None, None, &opts, &out_stacked)
        .with_context(|| format!("rendering {}", out_stacked.display()))?;
    println!("Wrote {}", out_stacked.display());

    Ok(())
}

/// Deterministic counts for four road types; road B has no 2020 survey so the ratio chart shows a gap fill.
fn synthetic_records(start_year: i32, end_year: i32) -> Vec<TrafficRecord> {
    let roads: [(&str, [f64; 6]); 4] = [
        ("A", [0.012, 0.006, 0.78, 0.009, 0.14, 0.053]),
        ("B", [0.021, 0.008, 0.81, 0.007, 0.12, 0.034]),
        ("C", [0.034, 0.009, 0.82, 0.004, 0.11, 0.023]),
        ("M", [0.001, 0.004, 0.72, 0.006, 0.16, 0.109]),
    ];
    let mut out = Vec::new();
    for (road, shares) in roads {
        for year in start_year..=end_year {
            if road == "B" && year == 2020 { continue; }
            let t = (year - start_year) as f64;
            let total = 100_000.0 + 1_500.0 * t;
            let mut rec = TrafficRecord::new(road, year, total);
            for (vehicle, share) in VehicleType::ALL.into_iter().zip(shares) {
                // small yearly drift so the lines are not flat
                let drift = 1.0 + 0.01 * (t * 0.7).sin();
                rec = rec.with_count(vehicle, (total * share * drift).round());
            }
            out.push(rec);
        }
    }
    out
}
