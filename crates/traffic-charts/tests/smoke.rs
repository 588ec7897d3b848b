// File: crates/traffic-charts/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs for all three charts.

mod common;

use traffic_charts::plots::{
    plot_stacked_vehicle_proportions, plot_vehicle_proportion_heatmap, plot_vehicle_ratios, ratio_chart,
};
use traffic_charts::vehicle::vehicle_columns;
use traffic_charts::{vehicle_proportions, Figure, RenderOptions};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn assert_png_file(path: &std::path::Path) {
    let bytes = std::fs::read(path).expect("output exists");
    assert!(bytes.len() > 100, "png should be non-empty");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");
}

#[test]
fn render_ratio_chart_png() {
    let table = common::sample_table();
    let out = std::path::PathBuf::from("target/test_out/smoke_ratios.png");
    let series = plot_vehicle_ratios(&table, "pedal_cycles", 2000, 2005, &[2003], &RenderOptions::default(), &out)
        .expect("render should succeed");
    assert_eq!(series.len(), 6 * 3);
    assert_png_file(&out);

    // Also verify in-memory API works
    let bytes = ratio_chart(&series).render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn render_heatmap_png() {
    let table = common::sample_table();
    let proportions = vehicle_proportions(&table, &vehicle_columns()).unwrap();
    let out = std::path::PathBuf::from("target/test_out/smoke_heatmap.png");
    plot_vehicle_proportion_heatmap(&proportions, Some("Shares"), &RenderOptions::default(), &out)
        .expect("render should succeed");
    assert_png_file(&out);
}

#[test]
fn render_stacked_png() {
    let table = common::sample_table();
    let proportions = vehicle_proportions(&table, &vehicle_columns()).unwrap();
    let out = std::path::PathBuf::from("target/test_out/smoke_stacked.png");
    plot_stacked_vehicle_proportions(&proportions, None, None, None, &RenderOptions::default(), &out)
        .expect("render should succeed");
    assert_png_file(&out);

    // default figure is 12x8 at 100dpi even though the options say 1000x600
    let img = image::open(&out).expect("decode png");
    assert_eq!((img.width(), img.height()), (1200, 800));
}

#[test]
fn render_stacked_png_with_explicit_size() {
    let table = common::sample_table();
    let proportions = vehicle_proportions(&table, &vehicle_columns()).unwrap();
    let out = std::path::PathBuf::from("target/test_out/smoke_stacked_small.png");
    plot_stacked_vehicle_proportions(&proportions, None, None, Some((640, 480)), &RenderOptions::default(), &out)
        .expect("render should succeed");
    let img = image::open(&out).expect("decode png");
    assert_eq!((img.width(), img.height()), (640, 480));
}

#[test]
fn render_ratio_chart_with_no_roads() {
    let table = traffic_charts::TrafficTable::from_records(&[]);
    let out = std::path::PathBuf::from("target/test_out/smoke_empty.png");
    let series = plot_vehicle_ratios(&table, "lgvs", 2000, 2005, &[], &RenderOptions::default(), &out)
        .expect("empty data still renders axes");
    assert!(series.is_empty());
    assert_png_file(&out);
}
