// File: crates/traffic-charts/tests/autoscale.rs
// Purpose: Validate autoscale over several line series with gaps.

use traffic_charts::{Chart, Series};

#[test]
fn autoscale_spans_all_known_points() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_gaps("Road A", vec![(2000.0, Some(0.10)), (2001.0, None), (2002.0, Some(0.30))]));
    chart.add_series(Series::with_gaps("Road M", vec![(1999.0, None), (2003.0, Some(0.05))]));

    chart.autoscale_axes(0.0);

    // the absent 1999 point must not stretch the x axis
    assert!((chart.x_axis.min - 2000.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 2003.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 0.05).abs() < 1e-9);
    assert!((chart.y_axis.max - 0.30).abs() < 1e-9);
}

#[test]
fn autoscale_margin_pads_y_only() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("r", vec![(0.0, 0.0), (10.0, 1.0)]));
    chart.autoscale_axes(0.1);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 10.0));
    assert!((chart.y_axis.min + 0.1).abs() < 1e-9);
    assert!((chart.y_axis.max - 1.1).abs() < 1e-9);
}
