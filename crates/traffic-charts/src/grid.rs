// File: crates/traffic-charts/src/grid.rs
// Summary: Tick layout helpers.

/// Round tick positions covering [min, max] with roughly `target` ticks.
/// Steps are 1, 2, 2.5 or 5 times a power of ten; only ticks inside the range are returned.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || target == 0 { return Vec::new(); }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if span < 1e-12 { return vec![lo]; }

    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        // tame float noise like 0.30000000000000004
        .map(|v| (v / step).round() * step)
        .collect()
}
