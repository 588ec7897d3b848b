// File: crates/traffic-charts/tests/common/mod.rs
// Purpose: Small deterministic traffic table shared by the integration tests.

use traffic_charts::{TrafficRecord, TrafficTable, VehicleType};

/// Three road types over 2000..=2005; road "B" has no 2002 row.
pub fn sample_table() -> TrafficTable {
    let shares = [0.02, 0.01, 0.75, 0.01, 0.15, 0.06];
    let mut records = Vec::new();
    for (k, road) in ["A", "B", "M"].into_iter().enumerate() {
        for year in 2000..=2005 {
            if road == "B" && year == 2002 { continue; }
            let total = 1_000.0 + 10.0 * (year - 2000) as f64 + 100.0 * k as f64;
            let mut rec = TrafficRecord::new(road, year, total);
            for (vehicle, share) in VehicleType::ALL.into_iter().zip(shares) {
                let skew = 1.0 + 0.1 * k as f64 - 0.02 * (year - 2000) as f64;
                rec = rec.with_count(vehicle, (total * share * skew).round());
            }
            records.push(rec);
        }
    }
    TrafficTable::from_records(&records)
}
