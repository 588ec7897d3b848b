// File: crates/traffic-charts/src/vehicle.rs
// Summary: Fixed vehicle categories with their column names and display labels.

/// Column holding the all-vehicle count every ratio is taken against.
pub const TOTAL_VEHICLES: &str = "total_vehicles";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleType {
    PedalCycles,
    TwoWheeledMotorVehicles,
    CarsAndTaxis,
    BusesAndCoaches,
    Lgvs,
    AllHgvs,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::PedalCycles,
        VehicleType::TwoWheeledMotorVehicles,
        VehicleType::CarsAndTaxis,
        VehicleType::BusesAndCoaches,
        VehicleType::Lgvs,
        VehicleType::AllHgvs,
    ];

    /// Count column name in a [`crate::TrafficTable`].
    pub const fn column(self) -> &'static str {
        match self {
            VehicleType::PedalCycles => "pedal_cycles",
            VehicleType::TwoWheeledMotorVehicles => "two_wheeled_motor_vehicles",
            VehicleType::CarsAndTaxis => "cars_and_taxis",
            VehicleType::BusesAndCoaches => "buses_and_coaches",
            VehicleType::Lgvs => "lgvs",
            VehicleType::AllHgvs => "all_hgvs",
        }
    }

    /// Proportion column name in a [`crate::ProportionTable`].
    pub const fn ratio_column(self) -> &'static str {
        match self {
            VehicleType::PedalCycles => "pedal_cycles_ratio",
            VehicleType::TwoWheeledMotorVehicles => "two_wheeled_motor_vehicles_ratio",
            VehicleType::CarsAndTaxis => "cars_and_taxis_ratio",
            VehicleType::BusesAndCoaches => "buses_and_coaches_ratio",
            VehicleType::Lgvs => "lgvs_ratio",
            VehicleType::AllHgvs => "all_hgvs_ratio",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            VehicleType::PedalCycles => "Pedal Cycles",
            VehicleType::TwoWheeledMotorVehicles => "Two-Wheeled Motor Vehicles",
            VehicleType::CarsAndTaxis => "Cars and Taxis",
            VehicleType::BusesAndCoaches => "Buses and Coaches",
            VehicleType::Lgvs => "LGVs",
            VehicleType::AllHgvs => "All HGVs",
        }
    }

    /// Find a vehicle type by its count column name.
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.column() == name)
    }
}

/// Count column names of every vehicle type, in display order.
pub fn vehicle_columns() -> Vec<&'static str> {
    VehicleType::ALL.iter().map(|v| v.column()).collect()
}

/// Default proportion columns consumed by the stacked bar chart.
pub fn ratio_columns() -> Vec<&'static str> {
    VehicleType::ALL.iter().map(|v| v.ratio_column()).collect()
}

/// Default axis labels of the heatmap's vehicle axis.
pub fn vehicle_labels() -> Vec<&'static str> {
    VehicleType::ALL.iter().map(|v| v.label()).collect()
}
