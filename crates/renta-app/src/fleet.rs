//! Demo fleet seed data

use renta_domain::model::Vehicle;
use renta_store::VehicleCatalog;
use renta_types::Result;
use rust_decimal_macros::dec;

/// The fixed fleet the desk starts with when no snapshot exists.
pub fn demo_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::car("C1", "Honda", "Civic", dec!(2000), 5),
        Vehicle::car("C2", "Suzuki", "Alto", dec!(1200), 4),
        Vehicle::truck("T1", "Volvo", "VNL", dec!(5000), dec!(10)),
        Vehicle::bike("B1", "Giant", "Escape", dec!(300)),
    ]
}

/// Build a catalog seeded with the demo fleet.
pub fn seed_catalog() -> Result<VehicleCatalog> {
    VehicleCatalog::from_vehicles(demo_fleet())
}
