//! Vehicle catalog

use renta_domain::model::Vehicle;
use renta_types::{Error, Result};

/// Registry of rentable vehicles, keyed by id.
///
/// Backed by a Vec so `list()` reflects catalog insertion order; the
/// fleet is small enough that id lookups scan.
#[derive(Debug, Default)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from snapshot data, re-checking id uniqueness.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut catalog = Self::new();
        for vehicle in vehicles {
            catalog.add(vehicle)?;
        }
        Ok(catalog)
    }

    /// Add a vehicle. Ids are unique within the catalog.
    pub fn add(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicles.iter().any(|v| v.id == vehicle.id) {
            return Err(Error::DuplicateId(vehicle.id));
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Look up a vehicle by exact id.
    pub fn find(&self, id: &str) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::VehicleNotFound(id.to_string()))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::VehicleNotFound(id.to_string()))
    }

    /// All vehicles in catalog insertion order.
    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Flip a vehicle to rented. Renting an already-rented vehicle is
    /// an invalid state.
    pub fn mark_rented(&mut self, id: &str) -> Result<()> {
        let vehicle = self.find_mut(id)?;
        if !vehicle.available {
            return Err(Error::InvalidState(format!(
                "vehicle {} is already rented",
                id
            )));
        }
        vehicle.available = false;
        Ok(())
    }

    /// Flip a vehicle back to available. Returning a vehicle that was
    /// never rented is an invalid state.
    pub fn mark_returned(&mut self, id: &str) -> Result<()> {
        let vehicle = self.find_mut(id)?;
        if vehicle.available {
            return Err(Error::InvalidState(format!(
                "vehicle {} is not currently rented",
                id
            )));
        }
        vehicle.available = true;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn demo_catalog() -> VehicleCatalog {
        let mut catalog = VehicleCatalog::new();
        catalog
            .add(Vehicle::car("C1", "Honda", "Civic", dec!(2000), 5))
            .unwrap();
        catalog
            .add(Vehicle::truck("T1", "Volvo", "VNL", dec!(5000), dec!(10)))
            .unwrap();
        catalog
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = demo_catalog();
        let err = catalog
            .add(Vehicle::bike("C1", "Giant", "Escape", dec!(300)))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == "C1"));
    }

    #[test]
    fn test_find_unknown_id() {
        let catalog = demo_catalog();
        assert!(matches!(
            catalog.find("Z9"),
            Err(Error::VehicleNotFound(_))
        ));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let catalog = demo_catalog();
        let ids: Vec<_> = catalog.list().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["C1", "T1"]);
    }

    #[test]
    fn test_rent_then_return_restores_availability() {
        let mut catalog = demo_catalog();
        catalog.mark_rented("C1").unwrap();
        assert!(!catalog.find("C1").unwrap().available);
        catalog.mark_returned("C1").unwrap();
        assert!(catalog.find("C1").unwrap().available);
    }

    #[test]
    fn test_double_rent_is_invalid_state() {
        let mut catalog = demo_catalog();
        catalog.mark_rented("C1").unwrap();
        assert!(matches!(
            catalog.mark_rented("C1"),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_return_of_available_vehicle_is_invalid_state() {
        let mut catalog = demo_catalog();
        assert!(matches!(
            catalog.mark_returned("T1"),
            Err(Error::InvalidState(_))
        ));
    }
}
