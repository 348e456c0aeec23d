//! Vehicle fleet types

use renta_types::Money;
use serde::{Deserialize, Serialize};

/// Kind-specific data carried by a vehicle. Closed set; pricing
/// dispatches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VehicleKind {
    Car { seats: u32 },
    Truck { load_capacity_tons: Money },
    Bike,
}

/// A rentable vehicle. The id is unique within the catalog and never
/// changes; only `available` is mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub base_price_per_day: Money,
    pub available: bool,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn car(id: &str, make: &str, model: &str, base_price_per_day: Money, seats: u32) -> Self {
        Self::new(id, make, model, base_price_per_day, VehicleKind::Car { seats })
    }

    pub fn truck(
        id: &str,
        make: &str,
        model: &str,
        base_price_per_day: Money,
        load_capacity_tons: Money,
    ) -> Self {
        Self::new(
            id,
            make,
            model,
            base_price_per_day,
            VehicleKind::Truck { load_capacity_tons },
        )
    }

    pub fn bike(id: &str, make: &str, model: &str, base_price_per_day: Money) -> Self {
        Self::new(id, make, model, base_price_per_day, VehicleKind::Bike)
    }

    fn new(id: &str, make: &str, model: &str, base_price_per_day: Money, kind: VehicleKind) -> Self {
        Self {
            id: id.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            base_price_per_day,
            available: true,
            kind,
        }
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {} - {}/day ({})",
            self.id,
            self.make,
            self.model,
            self.base_price_per_day,
            if self.available { "Available" } else { "Rented" }
        )?;
        match self.kind {
            VehicleKind::Car { seats } => write!(f, " - {} seats", seats),
            VehicleKind::Truck { load_capacity_tons } => {
                write!(f, " - {} ton capacity", load_capacity_tons)
            }
            VehicleKind::Bike => Ok(()),
        }
    }
}
