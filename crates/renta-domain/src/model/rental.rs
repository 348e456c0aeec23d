//! Rental records

use chrono::{DateTime, Utc};
use renta_types::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One rental as it was struck: vehicle, customer, duration, total.
/// The total is computed once at creation and never recalculated,
/// even if the vehicle's day price changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub id: Uuid,
    pub vehicle_id: String,
    pub customer_id: String,
    pub days: u32,
    pub total: Money,
    pub rented_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(vehicle_id: &str, customer_id: &str, days: u32, total: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id: vehicle_id.to_string(),
            customer_id: customer_id.to_string(),
            days,
            total,
            rented_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Rental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rented by {} for {} days: {} on {}",
            self.vehicle_id,
            self.customer_id,
            self.days,
            self.total,
            self.rented_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
