//! Per-kind rental pricing

use renta_types::{Error, Money, Result, MAX_RENTAL_DAYS};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::model::{Vehicle, VehicleKind};

/// Quote the total price for renting `vehicle` for `days` days.
///
/// Cars with more than 4 seats get a 5% discount, trucks pay a
/// surcharge proportional to load capacity, bikes ride on the base
/// price. Deterministic, no side effects. Totals are rounded to two
/// decimal places, half away from zero.
pub fn quote(vehicle: &Vehicle, days: u32) -> Result<Money> {
    if days == 0 || days > MAX_RENTAL_DAYS {
        return Err(Error::InvalidArgument(format!(
            "rental days must be between 1 and {}, got {}",
            MAX_RENTAL_DAYS, days
        )));
    }

    let days = Decimal::from(days);
    let base = vehicle.base_price_per_day;
    let total = match vehicle.kind {
        VehicleKind::Car { seats } => {
            let seat_factor = if seats > 4 { dec!(0.95) } else { Decimal::ONE };
            days * base * seat_factor
        }
        VehicleKind::Truck { load_capacity_tons } => {
            let load_factor = Decimal::ONE + load_capacity_tons / dec!(100);
            days * base * load_factor
        }
        VehicleKind::Bike => days * base,
    };

    Ok(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civic() -> Vehicle {
        Vehicle::car("C1", "Honda", "Civic", dec!(2000), 5)
    }

    fn kei_car() -> Vehicle {
        Vehicle::car("C2", "Suzuki", "Alto", dec!(1200), 4)
    }

    fn volvo_truck() -> Vehicle {
        Vehicle::truck("T1", "Volvo", "VNL", dec!(5000), dec!(10))
    }

    fn city_bike() -> Vehicle {
        Vehicle::bike("B1", "Giant", "Escape", dec!(300))
    }

    #[test]
    fn test_car_seat_discount() {
        let total = quote(&civic(), 3).unwrap();
        assert_eq!(total, dec!(5700.00));
    }

    #[test]
    fn test_car_without_discount() {
        let total = quote(&kei_car(), 3).unwrap();
        assert_eq!(total, dec!(3600.00));
    }

    #[test]
    fn test_truck_load_surcharge() {
        let total = quote(&volvo_truck(), 2).unwrap();
        assert_eq!(total, dec!(11000.00));
    }

    #[test]
    fn test_bike_base_price() {
        let total = quote(&city_bike(), 7).unwrap();
        assert_eq!(total, dec!(2100.00));
    }

    #[test]
    fn test_zero_days_rejected() {
        assert!(matches!(
            quote(&civic(), 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_days_over_limit_rejected() {
        assert!(matches!(
            quote(&civic(), MAX_RENTAL_DAYS + 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_monotonic_in_days() {
        for vehicle in [civic(), kei_car(), volvo_truck(), city_bike()] {
            let mut previous = Money::ZERO;
            for days in 1..=30 {
                let total = quote(&vehicle, days).unwrap();
                assert!(total >= previous, "{} at {} days", vehicle.id, days);
                previous = total;
            }
        }
    }
}
