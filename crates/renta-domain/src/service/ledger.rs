//! Rental history operations
//!
//! A customer's history is an append-only sequence of rentals in
//! creation order. Sorting reorders in place by timestamp; closing a
//! rental never removes it.

use crate::model::Rental;

/// Append a rental to the end of a history.
pub fn append(history: &mut Vec<Rental>, rental: Rental) {
    history.push(rental);
}

/// Sort a history ascending by creation timestamp, in place. Stable
/// for equal timestamps, so repeated sorts are idempotent.
pub fn sort_by_date(history: &mut [Rental]) {
    history.sort_by_key(|rental| rental.rented_at);
}

/// Last rental by current ordering, if any.
pub fn latest(history: &[Rental]) -> Option<&Rental> {
    history.last()
}

/// Most recent rental of the given vehicle, scanning from the end.
pub fn latest_for_vehicle<'a>(history: &'a [Rental], vehicle_id: &str) -> Option<&'a Rental> {
    history.iter().rev().find(|rental| rental.vehicle_id == vehicle_id)
}
