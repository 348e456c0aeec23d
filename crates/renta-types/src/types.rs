//! Shared scalar types

/// Monetary amount. Decimal end to end so repeated pricing math
/// stays exact.
pub type Money = rust_decimal::Decimal;

/// Longest rental the desk will quote, in days.
pub const MAX_RENTAL_DAYS: u32 = 365;
