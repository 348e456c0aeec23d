//! Loan balance rules
//!
//! Balances live on `Customer`; these functions hold the arithmetic
//! and the invariants (no negative balances, transfers conserve the
//! total). Granting a loan performs no credit check, matching the
//! desk's demo behavior.

use renta_types::{Error, Money, Result};

/// Reject non-positive loan amounts.
pub fn validate_amount(amount: Money) -> Result<()> {
    if amount <= Money::ZERO {
        return Err(Error::InvalidArgument(format!(
            "loan amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

/// Credit `amount` to `balance`, unconditionally.
pub fn credit(balance: Money, amount: Money) -> Result<Money> {
    validate_amount(amount)?;
    Ok(balance + amount)
}

/// Move `amount` from one balance to the other. Fails with
/// `InsufficientFunds` before touching either side.
pub fn transfer(from: Money, to: Money, amount: Money) -> Result<(Money, Money)> {
    validate_amount(amount)?;
    if amount > from {
        return Err(Error::InsufficientFunds {
            requested: amount,
            available: from,
        });
    }
    Ok((from - amount, to + amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_increases_balance() {
        let balance = credit(Money::ZERO, dec!(1000)).unwrap();
        assert_eq!(balance, dec!(1000));
    }

    #[test]
    fn test_credit_rejects_zero() {
        assert!(matches!(
            credit(Money::ZERO, Money::ZERO),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_credit_rejects_negative() {
        assert!(matches!(
            credit(dec!(500), dec!(-1)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_transfer_conserves_total() {
        let (from, to) = transfer(dec!(1000), Money::ZERO, dec!(400)).unwrap();
        assert_eq!(from, dec!(600));
        assert_eq!(to, dec!(400));
        assert_eq!(from + to, dec!(1000));
    }

    #[test]
    fn test_transfer_entire_balance() {
        let (from, to) = transfer(dec!(250), dec!(50), dec!(250)).unwrap();
        assert_eq!(from, Money::ZERO);
        assert_eq!(to, dec!(300));
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let err = transfer(dec!(100), Money::ZERO, dec!(101)).unwrap_err();
        match err {
            Error::InsufficientFunds { requested, available } => {
                assert_eq!(requested, dec!(101));
                assert_eq!(available, dec!(100));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
