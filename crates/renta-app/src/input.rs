//! Token validators for the input boundary
//!
//! The CLI reads whitespace-delimited tokens and re-prompts until one
//! of these validators accepts.

use renta_types::{Error, Money, Result};

/// Parse an integer token within `lo..=hi`.
pub fn parse_bounded_int(token: &str, lo: i64, hi: i64) -> Result<i64> {
    let value: i64 = token
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("expected a number, got '{}'", token.trim())))?;
    if value < lo || value > hi {
        return Err(Error::InvalidInput(format!(
            "value {} out of range {}..={}",
            value, lo, hi
        )));
    }
    Ok(value)
}

/// Parse a decimal amount token within `lo..=hi`.
pub fn parse_bounded_amount(token: &str, lo: Money, hi: Money) -> Result<Money> {
    let value: Money = token
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("expected an amount, got '{}'", token.trim())))?;
    if value < lo || value > hi {
        return Err(Error::InvalidInput(format!(
            "amount {} out of range {}..={}",
            value, lo, hi
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_int_in_range() {
        assert_eq!(parse_bounded_int("3", 1, 8).unwrap(), 3);
        assert_eq!(parse_bounded_int(" 365 ", 1, 365).unwrap(), 365);
    }

    #[test]
    fn test_int_out_of_range() {
        assert!(matches!(
            parse_bounded_int("0", 1, 8),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_bounded_int("9", 1, 8),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_int_garbage() {
        assert!(matches!(
            parse_bounded_int("three", 1, 8),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_amount_in_range() {
        let amount = parse_bounded_amount("499.99", dec!(0.01), dec!(1000000)).unwrap();
        assert_eq!(amount, dec!(499.99));
    }

    #[test]
    fn test_amount_out_of_range() {
        assert!(matches!(
            parse_bounded_amount("0", dec!(0.01), dec!(1000000)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_amount_garbage() {
        assert!(matches!(
            parse_bounded_amount("lots", dec!(0.01), dec!(1000000)),
            Err(Error::InvalidInput(_))
        ));
    }
}
