//! # Input Validator
//!
//! Per-operation field checks that run before any store call. The first
//! failing check aborts the operation with [`PriceError::InvalidInput`].
//!
//! The validator only decides whether a raw string is acceptable. It never
//! rewrites input: the raw string is what gets bound to the procedure.
//! The `ids` list is not validated here, the store owns id existence.

use crate::operations::{Field, OperationRequest, PriceError};

/// Runs every check required by the request's operation, in order.
///
/// `price` is checked before `sku`.
pub fn validate(request: &OperationRequest) -> Result<(), PriceError> {
    if let Some(price) = request.price() {
        validate_price(price)?;
    }
    if let Some(sku) = request.sku() {
        validate_sku(sku)?;
    }
    Ok(())
}

/// Accepts a finite decimal literal: optional sign, digits with an optional
/// fraction (or a bare fraction such as `.5`), optional exponent.
/// Surrounding whitespace is tolerated.
pub fn validate_price(raw: &str) -> Result<(), PriceError> {
    if is_decimal(raw.trim()) {
        Ok(())
    } else {
        Err(PriceError::invalid_input(Field::Price, raw))
    }
}

/// Accepts an optionally signed integer of any length.
/// Surrounding whitespace is tolerated.
pub fn validate_sku(raw: &str) -> Result<(), PriceError> {
    if is_integer(raw.trim()) {
        Ok(())
    } else {
        Err(PriceError::invalid_input(Field::Sku, raw))
    }
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer(s: &str) -> bool {
    all_digits(strip_sign(s))
}

fn is_decimal(s: &str) -> bool {
    let unsigned = strip_sign(s);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            (int.is_empty() || all_digits(int))
                && (frac.is_empty() || all_digits(frac))
                && !(int.is_empty() && frac.is_empty())
        }
        None => all_digits(mantissa),
    };

    mantissa_ok && exponent.map_or(true, is_integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_decimal_literals() {
        for raw in ["19.99", "0", "-3", "+4.50", ".5", "5.", "1e3", "2.5E-2", " 7.25 ", "00012"] {
            assert!(validate_price(raw).is_ok(), "expected {raw:?} to be accepted");
        }
    }

    #[test]
    fn test_rejects_non_decimal_price() {
        for raw in ["abc", "", " ", "12.3.4", ".", "-", "1e", "e5", "1,5", "$5", "NaN", "Infinity", "1_000", "0x10"] {
            assert_eq!(
                validate_price(raw),
                Err(PriceError::invalid_input(Field::Price, raw)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_sku_must_be_integer() {
        assert!(validate_sku("123").is_ok());
        assert!(validate_sku(" -9 ").is_ok());
        assert!(validate_sku("123456789012345678901234567890").is_ok());
        for raw in ["12a", "", "1.0", "+", "1 2"] {
            assert_eq!(validate_sku(raw), Err(PriceError::invalid_input(Field::Sku, raw)));
        }
    }

    #[test]
    fn test_price_checked_before_sku() {
        let request = OperationRequest::Insert {
            sku: "12a".into(),
            price: "abc".into(),
        };
        assert_eq!(validate(&request), Err(PriceError::invalid_input(Field::Price, "abc")));

        let request = OperationRequest::Insert {
            sku: "12a".into(),
            price: "1.00".into(),
        };
        assert_eq!(validate(&request), Err(PriceError::invalid_input(Field::Sku, "12a")));
    }

    #[test]
    fn test_ids_are_not_validated() {
        let request = OperationRequest::Delete {
            ids: "not, really; ids".into(),
        };
        assert!(validate(&request).is_ok());
    }
}
