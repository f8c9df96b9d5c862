//! Input validation helpers
//!
//! Centralized text length constants and the guards run before a payload is
//! sent to the admin API.

use rust_decimal::Decimal;

use crate::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: merchant, product, category, location, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, cancellation reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: product code, variant type, size, document number
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Address parts (province, city, district, subdistrict, street)
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Money limits ────────────────────────────────────────────────────

/// Upper bound of any single money input (price, down payment, credit limit)
pub const MAX_MONEY: i64 = 1_000_000_000_000_000;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Validate a money amount is not negative.
pub fn validate_non_negative(value: Decimal, field: &str) -> Result<(), AppError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a money amount lies in `[0, MAX_MONEY]`.
pub fn validate_money(value: Decimal, field: &str) -> Result<(), AppError> {
    validate_non_negative(value, field)?;
    if value > Decimal::from(MAX_MONEY) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not exceed {MAX_MONEY}, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a discount percentage lies in `[0, 100]`.
pub fn validate_percent(value: Decimal, field: &str) -> Result<(), AppError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(AppError::with_message(
            ErrorCode::InvalidDiscount,
            format!("{field} must be between 0 and 100, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Toko Jati", "merchant_name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "merchant_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_required_text(&long, "code", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_percent_bounds() {
        assert!(validate_percent(dec!(0), "discount1").is_ok());
        assert!(validate_percent(dec!(100), "discount1").is_ok());
        assert!(validate_percent(dec!(12.5), "discount1").is_ok());
        assert_eq!(
            validate_percent(dec!(100.01), "discount1").unwrap_err().code,
            ErrorCode::InvalidDiscount
        );
        assert!(validate_percent(dec!(-1), "discount2").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative(dec!(0), "price").is_ok());
        assert!(validate_non_negative(dec!(-0.00), "price").is_ok());
        assert!(validate_non_negative(dec!(-0.01), "price").is_err());
    }

    #[test]
    fn test_money_upper_bound() {
        assert!(validate_money(Decimal::from(MAX_MONEY), "price").is_ok());
        let err = validate_money(Decimal::from(MAX_MONEY) + dec!(0.01), "price").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        let err = validate_money(dec!(10000000000000000000000000000), "price").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(validate_money(dec!(-1), "price").is_err());
    }
}
