//! Money calculation for order and purchase-order forms
//!
//! All arithmetic is done in `Decimal` without intermediate rounding.
//! [`round_money`] is applied only when a value is rendered.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::models::PaymentTerms;
use crate::validation::{validate_money, validate_percent};

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: u32 = 9999;

/// Price inputs of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    pub price: Decimal,
    /// Percent, `[0, 100]`
    pub discount1: Decimal,
    /// Percent, applied after `discount1`
    pub discount2: Decimal,
    pub quantity: u32,
}

/// Anything that carries the price inputs of a line
pub trait PricedLine {
    fn amounts(&self) -> LineAmounts;
}

impl PricedLine for LineAmounts {
    fn amounts(&self) -> LineAmounts {
        *self
    }
}

/// Derived values of a form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// One entry per input line, same order
    pub line_subtotals: Vec<Decimal>,
    pub total: Decimal,
    /// `total − down_payment − trade_in`; may be negative
    pub remaining: Decimal,
    /// `floor(term_days / installment_period_days)` for installment payments
    pub installment_count: Option<u32>,
    pub per_installment: Option<Decimal>,
}

fn too_large(what: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ValueOutOfRange,
        format!("{what} is too large to compute"),
    )
}

/// `price × (1 − d1/100) × (1 − d2/100) × quantity`
///
/// Fails with `ValueOutOfRange` when the product does not fit a `Decimal`.
pub fn line_subtotal(line: &impl PricedLine) -> Result<Decimal, AppError> {
    let a = line.amounts();
    let keep = |discount: Decimal| Decimal::ONE.checked_sub(discount / Decimal::ONE_HUNDRED);
    keep(a.discount1)
        .zip(keep(a.discount2))
        .and_then(|(keep1, keep2)| a.price.checked_mul(keep1)?.checked_mul(keep2))
        .and_then(|net| net.checked_mul(Decimal::from(a.quantity)))
        .ok_or_else(|| too_large("line subtotal"))
}

/// Number of installments in a term, `None` when it would be zero
pub fn installment_count(period_days: u32, term_days: u32) -> Option<u32> {
    if period_days == 0 || term_days == 0 {
        return None;
    }
    match term_days / period_days {
        0 => None,
        n => Some(n),
    }
}

/// Recompute every derived value from scratch
///
/// Pure: the same lines and terms always give the same [`Totals`].
pub fn recompute<L: PricedLine>(lines: &[L], payment: &PaymentTerms) -> Result<Totals, AppError> {
    let line_subtotals = lines
        .iter()
        .map(line_subtotal)
        .collect::<Result<Vec<_>, _>>()?;
    let total = line_subtotals
        .iter()
        .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(*s))
        .ok_or_else(|| too_large("total"))?;
    let remaining = total
        .checked_sub(payment.down_payment)
        .and_then(|r| r.checked_sub(payment.trade_in))
        .ok_or_else(|| too_large("remaining"))?;

    let (installment_count, per_installment) = if payment.method.is_installment() {
        let count = installment_count(payment.installment_period_days, payment.term_days);
        (count, count.map(|n| remaining / Decimal::from(n)))
    } else {
        (None, None)
    };

    Ok(Totals {
        line_subtotals,
        total,
        remaining,
        installment_count,
        per_installment,
    })
}

/// Round a monetary value to 2 decimal places for display
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate the price inputs of one line
pub fn validate_line(line: &impl PricedLine) -> Result<(), AppError> {
    let a = line.amounts();
    validate_money(a.price, "price")?;
    validate_percent(a.discount1, "discount1")?;
    validate_percent(a.discount2, "discount2")?;
    if a.quantity == 0 || a.quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("quantity must be between 1 and {MAX_QUANTITY}, got {}", a.quantity),
        ));
    }
    Ok(())
}

/// Validate payment terms
///
/// Installment payments need a positive period and a term at least one
/// period long.
pub fn validate_payment(payment: &PaymentTerms) -> Result<(), AppError> {
    validate_money(payment.down_payment, "down_payment")?;
    validate_money(payment.trade_in, "trade_in")?;
    if payment.method.is_installment()
        && installment_count(payment.installment_period_days, payment.term_days).is_none()
    {
        return Err(AppError::with_message(
            ErrorCode::InvalidInstallmentPlan,
            format!(
                "installment needs a period and a term of at least one period, got period {} days, term {} days",
                payment.installment_period_days, payment.term_days
            ),
        ));
    }
    Ok(())
}
