//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::order_money::{self, LineAmounts, PricedLine, Totals};

/// How the customer pays for an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in full
    #[default]
    Cash,
    /// Paid in full through a leasing company
    CashLeasing,
    /// Paid in installments over a term
    Installment,
}

impl PaymentMethod {
    pub fn is_installment(&self) -> bool {
        matches!(self, Self::Installment)
    }
}

/// Payment parameters of an order
///
/// `installment_period_days` and `term_days` only matter for
/// [`PaymentMethod::Installment`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub method: PaymentMethod,
    #[serde(default)]
    pub down_payment: Decimal,
    /// Value of goods traded in by the customer
    #[serde(default)]
    pub trade_in: Decimal,
    /// Days between two installments
    #[serde(default)]
    pub installment_period_days: u32,
    /// Total installment term in days
    #[serde(default)]
    pub term_days: u32,
}

/// Order line (product variant + quantity + price + two discounts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub variant_id: String,
    pub product_name: String,
    pub variant_type: String,
    pub size: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub discount1: Decimal,
    #[serde(default)]
    pub discount2: Decimal,
    /// Unrounded `price × (1 − d1/100) × (1 − d2/100) × quantity`
    pub subtotal: Decimal,
}

impl PricedLine for OrderLine {
    fn amounts(&self) -> LineAmounts {
        LineAmounts {
            price: self.price,
            discount1: self.discount1,
            discount2: self.discount2,
            quantity: self.quantity,
        }
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub payment: PaymentTerms,
    pub total: Decimal,
    #[serde(default)]
    pub remaining: Decimal,
    #[serde(default)]
    pub per_installment: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Line inside a create / update order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLinePayload {
    pub variant_id: String,
    pub quantity: u32,
    pub price: Decimal,
    pub discount1: Decimal,
    pub discount2: Decimal,
    pub subtotal: Decimal,
}

impl PricedLine for OrderLinePayload {
    fn amounts(&self) -> LineAmounts {
        LineAmounts {
            price: self.price,
            discount1: self.discount1,
            discount2: self.discount2,
            quantity: self.quantity,
        }
    }
}

/// Create / update order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer_id: String,
    pub lines: Vec<OrderLinePayload>,
    pub payment: PaymentTerms,
    pub total: Decimal,
    pub remaining: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_installment: Option<Decimal>,
}

impl OrderPayload {
    /// Guards run before an order is submitted
    pub fn validate(&self) -> Result<(), AppError> {
        if self.customer_id.trim().is_empty() {
            return Err(AppError::new(ErrorCode::OrderCustomerRequired));
        }
        if self.lines.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        for line in &self.lines {
            order_money::validate_line(line)?;
        }
        order_money::validate_payment(&self.payment)?;
        check_totals(
            &order_money::recompute(&self.lines, &self.payment)?,
            &self.lines.iter().map(|l| l.subtotal).collect::<Vec<_>>(),
            self.total,
            self.remaining,
            self.per_installment,
        )
    }
}

/// Reject derived values that do not match a fresh recomputation
pub(crate) fn check_totals(
    fresh: &Totals,
    subtotals: &[Decimal],
    total: Decimal,
    remaining: Decimal,
    per_installment: Option<Decimal>,
) -> Result<(), AppError> {
    let stale = fresh.line_subtotals.as_slice() != subtotals
        || fresh.total != total
        || fresh.remaining != remaining
        || fresh.per_installment != per_installment;
    if stale {
        return Err(AppError::validation(
            "order totals are out of date, recompute before submitting",
        )
        .with_detail("expected_total", fresh.total.to_string())
        .with_detail("submitted_total", total.to_string()));
    }
    Ok(())
}
