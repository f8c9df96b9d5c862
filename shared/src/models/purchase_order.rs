//! Purchase Order Model
//!
//! A purchase order is created from an existing order and then moves
//! through the delivery state machine:
//!
//! ```text
//! Dipesan ──► Dikirim ──► Terkirim ──► Diterima
//!    │           │            │
//!    └───────────┴────────────┴──────► Dibatalkan
//! ```
//!
//! `Diterima` and `Dibatalkan` are terminal.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::order_money::{self, LineAmounts, PricedLine};
use crate::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

use super::order::{OrderLine, PaymentTerms, check_totals};

/// Purchase order delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    /// Ordered (initial)
    #[default]
    Dipesan,
    /// Shipped: a delivery note has been issued
    Dikirim,
    /// Delivered to the customer's address
    Terkirim,
    /// Received and accepted by the customer
    Diterima,
    /// Cancelled
    Dibatalkan,
}

impl PurchaseOrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Diterima | Self::Dibatalkan)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(&self, next: PurchaseOrderStatus) -> bool {
        use PurchaseOrderStatus::*;
        match (self, next) {
            (Dipesan, Dikirim) | (Dikirim, Terkirim) | (Terkirim, Diterima) => true,
            (current, Dibatalkan) => !current.is_terminal(),
            _ => false,
        }
    }

    /// Validate and return the next status
    pub fn transition_to(&self, next: PurchaseOrderStatus) -> Result<PurchaseOrderStatus, AppError> {
        if self.is_terminal() {
            return Err(AppError::with_message(
                ErrorCode::PurchaseOrderTerminal,
                format!("purchase order is already {self}"),
            ));
        }
        if !self.can_transition_to(next) {
            return Err(AppError::with_message(
                ErrorCode::PurchaseOrderInvalidTransition,
                format!("cannot move purchase order from {self} to {next}"),
            )
            .with_detail("from", self.as_str())
            .with_detail("to", next.as_str()));
        }
        Ok(next)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dipesan => "Dipesan",
            Self::Dikirim => "Dikirim",
            Self::Terkirim => "Terkirim",
            Self::Diterima => "Diterima",
            Self::Dibatalkan => "Dibatalkan",
        }
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line copied from the originating order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    pub variant_id: String,
    pub product_name: String,
    pub variant_type: String,
    pub size: String,
    pub quantity: u32,
    /// Quantity on the originating order; `quantity` may not exceed it
    pub ordered_quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub discount1: Decimal,
    #[serde(default)]
    pub discount2: Decimal,
    pub subtotal: Decimal,
}

impl PurchaseOrderLine {
    /// Copy an order line at its full quantity
    pub fn from_order_line(line: &OrderLine) -> Self {
        Self {
            variant_id: line.variant_id.clone(),
            product_name: line.product_name.clone(),
            variant_type: line.variant_type.clone(),
            size: line.size.clone(),
            quantity: line.quantity,
            ordered_quantity: line.quantity,
            price: line.price,
            discount1: line.discount1,
            discount2: line.discount2,
            subtotal: line.subtotal,
        }
    }

    pub fn check_quantity(&self) -> Result<(), AppError> {
        if self.quantity > self.ordered_quantity {
            return Err(AppError::with_message(
                ErrorCode::PurchaseOrderQuantityExceeded,
                format!(
                    "{} {} {}: quantity {} exceeds ordered {}",
                    self.product_name, self.variant_type, self.size, self.quantity, self.ordered_quantity
                ),
            )
            .with_detail("variant_id", self.variant_id.clone()));
        }
        Ok(())
    }
}

impl PricedLine for PurchaseOrderLine {
    fn amounts(&self) -> LineAmounts {
        LineAmounts {
            price: self.price,
            discount1: self.discount1,
            discount2: self.discount2,
            quantity: self.quantity,
        }
    }
}

/// Purchase order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub order_id: String,
    pub customer_id: String,
    #[serde(default)]
    pub number: String,
    pub lines: Vec<PurchaseOrderLine>,
    pub payment: PaymentTerms,
    pub status: PurchaseOrderStatus,
    #[serde(default)]
    pub cancel_reason: Option<String>,
    pub total: Decimal,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create purchase order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderPayload {
    pub order_id: String,
    pub customer_id: String,
    pub lines: Vec<PurchaseOrderLine>,
    pub payment: PaymentTerms,
    pub total: Decimal,
    pub remaining: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_installment: Option<Decimal>,
    pub status: PurchaseOrderStatus,
}

impl PurchaseOrderPayload {
    /// Guards run before a purchase order is created
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.order_id, "order_id", MAX_SHORT_TEXT_LEN)?;
        if self.customer_id.trim().is_empty() {
            return Err(AppError::new(ErrorCode::OrderCustomerRequired));
        }
        if self.status != PurchaseOrderStatus::Dipesan {
            return Err(AppError::with_message(
                ErrorCode::PurchaseOrderInvalidTransition,
                format!("a new purchase order starts at Dipesan, not {}", self.status),
            ));
        }
        if self.lines.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        for line in &self.lines {
            line.check_quantity()?;
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

/// Status patch body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: PurchaseOrderStatus,
}

/// Cancellation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelPurchaseOrder {
    pub status: PurchaseOrderStatus,
    pub cancel_reason: String,
}

impl CancelPurchaseOrder {
    /// Build a cancellation body; the reason must be non-empty after trimming
    pub fn new(reason: &str) -> Result<Self, AppError> {
        if reason.trim().is_empty() {
            return Err(AppError::new(ErrorCode::CancelReasonRequired));
        }
        validate_required_text(reason, "cancel_reason", MAX_NOTE_LEN)?;
        Ok(Self {
            status: PurchaseOrderStatus::Dibatalkan,
            cancel_reason: reason.trim().to_string(),
        })
    }
}
