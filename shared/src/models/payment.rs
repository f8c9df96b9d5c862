//! Payment Record Model
//!
//! Payment and verification are separate steps: a record counts toward the
//! paid total only once it is both paid and confirmed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::validation::{MAX_NOTE_LEN, validate_optional_text};

/// Payment record belonging to a purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub purchase_order_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: Option<String>,
}

impl PaymentRecord {
    pub fn counts_toward_paid(&self) -> bool {
        self.is_paid && self.is_confirmed
    }

    /// Guard for the confirmation step
    pub fn check_confirmable(&self) -> Result<(), AppError> {
        if self.is_confirmed {
            return Err(AppError::new(ErrorCode::PaymentAlreadyConfirmed));
        }
        if !self.is_paid {
            return Err(AppError::new(ErrorCode::PaymentNotPaid));
        }
        Ok(())
    }
}

/// Create payment record payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub purchase_order_id: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.amount <= Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::PaymentInvalidAmount,
                format!("payment amount must be positive, got {}", self.amount),
            ));
        }
        validate_optional_text(&self.note, "note", MAX_NOTE_LEN)
    }
}

/// Sum of records that are both paid and confirmed
pub fn paid_total(records: &[PaymentRecord]) -> Decimal {
    records
        .iter()
        .filter(|r| r.counts_toward_paid())
        .map(|r| r.amount)
        .sum()
}

/// What is still owed on `total` after counted payments
pub fn outstanding(total: Decimal, records: &[PaymentRecord]) -> Decimal {
    total - paid_total(records)
}
