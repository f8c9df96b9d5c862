//! Inventory Model

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};

/// Stock of one product variant at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub product_id: String,
    pub variant_id: String,
    pub location: String,
    pub stock: i64,
}

impl InventoryItem {
    /// Stock after applying `delta`, or an error when it would go below zero
    pub fn stock_after(&self, delta: i64) -> Result<i64, AppError> {
        let next = self.stock.saturating_add(delta);
        if next < 0 {
            return Err(AppError::with_message(
                ErrorCode::InsufficientStock,
                format!(
                    "stock at {} is {}, cannot remove {}",
                    self.location,
                    self.stock,
                    delta.unsigned_abs()
                ),
            ));
        }
        Ok(next)
    }
}

/// Create / update inventory payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPayload {
    pub product_id: String,
    pub variant_id: String,
    pub location: String,
    pub stock: i64,
}

impl InventoryPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.product_id, "product_id", MAX_NAME_LEN)?;
        validate_required_text(&self.variant_id, "variant_id", MAX_NAME_LEN)?;
        validate_required_text(&self.location, "location", MAX_NAME_LEN)?;
        if self.stock < 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "stock must not be negative",
            ));
        }
        Ok(())
    }
}

/// Signed stock adjustment (goods received, sold, corrected)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub delta: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StockAdjustment {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.delta == 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidQuantity,
                "stock adjustment must not be zero",
            ));
        }
        validate_optional_text(&self.note, "note", MAX_NOTE_LEN)
    }
}
