//! Delivery Note Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text};

/// Delivery note (surat jalan) issued for a purchase order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryNote {
    pub id: String,
    pub purchase_order_id: String,
    pub number: String,
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancelled: bool,
}

/// Create delivery note payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryNotePayload {
    pub purchase_order_id: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DeliveryNotePayload {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.purchase_order_id, "purchase_order_id", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.number, "number", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.driver, "driver", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.note, "note", MAX_NOTE_LEN)
    }
}

/// Whether any non-cancelled note exists for `purchase_order_id`
pub fn has_active_note(notes: &[DeliveryNote], purchase_order_id: &str) -> bool {
    notes
        .iter()
        .any(|n| n.purchase_order_id == purchase_order_id && !n.cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(po: &str, cancelled: bool) -> DeliveryNote {
        DeliveryNote {
            id: format!("dn-{po}"),
            purchase_order_id: po.into(),
            number: "SJ-001".into(),
            driver: None,
            note: None,
            issued_at: None,
            cancelled,
        }
    }

    #[test]
    fn test_has_active_note() {
        assert!(!has_active_note(&[], "po-1"));
        assert!(!has_active_note(&[note("po-1", true)], "po-1"));
        assert!(!has_active_note(&[note("po-2", false)], "po-1"));
        assert!(has_active_note(&[note("po-1", true), note("po-1", false)], "po-1"));
    }

    #[test]
    fn test_payload_requires_number() {
        let payload = DeliveryNotePayload {
            purchase_order_id: "po-1".into(),
            number: "".into(),
            driver: None,
            note: None,
        };
        assert!(payload.validate().is_err());
    }
}
