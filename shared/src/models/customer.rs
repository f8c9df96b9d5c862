//! Customer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, validate_money, validate_optional_text,
    validate_required_text,
};

/// Address hierarchy: province → city → district → subdistrict
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub province: String,
    pub city: String,
    pub district: String,
    pub subdistrict: String,
    /// Street line
    #[serde(default)]
    pub street: Option<String>,
}

impl Address {
    /// Single-line rendering, most specific part first
    pub fn display_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        if let Some(street) = self.street.as_deref() {
            parts.push(street);
        }
        for part in [
            self.subdistrict.as_str(),
            self.district.as_str(),
            self.city.as_str(),
            self.province.as_str(),
        ] {
            if !part.trim().is_empty() {
                parts.push(part);
            }
        }
        parts.join(", ")
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub merchant_name: String,
    pub category: String,
    pub address: Address,
    /// Credit limit in rupiah
    pub credit_limit: Decimal,
    /// Payment tenor in days
    pub tenor_days: u32,
}

/// Create / update customer payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub merchant_name: String,
    pub category: String,
    pub address: Address,
    pub credit_limit: Decimal,
    pub tenor_days: u32,
}

impl CustomerPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.merchant_name, "merchant_name", MAX_NAME_LEN)?;
        validate_required_text(&self.category, "category", MAX_NAME_LEN)?;
        validate_required_text(&self.address.province, "province", MAX_ADDRESS_LEN)?;
        validate_required_text(&self.address.city, "city", MAX_ADDRESS_LEN)?;
        validate_required_text(&self.address.district, "district", MAX_ADDRESS_LEN)?;
        validate_required_text(&self.address.subdistrict, "subdistrict", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.address.street, "street", MAX_ADDRESS_LEN)?;
        validate_money(self.credit_limit, "credit_limit")?;
        Ok(())
    }
}

impl From<&Customer> for CustomerPayload {
    fn from(customer: &Customer) -> Self {
        Self {
            merchant_name: customer.merchant_name.clone(),
            category: customer.category.clone(),
            address: customer.address.clone(),
            credit_limit: customer.credit_limit,
            tenor_days: customer.tenor_days,
        }
    }
}
