//! Product Model

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::order_money::{self, LineAmounts};
use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_money, validate_percent,
    validate_required_text,
};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub code: String,
    pub category: String,
    /// Showroom / warehouse locations carrying the product
    #[serde(default)]
    pub locations: Vec<String>,
    /// Promotional discount in percentage
    #[serde(default)]
    pub promo_discount: Decimal,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Find a variant by (type, size)
    pub fn variant(&self, variant_type: &str, size: &str) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|v| variant_key(&v.variant_type, &v.size) == variant_key(variant_type, size))
    }
}

/// Product variant (type × size × price × two sequential discounts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    /// Owning product (String ID)
    pub product_id: String,
    pub variant_type: String,
    pub size: String,
    pub price: Decimal,
    #[serde(default)]
    pub discount1: Decimal,
    #[serde(default)]
    pub discount2: Decimal,
}

impl ProductVariant {
    /// Unit price after both discounts, unrounded
    pub fn net_price(&self) -> Result<Decimal, AppError> {
        order_money::line_subtotal(&LineAmounts {
            price: self.price,
            discount1: self.discount1,
            discount2: self.discount2,
            quantity: 1,
        })
    }
}

/// Variant row inside a create / update product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPayload {
    /// Present when editing an existing variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub variant_type: String,
    pub size: String,
    pub price: Decimal,
    pub discount1: Decimal,
    pub discount2: Decimal,
}

/// Create / update product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub code: String,
    pub category: String,
    pub locations: Vec<String>,
    pub promo_discount: Decimal,
    pub variants: Vec<VariantPayload>,
}

impl ProductPayload {
    /// Validate fields and the per-product `(type, size)` uniqueness of variants
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.code, "code", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.category, "category", MAX_NAME_LEN)?;
        validate_percent(self.promo_discount, "promo_discount")?;

        let mut seen = HashSet::with_capacity(self.variants.len());
        for variant in &self.variants {
            validate_required_text(&variant.variant_type, "variant_type", MAX_SHORT_TEXT_LEN)?;
            validate_required_text(&variant.size, "size", MAX_SHORT_TEXT_LEN)?;
            validate_money(variant.price, "price")?;
            validate_percent(variant.discount1, "discount1")?;
            validate_percent(variant.discount2, "discount2")?;

            if !seen.insert(variant_key(&variant.variant_type, &variant.size)) {
                return Err(AppError::with_message(
                    ErrorCode::VariantDuplicate,
                    format!(
                        "variant {} / {} appears more than once",
                        variant.variant_type, variant.size
                    ),
                )
                .with_detail("variant_type", variant.variant_type.clone())
                .with_detail("size", variant.size.clone()));
            }
        }
        Ok(())
    }
}

fn variant_key(variant_type: &str, size: &str) -> (String, String) {
    (
        variant_type.trim().to_lowercase(),
        size.trim().to_lowercase(),
    )
}
