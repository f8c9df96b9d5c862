//! Order entry form state
//!
//! Every edit re-runs [`order_money::recompute`] over the whole form, so the
//! displayed totals can never lag behind the lines or payment terms.

use rust_decimal::Decimal;
use shared::models::{OrderLinePayload, OrderPayload, PaymentMethod, PaymentTerms, Product, ProductVariant};
use shared::order_money::{self, LineAmounts, PricedLine, Totals};
use shared::{AppError, ErrorCode};

/// One editable line of the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormLine {
    pub variant_id: String,
    pub product_name: String,
    pub variant_type: String,
    pub size: String,
    pub quantity: u32,
    pub price: Decimal,
    pub discount1: Decimal,
    pub discount2: Decimal,
}

impl FormLine {
    /// Line for `variant` at its list price and discounts
    pub fn from_variant(product: &Product, variant: &ProductVariant, quantity: u32) -> Self {
        Self {
            variant_id: variant.id.clone(),
            product_name: product.name.clone(),
            variant_type: variant.variant_type.clone(),
            size: variant.size.clone(),
            quantity,
            price: variant.price,
            discount1: variant.discount1,
            discount2: variant.discount2,
        }
    }
}

impl PricedLine for FormLine {
    fn amounts(&self) -> LineAmounts {
        LineAmounts {
            price: self.price,
            discount1: self.discount1,
            discount2: self.discount2,
            quantity: self.quantity,
        }
    }
}

/// Totals rounded for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTotals {
    pub line_subtotals: Vec<Decimal>,
    pub total: Decimal,
    pub remaining: Decimal,
    pub per_installment: Option<Decimal>,
}

impl From<&Totals> for DisplayTotals {
    fn from(t: &Totals) -> Self {
        Self {
            line_subtotals: t.line_subtotals.iter().copied().map(order_money::round_money).collect(),
            total: order_money::round_money(t.total),
            remaining: order_money::round_money(t.remaining),
            per_installment: t.per_installment.map(order_money::round_money),
        }
    }
}

/// State of the new / edit order form
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    customer_id: Option<String>,
    lines: Vec<FormLine>,
    payment: PaymentTerms,
    totals: Totals,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn lines(&self) -> &[FormLine] {
        &self.lines
    }

    pub fn payment(&self) -> &PaymentTerms {
        &self.payment
    }

    /// Unrounded derived values
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn display_totals(&self) -> DisplayTotals {
        DisplayTotals::from(&self.totals)
    }

    pub fn select_customer(&mut self, customer_id: impl Into<String>) {
        let id = customer_id.into();
        self.customer_id = if id.trim().is_empty() { None } else { Some(id) };
    }

    pub fn add_line(&mut self, line: FormLine) -> Result<(), AppError> {
        self.edit(|lines, _| {
            lines.push(line);
            Ok(())
        })
    }

    pub fn remove_line(&mut self, index: usize) -> Result<FormLine, AppError> {
        self.edit(|lines, _| {
            line_at(lines, index)?;
            Ok(lines.remove(index))
        })
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), AppError> {
        self.edit(|lines, _| {
            line_at(lines, index)?.quantity = quantity;
            Ok(())
        })
    }

    pub fn set_price(&mut self, index: usize, price: Decimal) -> Result<(), AppError> {
        self.edit(|lines, _| {
            line_at(lines, index)?.price = price;
            Ok(())
        })
    }

    pub fn set_discounts(&mut self, index: usize, discount1: Decimal, discount2: Decimal) -> Result<(), AppError> {
        self.edit(|lines, _| {
            let line = line_at(lines, index)?;
            line.discount1 = discount1;
            line.discount2 = discount2;
            Ok(())
        })
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) -> Result<(), AppError> {
        self.edit(|_, payment| {
            payment.method = method;
            Ok(())
        })
    }

    pub fn set_down_payment(&mut self, amount: Decimal) -> Result<(), AppError> {
        self.edit(|_, payment| {
            payment.down_payment = amount;
            Ok(())
        })
    }

    pub fn set_trade_in(&mut self, amount: Decimal) -> Result<(), AppError> {
        self.edit(|_, payment| {
            payment.trade_in = amount;
            Ok(())
        })
    }

    pub fn set_installment(&mut self, period_days: u32, term_days: u32) -> Result<(), AppError> {
        self.edit(|_, payment| {
            payment.installment_period_days = period_days;
            payment.term_days = term_days;
            Ok(())
        })
    }

    pub fn set_payment(&mut self, payment: PaymentTerms) -> Result<(), AppError> {
        self.edit(|_, terms| {
            *terms = payment;
            Ok(())
        })
    }

    /// Build the create payload, running every client-side guard
    pub fn submit_payload(&self) -> Result<OrderPayload, AppError> {
        let customer_id = self
            .customer_id
            .clone()
            .ok_or_else(|| AppError::new(ErrorCode::OrderCustomerRequired))?;

        let mut payment = self.payment.clone();
        if !payment.method.is_installment() {
            payment.installment_period_days = 0;
            payment.term_days = 0;
        }

        let lines: Vec<OrderLinePayload> = self
            .lines
            .iter()
            .zip(&self.totals.line_subtotals)
            .map(|(line, subtotal)| OrderLinePayload {
                variant_id: line.variant_id.clone(),
                quantity: line.quantity,
                price: line.price,
                discount1: line.discount1,
                discount2: line.discount2,
                subtotal: *subtotal,
            })
            .collect();

        let payload = OrderPayload {
            customer_id,
            lines,
            payment,
            total: self.totals.total,
            remaining: self.totals.remaining,
            per_installment: self.totals.per_installment,
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Apply `change` to a copy of the lines and terms
    ///
    /// The form is only updated when the totals of the copy compute, so a
    /// rejected edit leaves lines, terms and totals as they were.
    fn edit<R>(
        &mut self,
        change: impl FnOnce(&mut Vec<FormLine>, &mut PaymentTerms) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut lines = self.lines.clone();
        let mut payment = self.payment.clone();
        let out = change(&mut lines, &mut payment)?;
        self.totals = order_money::recompute(&lines, &payment)?;
        self.lines = lines;
        self.payment = payment;
        Ok(out)
    }
}

fn line_at(lines: &mut [FormLine], index: usize) -> Result<&mut FormLine, AppError> {
    let len = lines.len();
    lines.get_mut(index).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::InvalidRequest,
            format!("no line at index {index} (form has {len})"),
        )
    })
}
