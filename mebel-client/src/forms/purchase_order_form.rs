//! Purchase order form, prefilled from an order

use rust_decimal::Decimal;
use shared::models::{Order, PaymentTerms, PurchaseOrderLine, PurchaseOrderPayload, PurchaseOrderStatus};
use shared::order_money::{self, Totals};
use shared::{AppError, ErrorCode};

use super::order_form::DisplayTotals;

/// State of the "create purchase order" form
#[derive(Debug, Clone)]
pub struct PurchaseOrderForm {
    order_id: String,
    customer_id: String,
    lines: Vec<PurchaseOrderLine>,
    payment: PaymentTerms,
    totals: Totals,
}

impl PurchaseOrderForm {
    /// Copy the order's lines and payment terms
    pub fn from_order(order: &Order) -> Result<Self, AppError> {
        let lines: Vec<PurchaseOrderLine> =
            order.lines.iter().map(PurchaseOrderLine::from_order_line).collect();
        let mut form = Self {
            order_id: order.id.clone(),
            customer_id: order.customer_id.clone(),
            lines: Vec::new(),
            payment: PaymentTerms::default(),
            totals: Totals::default(),
        };
        form.replace(lines, order.payment.clone())?;
        Ok(form)
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn lines(&self) -> &[PurchaseOrderLine] {
        &self.lines
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn display_totals(&self) -> DisplayTotals {
        DisplayTotals::from(&self.totals)
    }

    /// Set a line quantity, capped at the quantity on the order
    ///
    /// Returns the quantity actually applied.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<u32, AppError> {
        if quantity == 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidQuantity,
                "quantity must be at least 1, remove the line instead",
            ));
        }
        let mut lines = self.lines.clone();
        let line = lines.get_mut(index).ok_or_else(|| no_line(index))?;
        let applied = quantity.min(line.ordered_quantity);
        if applied < quantity {
            tracing::debug!(
                variant = %line.variant_id,
                requested = quantity,
                ordered = line.ordered_quantity,
                "Capping purchase order quantity"
            );
        }
        line.quantity = applied;
        self.replace(lines, self.payment.clone())?;
        Ok(applied)
    }

    pub fn remove_line(&mut self, index: usize) -> Result<PurchaseOrderLine, AppError> {
        if index >= self.lines.len() {
            return Err(no_line(index));
        }
        let mut lines = self.lines.clone();
        let line = lines.remove(index);
        self.replace(lines, self.payment.clone())?;
        Ok(line)
    }

    pub fn set_down_payment(&mut self, amount: Decimal) -> Result<(), AppError> {
        let payment = PaymentTerms {
            down_payment: amount,
            ..self.payment.clone()
        };
        self.replace(self.lines.clone(), payment)
    }

    pub fn set_trade_in(&mut self, amount: Decimal) -> Result<(), AppError> {
        let payment = PaymentTerms {
            trade_in: amount,
            ..self.payment.clone()
        };
        self.replace(self.lines.clone(), payment)
    }

    pub fn set_payment(&mut self, payment: PaymentTerms) -> Result<(), AppError> {
        self.replace(self.lines.clone(), payment)
    }

    /// Build the create payload; a new purchase order starts at `Dipesan`
    pub fn submit_payload(&self) -> Result<PurchaseOrderPayload, AppError> {
        let payload = PurchaseOrderPayload {
            order_id: self.order_id.clone(),
            customer_id: self.customer_id.clone(),
            lines: self.lines.clone(),
            payment: self.payment.clone(),
            total: self.totals.total,
            remaining: self.totals.remaining,
            per_installment: self.totals.per_installment,
            status: PurchaseOrderStatus::Dipesan,
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Install new lines and terms once their totals compute
    fn replace(&mut self, mut lines: Vec<PurchaseOrderLine>, payment: PaymentTerms) -> Result<(), AppError> {
        let totals = order_money::recompute(&lines, &payment)?;
        for (line, subtotal) in lines.iter_mut().zip(&totals.line_subtotals) {
            line.subtotal = *subtotal;
        }
        self.lines = lines;
        self.payment = payment;
        self.totals = totals;
        Ok(())
    }
}

fn no_line(index: usize) -> AppError {
    AppError::with_message(ErrorCode::InvalidRequest, format!("no line at index {index}"))
}
