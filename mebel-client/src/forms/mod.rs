//! Order-entry form state
//!
//! Local line items and payment parameters, recombined into totals after
//! every change.

mod order_form;
mod purchase_order_form;

pub use order_form::{DisplayTotals, FormLine, OrderForm};
pub use purchase_order_form::PurchaseOrderForm;
