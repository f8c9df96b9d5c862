//! Data models mirrored from the admin REST API
//!
//! Records are plain serde structs. Create/update bodies are separate
//! `*Payload` types validated before they leave the client.

pub mod customer;
pub mod delivery_note;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod product;
pub mod purchase_order;
pub mod report;

pub use customer::{Address, Customer, CustomerPayload};
pub use delivery_note::{DeliveryNote, DeliveryNotePayload, has_active_note};
pub use inventory::{InventoryItem, InventoryPayload, StockAdjustment};
pub use order::{Order, OrderLine, OrderLinePayload, OrderPayload, PaymentMethod, PaymentTerms};
pub use payment::{PaymentPayload, PaymentRecord, outstanding, paid_total};
pub use product::{Product, ProductPayload, ProductVariant, VariantPayload};
pub use purchase_order::{
    CancelPurchaseOrder, PurchaseOrder, PurchaseOrderLine, PurchaseOrderPayload,
    PurchaseOrderStatus, StatusUpdate,
};
pub use report::{ReportQuery, ReportRow};
