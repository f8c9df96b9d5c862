//! Unified error codes for the Mebel admin API
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Customer errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Product / inventory errors
//! - 7xxx: Purchase order errors
//! - 8xxx: Delivery note errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the API and the client
/// agree on a compact numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 3001,
    /// Customer still referenced by orders
    CustomerHasOrders = 3002,
    /// Order total exceeds the customer's credit limit
    CreditLimitExceeded = 3003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no lines
    OrderEmpty = 4002,
    /// Order has no customer selected
    OrderCustomerRequired = 4003,
    /// Installment period / term combination is unusable
    InvalidInstallmentPlan = 4004,
    /// Discount outside 0..=100
    InvalidDiscount = 4005,
    /// Quantity must be positive
    InvalidQuantity = 4006,

    // ==================== 5xxx: Payment ====================
    /// Payment record not found
    PaymentNotFound = 5001,
    /// Payment amount is invalid
    PaymentInvalidAmount = 5002,
    /// Payment must be marked paid before it can be confirmed
    PaymentNotPaid = 5003,
    /// Payment has already been confirmed
    PaymentAlreadyConfirmed = 5004,

    // ==================== 6xxx: Product / Inventory ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Product variant not found
    VariantNotFound = 6101,
    /// Duplicate (type, size) variant within a product
    VariantDuplicate = 6102,
    /// Inventory row not found
    InventoryNotFound = 6201,
    /// Not enough stock for the adjustment
    InsufficientStock = 6202,

    // ==================== 7xxx: Purchase Order ====================
    /// Purchase order not found
    PurchaseOrderNotFound = 7001,
    /// Status change not allowed from the current state
    PurchaseOrderInvalidTransition = 7002,
    /// Cancellation requires a reason
    CancelReasonRequired = 7003,
    /// Line quantity exceeds the originating order quantity
    PurchaseOrderQuantityExceeded = 7004,
    /// Purchase order is in a terminal state
    PurchaseOrderTerminal = 7005,

    // ==================== 8xxx: Delivery Note ====================
    /// Delivery note not found
    DeliveryNoteNotFound = 8001,
    /// An active delivery note already exists for the purchase order
    DeliveryNoteExists = 8002,
    /// Delivery note was created but the follow-up status change and its rollback failed
    DeliveryNoteInconsistent = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Local storage read/write failed
    StorageError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerHasOrders => "Customer has existing orders",
            ErrorCode::CreditLimitExceeded => "Customer credit limit exceeded",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no lines",
            ErrorCode::OrderCustomerRequired => "Order requires a customer",
            ErrorCode::InvalidInstallmentPlan => "Installment period and term are invalid",
            ErrorCode::InvalidDiscount => "Discount must be between 0 and 100",
            ErrorCode::InvalidQuantity => "Quantity must be positive",

            // Payment
            ErrorCode::PaymentNotFound => "Payment record not found",
            ErrorCode::PaymentInvalidAmount => "Invalid payment amount",
            ErrorCode::PaymentNotPaid => "Payment has not been marked as paid",
            ErrorCode::PaymentAlreadyConfirmed => "Payment has already been confirmed",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::VariantNotFound => "Product variant not found",
            ErrorCode::VariantDuplicate => "Product variant type and size must be unique",
            ErrorCode::InventoryNotFound => "Inventory record not found",
            ErrorCode::InsufficientStock => "Insufficient stock",

            // Purchase order
            ErrorCode::PurchaseOrderNotFound => "Purchase order not found",
            ErrorCode::PurchaseOrderInvalidTransition => {
                "Purchase order status change is not allowed"
            }
            ErrorCode::CancelReasonRequired => "Cancellation reason is required",
            ErrorCode::PurchaseOrderQuantityExceeded => {
                "Quantity exceeds the originating order quantity"
            }
            ErrorCode::PurchaseOrderTerminal => "Purchase order is already finished",

            // Delivery note
            ErrorCode::DeliveryNoteNotFound => "Delivery note not found",
            ErrorCode::DeliveryNoteExists => "Purchase order already has an active delivery note",
            ErrorCode::DeliveryNoteInconsistent => {
                "Delivery note exists but purchase order status was not updated"
            }

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Local storage error",
        }
    }
}

/// Error returned when converting an unknown numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Customer
            3001 => Ok(ErrorCode::CustomerNotFound),
            3002 => Ok(ErrorCode::CustomerHasOrders),
            3003 => Ok(ErrorCode::CreditLimitExceeded),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::OrderCustomerRequired),
            4004 => Ok(ErrorCode::InvalidInstallmentPlan),
            4005 => Ok(ErrorCode::InvalidDiscount),
            4006 => Ok(ErrorCode::InvalidQuantity),

            // Payment
            5001 => Ok(ErrorCode::PaymentNotFound),
            5002 => Ok(ErrorCode::PaymentInvalidAmount),
            5003 => Ok(ErrorCode::PaymentNotPaid),
            5004 => Ok(ErrorCode::PaymentAlreadyConfirmed),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6101 => Ok(ErrorCode::VariantNotFound),
            6102 => Ok(ErrorCode::VariantDuplicate),
            6201 => Ok(ErrorCode::InventoryNotFound),
            6202 => Ok(ErrorCode::InsufficientStock),

            // Purchase order
            7001 => Ok(ErrorCode::PurchaseOrderNotFound),
            7002 => Ok(ErrorCode::PurchaseOrderInvalidTransition),
            7003 => Ok(ErrorCode::CancelReasonRequired),
            7004 => Ok(ErrorCode::PurchaseOrderQuantityExceeded),
            7005 => Ok(ErrorCode::PurchaseOrderTerminal),

            // Delivery note
            8001 => Ok(ErrorCode::DeliveryNoteNotFound),
            8002 => Ok(ErrorCode::DeliveryNoteExists),
            8003 => Ok(ErrorCode::DeliveryNoteInconsistent),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
