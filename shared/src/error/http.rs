//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CustomerNotFound
            | Self::OrderNotFound
            | Self::PaymentNotFound
            | Self::ProductNotFound
            | Self::VariantNotFound
            | Self::InventoryNotFound
            | Self::PurchaseOrderNotFound
            | Self::DeliveryNoteNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::CustomerHasOrders
            | Self::VariantDuplicate
            | Self::PaymentAlreadyConfirmed
            | Self::PurchaseOrderInvalidTransition
            | Self::PurchaseOrderTerminal
            | Self::DeliveryNoteExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::SessionExpired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::AdminRequired => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity (business rules)
            Self::CreditLimitExceeded
            | Self::InsufficientStock
            | Self::PaymentNotPaid
            | Self::PurchaseOrderQuantityExceeded => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::OrderEmpty
            | Self::OrderCustomerRequired
            | Self::InvalidInstallmentPlan
            | Self::InvalidDiscount
            | Self::InvalidQuantity
            | Self::PaymentInvalidAmount
            | Self::ProductInvalidPrice
            | Self::CancelReasonRequired => StatusCode::BAD_REQUEST,

            // 504 Gateway Timeout
            Self::TimeoutError => StatusCode::GATEWAY_TIMEOUT,

            // 500 Internal Server Error
            Self::Unknown
            | Self::DeliveryNoteInconsistent
            | Self::InternalError
            | Self::NetworkError
            | Self::ConfigError
            | Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
