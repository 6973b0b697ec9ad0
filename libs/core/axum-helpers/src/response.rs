//! Success response envelope shared by all API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard success envelope.
///
/// Every successful response carries `success: true` and the payload under
/// `data`; mutation endpoints additionally set a human-readable `message`.
/// Error responses use [`crate::errors::ErrorResponse`] instead, so the two
/// shapes together form the `{success, data?, error?, message?}` contract.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": "..." },
///   "message": "User created successfully"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true` for this envelope
    pub success: bool,
    /// The response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional human-readable outcome description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Envelope for a plain read response.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Envelope for a mutation response with an outcome message.
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}
