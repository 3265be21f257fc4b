//! Errors surfaced by the API client.

use super::macros::define_api_error;
use crate::outcome::Panicked;

define_api_error! {
    /// Errors surfaced while calling the NewAra backend.
    pub enum ApiError {
        /// The request never produced a response.
        Transport {
            /// Transport failure description.
            message: String
        } => "backend transport failed: {message}",
        /// The request or the backend timed out.
        Timeout {
            /// Timeout description.
            message: String
        } => "backend request timed out: {message}",
        /// The session is missing or lacks permission.
        Unauthorized {
            /// Status and response preview.
            message: String
        } => "backend rejected credentials: {message}",
        /// The requested resource does not exist.
        NotFound {
            /// Status and response preview.
            message: String
        } => "backend resource not found: {message}",
        /// The backend rejected submitted fields.
        Validation {
            /// Field errors flattened to one message per line.
            message: String
        } => "backend rejected submitted fields:\n{message}",
        /// Any other non-success status.
        Status {
            /// HTTP status code.
            status: u16,
            /// Response preview.
            message: String
        } => "backend returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode {
            /// Decoder message.
            message: String
        } => "backend response decode failed: {message}",
        /// The client refused to build the request.
        InvalidRequest {
            /// Reason the request was refused.
            message: String
        } => "request invalid: {message}",
        /// Handling the request panicked.
        Panicked {
            /// Captured panic message.
            message: String
        } => "request handling panicked: {message}",
    }
}

impl From<Panicked> for ApiError {
    fn from(panicked: Panicked) -> Self {
        Self::panicked(panicked.message())
    }
}
