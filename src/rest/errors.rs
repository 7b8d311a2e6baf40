//! Error types for resource operations.
//!
//! Every pipeline operation resolves to `Result<_, ResourceError>`. The
//! variant tells the caller *why* a request failed:
//!
//! - [`ResourceError::Transport`] - no response was obtained
//! - [`ResourceError::Status`] - the API answered with an unexpected status
//! - [`ResourceError::EmptyBody`], [`ResourceError::Decode`],
//!   [`ResourceError::MissingEnvelopeKey`] - the response could not be decoded
//! - [`ResourceError::Encode`] - the outgoing record could not be serialized
//! - [`ResourceError::MissingId`] - a delete was attempted on an unsaved record
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::ResourceError;
//!
//! match client.delete(&webhook).await {
//!     Ok(()) => println!("deleted"),
//!     Err(ResourceError::MissingId { resource }) => println!("{resource} was never saved"),
//!     Err(ResourceError::Status { code, .. }) => println!("API answered {code}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::TransportError;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API returned a status the operation does not accept.
    #[error("{resource} request failed with status {code}")]
    Status {
        /// The display name of the resource.
        resource: &'static str,
        /// The HTTP status code.
        code: u16,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The response had no body where one was required.
    #[error("{resource} response body was empty")]
    EmptyBody {
        /// The display name of the resource.
        resource: &'static str,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The display name of the resource.
        resource: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The response envelope did not contain the expected key.
    #[error("Missing key '{key}' in response body")]
    MissingEnvelopeKey {
        /// The envelope key that was expected.
        key: &'static str,
    },

    /// The outgoing record could not be serialized.
    #[error("Failed to encode {resource}: {source}")]
    Encode {
        /// The display name of the resource.
        resource: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The record has no identifier, so no member URL can be built.
    #[error("{resource} has no id")]
    MissingId {
        /// The display name of the resource.
        resource: &'static str,
    },
}

impl ResourceError {
    /// Returns the HTTP status code for [`ResourceError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Status { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::EmptyBody { .. } | Self::Decode { .. } | Self::MissingEnvelopeKey { .. }
        )
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_status_error_formats_message_and_exposes_code() {
        let error = ResourceError::Status {
            resource: "Webhook",
            code: 404,
            request_id: Some("req-1".to_string()),
        };

        assert_eq!(error.to_string(), "Webhook request failed with status 404");
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));
        assert!(!error.is_decode());
    }

    #[test]
    fn test_decode_variants_are_classified() {
        let decode = ResourceError::Decode {
            resource: "Product",
            source: json_error(),
        };
        assert!(decode.is_decode());
        assert!(decode.to_string().contains("Product"));

        assert!(ResourceError::EmptyBody { resource: "Product" }.is_decode());
        assert!(ResourceError::MissingEnvelopeKey { key: "product" }.is_decode());
        assert!(!ResourceError::MissingId { resource: "Product" }.is_decode());
    }

    #[test]
    fn test_from_transport_error_conversion() {
        let error: ResourceError = TransportError::Other {
            message: "reset".to_string(),
        }
        .into();
        assert!(matches!(error, ResourceError::Transport(_)));
        assert_eq!(error.status(), None);
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_missing_id_message() {
        let error = ResourceError::MissingId {
            resource: "Webhook",
        };
        assert_eq!(error.to_string(), "Webhook has no id");
    }

    #[test]
    fn test_encode_error_exposes_source() {
        use std::error::Error as _;

        let error = ResourceError::Encode {
            resource: "Order",
            source: json_error(),
        };
        assert!(error.source().is_some());
    }
}
