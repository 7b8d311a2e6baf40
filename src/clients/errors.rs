//! Transport-level error types.
//!
//! A [`TransportError`] means no HTTP response was obtained: the connection
//! failed, TLS or DNS failed, or the request could not be assembled. Responses
//! with a non-success status are *not* transport errors; they are reported by
//! the REST layer as [`ResourceError::Status`](crate::rest::ResourceError::Status).
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::clients::TransportError;
//!
//! let error = TransportError::InvalidHeader { name: "X-Bad\n".to_string() };
//! assert!(error.to_string().contains("X-Bad"));
//! ```

use thiserror::Error;

/// Error returned by an [`HttpTransport`](crate::clients::HttpTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network, DNS, or TLS failure reported by the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A header name or value could not be encoded on the wire.
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// Any other failure raised by a custom transport.
    #[error("Transport failure: {message}")]
    Other {
        /// A description of the failure.
        message: String,
    },
}

// Verify TransportError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportError>();
};
