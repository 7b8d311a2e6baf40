//! The "send a request, get a response" capability used by the REST pipeline.
//!
//! [`RestClient`](crate::RestClient) never talks to `reqwest` directly. It
//! hands a fully built [`HttpRequest`] to an [`HttpTransport`] and interprets
//! the [`HttpResponse`] it gets back. Production code uses
//! [`ReqwestTransport`]; tests substitute their own implementation.
//!
//! # Example
//!
//! ```rust
//! use std::future::Future;
//! use shopify_rest::clients::{HttpRequest, HttpResponse, HttpTransport, TransportError};
//!
//! struct AlwaysEmpty;
//!
//! impl HttpTransport for AlwaysEmpty {
//!     fn send(
//!         &self,
//!         _request: HttpRequest,
//!     ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
//!         async { Ok(HttpResponse::with_status(200, r#"{"products":[]}"#)) }
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// An HTTP transport that can execute a single request.
///
/// Implementations must be safe to share between concurrently running
/// requests. The returned future resolves exactly once: with a response for
/// any status code, or with a [`TransportError`] if no response was obtained.
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and returns the raw response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// [`HttpTransport`] backed by a `reqwest` client using rustls.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let invalid = || TransportError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = Self::header_map(&request.headers)?;

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        }
        .headers(headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, res_headers, body))
    }
}
