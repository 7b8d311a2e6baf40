//! HTTP request types.
//!
//! An [`HttpRequest`] is fully resolved before it reaches a transport: it
//! carries the absolute URL (query string included), every header, and the
//! already-encoded body.

use std::fmt;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// HTTP methods used by the REST pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be handed to an [`HttpTransport`](crate::clients::HttpTransport).
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::new(HttpMethod::Post, "https://shop.myshopify.com/admin/webhooks.json")
///     .header("X-Shopify-Access-Token", "token")
///     .body(r#"{"webhook":{}}"#);
///
/// assert_eq!(request.header_value("x-shopify-access-token"), Some("token"));
/// assert_eq!(request.body.as_deref(), Some(r#"{"webhook":{}}"#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including any query string.
    pub url: String,
    /// Headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// The encoded request body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header, replacing any existing header with the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Adds every header from `headers`.
    #[must_use]
    pub fn headers<'a>(self, headers: impl IntoIterator<Item = &'a (String, String)>) -> Self {
        headers
            .into_iter()
            .fold(self, |request, (name, value)| request.header(name, value))
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
