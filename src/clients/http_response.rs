//! HTTP response type returned by transports.

use std::collections::HashMap;

/// A raw HTTP response.
///
/// Header names are stored lower-cased. The body is kept as text; decoding is
/// the REST layer's job.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"products":[]}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("abc-123"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body text (empty if there was none).
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Creates a response with a status and body but no headers.
    #[must_use]
    pub fn with_status(code: u16, body: impl Into<String>) -> Self {
        Self::new(code, HashMap::new(), body)
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body is empty or whitespace only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
