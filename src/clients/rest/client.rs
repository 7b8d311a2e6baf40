//! REST client implementation for the Shopify Admin API.
//!
//! This module provides the [`RestClient`] type, which turns typed resource
//! operations into HTTP requests against `{base}/{path}.json` and decodes the
//! JSON responses back into typed records.

use tokio::task::JoinHandle;

use crate::clients::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
    CONTENT_TYPE_JSON,
};
use crate::config::ClientConfig;
use crate::rest::{
    envelope, CreatableResource, QueryBuilder, ResourceContainer, ResourceError, RestResource,
};

/// The crate version, reported in the `User-Agent` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API client for the Shopify Admin API.
///
/// Every operation is an independent future that resolves exactly once. The
/// client holds only immutable state, so it can be shared by reference across
/// concurrent requests, or cloned (when the transport is `Clone`) into
/// spawned tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{ClientConfig, RestClient};
/// use shopify_rest::rest::QueryBuilder;
/// use shopify_rest::rest::resources::{Webhook, WebhookQuery, Webhooks};
///
/// let config = ClientConfig::new("shpat_xxx", "my-store")?;
/// let client = RestClient::new(&config)?;
///
/// let webhooks = client
///     .read(&QueryBuilder::<Webhooks>::new().add(WebhookQuery::Limit(10)))
///     .await?;
///
/// let created = client
///     .create(&Webhook::new("orders/create", "https://example.com/hooks"))
///     .await?;
/// client.delete(&created).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient<T: HttpTransport = ReqwestTransport> {
    transport: T,
    base_url: String,
    default_headers: Vec<(String, String)>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<ReqwestTransport> {
    /// Creates a client that sends requests with [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: HttpTransport> RestClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        let base_url = config.admin_base_url();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let default_headers = vec![
            (
                "X-Shopify-Access-Token".to_string(),
                config.access_token().as_ref().to_string(),
            ),
            ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), user_agent),
        ];

        tracing::debug!("Created REST client for {}", base_url);

        Self {
            transport,
            base_url,
            default_headers,
        }
    }

    /// Returns the admin base URL, e.g. `https://my-store.myshopify.com/admin`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the collection URL of `R`: `{base}/{PATH}.json`.
    #[must_use]
    pub fn resource_url<R: RestResource>(&self) -> String {
        format!("{}/{}.json", self.base_url, R::PATH)
    }

    /// Returns the member URL of the `R` record with `id`: `{base}/{PATH}/{id}.json`.
    #[must_use]
    pub fn member_url<R: RestResource>(&self, id: &R::Id) -> String {
        format!("{}/{}/{id}.json", self.base_url, R::PATH)
    }

    /// Builds the read URL for container `C`.
    ///
    /// The query string is appended only when `query` is supplied and
    /// non-empty. No network activity takes place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{ClientConfig, RestClient};
    /// use shopify_rest::rest::QueryBuilder;
    /// use shopify_rest::rest::resources::{ProductQuery, Products};
    ///
    /// let config = ClientConfig::new("token", "myshop").unwrap();
    /// let client = RestClient::new(&config).unwrap();
    ///
    /// let query = QueryBuilder::<Products>::new()
    ///     .add(ProductQuery::Limit(5))
    ///     .add(ProductQuery::Page(2));
    ///
    /// assert_eq!(
    ///     client.build_url(Some(&query)),
    ///     "https://myshop.myshopify.com/admin/products.json?limit=5&page=2"
    /// );
    /// assert_eq!(
    ///     client.build_url::<Products>(None),
    ///     "https://myshop.myshopify.com/admin/products.json"
    /// );
    /// ```
    #[must_use]
    pub fn build_url<C: ResourceContainer>(&self, query: Option<&QueryBuilder<C>>) -> String {
        let url = self.resource_url::<C::Resource>();
        match query.filter(|query| !query.is_empty()) {
            Some(query) => format!("{url}?{}", query.to_query_string()),
            None => url,
        }
    }

    /// Reads container `C`, filtered by `query`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Transport`] if no response was obtained
    /// - [`ResourceError::Status`] for a non-2xx status
    /// - [`ResourceError::EmptyBody`] if the response body is empty
    /// - [`ResourceError::Decode`] if the body does not decode as `C`
    pub async fn read<C: ResourceContainer>(
        &self,
        query: &QueryBuilder<C>,
    ) -> Result<C, ResourceError> {
        self.fetch(self.build_url(Some(query))).await
    }

    /// Reads container `C` without query parameters.
    ///
    /// # Errors
    ///
    /// Same as [`RestClient::read`].
    pub async fn read_all<C: ResourceContainer>(&self) -> Result<C, ResourceError> {
        self.fetch(self.build_url::<C>(None)).await
    }

    /// Creates `record` and returns the record echoed back by the API.
    ///
    /// The request body is `{ R::KEY: record }`; the response is decoded from
    /// the same envelope shape.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Encode`] if `record` cannot be serialized
    /// - [`ResourceError::Transport`] if no response was obtained
    /// - [`ResourceError::Status`] for a non-2xx status
    /// - [`ResourceError::EmptyBody`] if the response body is empty
    /// - [`ResourceError::Decode`] or [`ResourceError::MissingEnvelopeKey`] if
    ///   the body does not hold an `R` under `R::KEY`
    pub async fn create<R: CreatableResource>(&self, record: &R) -> Result<R, ResourceError> {
        let body = envelope::wrap(record)?;
        let request = self
            .request(HttpMethod::Post, self.resource_url::<R>())
            .body(body);

        let response = self.dispatch(request).await?;
        if !response.is_ok() {
            return Err(Self::status_error::<R>(&response));
        }
        if response.is_empty() {
            tracing::warn!("{} create returned an empty body", R::NAME);
            return Err(ResourceError::EmptyBody { resource: R::NAME });
        }

        envelope::unwrap(&response.body).map_err(|error| {
            tracing::warn!("Failed to decode created {}: {}", R::NAME, error);
            error
        })
    }

    /// Deletes `record` by its identifier.
    ///
    /// Succeeds only when the API answers `200`. A record without an
    /// identifier is rejected before any request is sent.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingId`] if `record` has no identifier
    /// - [`ResourceError::Transport`] if no response was obtained
    /// - [`ResourceError::Status`] for any status other than `200`
    pub async fn delete<R: RestResource>(&self, record: &R) -> Result<(), ResourceError> {
        let Some(id) = record.get_id() else {
            tracing::debug!("Skipping delete of {} without an id", R::NAME);
            return Err(ResourceError::MissingId { resource: R::NAME });
        };

        let request = self.request(HttpMethod::Delete, self.member_url::<R>(&id));
        let response = self.dispatch(request).await?;
        if response.code != 200 {
            return Err(Self::status_error::<R>(&response));
        }
        Ok(())
    }

    fn request(&self, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest::new(method, url).headers(&self.default_headers)
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ResourceError> {
        tracing::debug!("{} {}", request.method, request.url);
        Ok(self.transport.send(request).await?)
    }

    async fn fetch<C: ResourceContainer>(&self, url: String) -> Result<C, ResourceError> {
        let resource = <C::Resource as RestResource>::NAME;

        let response = self.dispatch(self.request(HttpMethod::Get, url)).await?;
        if !response.is_ok() {
            return Err(Self::status_error::<C::Resource>(&response));
        }
        if response.is_empty() {
            tracing::warn!("{} read returned an empty body", resource);
            return Err(ResourceError::EmptyBody { resource });
        }

        serde_json::from_str(&response.body).map_err(|source| {
            tracing::warn!("Failed to decode {} read: {}", resource, source);
            ResourceError::Decode { resource, source }
        })
    }

    fn status_error<R: RestResource>(response: &HttpResponse) -> ResourceError {
        let request_id = response.request_id().map(str::to_string);
        tracing::warn!(
            "{} request failed with status {} (request id: {:?})",
            R::NAME,
            response.code,
            request_id
        );
        ResourceError::Status {
            resource: R::NAME,
            code: response.code,
            request_id,
        }
    }
}

/// Callback dispatch.
///
/// Each method spawns the operation on the current Tokio runtime, invokes
/// `callback` exactly once with its result, and returns the task handle.
/// They must be called from within a Tokio runtime.
impl<T: HttpTransport + Clone + 'static> RestClient<T> {
    /// Spawns [`RestClient::read`] and hands the result to `callback`.
    pub fn read_then<C, F>(&self, query: &QueryBuilder<C>, callback: F) -> JoinHandle<()>
    where
        C: ResourceContainer + 'static,
        F: FnOnce(Result<C, ResourceError>) + Send + 'static,
    {
        let client = self.clone();
        let query = query.clone();
        tokio::spawn(async move {
            callback(client.read(&query).await);
        })
    }

    /// Spawns [`RestClient::read_all`] and hands the result to `callback`.
    pub fn read_all_then<C, F>(&self, callback: F) -> JoinHandle<()>
    where
        C: ResourceContainer + 'static,
        F: FnOnce(Result<C, ResourceError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            callback(client.read_all::<C>().await);
        })
    }

    /// Spawns [`RestClient::create`] and hands the result to `callback`.
    pub fn create_then<R, F>(&self, record: &R, callback: F) -> JoinHandle<()>
    where
        R: CreatableResource + Clone + 'static,
        F: FnOnce(Result<R, ResourceError>) + Send + 'static,
    {
        let client = self.clone();
        let record = record.clone();
        tokio::spawn(async move {
            callback(client.create(&record).await);
        })
    }

    /// Spawns [`RestClient::delete`] and hands the result to `callback`.
    pub fn delete_then<R, F>(&self, record: &R, callback: F) -> JoinHandle<()>
    where
        R: RestResource + Clone + 'static,
        F: FnOnce(Result<(), ResourceError>) + Send + 'static,
    {
        let client = self.clone();
        let record = record.clone();
        tokio::spawn(async move {
            callback(client.delete(&record).await);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;
    use crate::rest::resources::{
        OrderQuery, OrderStatus, Orders, Product, Products, Webhook, WebhookQuery, Webhooks,
    };
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, Default)]
    struct StubTransport {
        response: HttpResponse,
        sent: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl StubTransport {
        fn answering(code: u16, body: &str) -> Self {
            Self {
                response: HttpResponse::with_status(code, body),
                sent: Arc::default(),
            }
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl HttpTransport for StubTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
            self.sent.lock().unwrap().push(request);
            let response = self.response.clone();
            async move { Ok(response) }
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::new("test-token", "myshop").unwrap()
    }

    fn client(transport: StubTransport) -> RestClient<StubTransport> {
        RestClient::with_transport(&config(), transport)
    }

    #[test]
    fn test_base_url_uses_shop_domain() {
        let client = client(StubTransport::default());
        assert_eq!(client.base_url(), "https://myshop.myshopify.com/admin");
    }

    #[test]
    fn test_base_url_uses_api_host_override() {
        let config = ClientConfig::builder()
            .access_token(crate::config::AccessToken::new("t").unwrap())
            .shop(crate::config::ShopDomain::new("myshop").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:4321").unwrap())
            .build()
            .unwrap();
        let client = RestClient::with_transport(&config, StubTransport::default());
        assert_eq!(client.base_url(), "http://127.0.0.1:4321/admin");
    }

    #[test]
    fn test_default_headers() {
        let client = client(StubTransport::default());
        let headers = client.default_headers();

        let get = |name: &str| {
            headers
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };
        assert_eq!(get("X-Shopify-Access-Token"), Some("test-token"));
        assert_eq!(get("Content-Type"), Some("application/json; charset=utf-8"));
        assert_eq!(get("Accept"), Some("application/json"));

        let user_agent = get("User-Agent").unwrap();
        assert!(user_agent.starts_with(&format!("Shopify REST Client v{CLIENT_VERSION}")));
        assert!(user_agent.contains("| Rust "));
    }

    #[test]
    fn test_user_agent_prefix() {
        let config = ClientConfig::builder()
            .access_token(crate::config::AccessToken::new("t").unwrap())
            .shop(crate::config::ShopDomain::new("myshop").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = RestClient::with_transport(&config, StubTransport::default());
        let (_, user_agent) = client
            .default_headers()
            .iter()
            .find(|(key, _)| key == "User-Agent")
            .unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | Shopify REST Client v"));
    }

    #[test]
    fn test_build_url_with_and_without_query() {
        let client = client(StubTransport::default());

        let query = QueryBuilder::<Orders>::new()
            .add(OrderQuery::Limit(3))
            .add(OrderQuery::Status(OrderStatus::Closed));
        assert_eq!(
            client.build_url(Some(&query)),
            "https://myshop.myshopify.com/admin/orders.json?limit=3&status=closed"
        );
        assert_eq!(
            client.build_url::<Orders>(None),
            "https://myshop.myshopify.com/admin/orders.json"
        );
    }

    #[test]
    fn test_build_url_with_empty_builder_has_no_question_mark() {
        let client = client(StubTransport::default());
        let url = client.build_url(Some(&QueryBuilder::<Webhooks>::new()));
        assert_eq!(url, "https://myshop.myshopify.com/admin/webhooks.json");
    }

    #[test]
    fn test_member_url() {
        let client = client(StubTransport::default());
        assert_eq!(
            client.member_url::<Webhook>(&3),
            "https://myshop.myshopify.com/admin/webhooks/3.json"
        );
    }

    #[tokio::test]
    async fn test_read_sends_get_with_default_headers() {
        let transport = StubTransport::answering(200, r#"{"webhooks":[]}"#);
        let client = client(transport.clone());

        let query = QueryBuilder::<Webhooks>::new().add(WebhookQuery::Limit(10));
        let webhooks = client.read(&query).await.unwrap();
        assert!(webhooks.webhooks.is_empty());

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(
            sent[0].url,
            "https://myshop.myshopify.com/admin/webhooks.json?limit=10"
        );
        assert_eq!(sent[0].header_value("X-Shopify-Access-Token"), Some("test-token"));
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn test_read_reports_status_error() {
        let client = client(StubTransport::answering(404, r#"{"errors":"Not Found"}"#));
        let error = client.read_all::<Products>().await.unwrap_err();
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn test_delete_without_id_sends_nothing() {
        let transport = StubTransport::answering(200, "{}");
        let client = client(transport.clone());

        let error = client.delete(&Product::new("Mug")).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MissingId {
                resource: "Product"
            }
        ));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_exactly_200() {
        let client = client(StubTransport::answering(204, ""));
        let webhook = Webhook::new("orders/create", "https://example.com").with_id(3);
        let error = client.delete(&webhook).await.unwrap_err();
        assert_eq!(error.status(), Some(204));
    }

    #[tokio::test]
    async fn test_read_then_invokes_callback_once() {
        let client = client(StubTransport::answering(
            200,
            r#"{"products":[{"title":"Mug"}]}"#,
        ));
        let (tx, rx) = tokio::sync::oneshot::channel();

        client
            .read_all_then::<Products, _>(move |result| {
                let _ = tx.send(result.map(|products| products.products.len()));
            })
            .await
            .unwrap();

        assert_eq!(rx.await.unwrap().unwrap(), 1);
    }
}
