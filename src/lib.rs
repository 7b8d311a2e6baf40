//! # Shopify REST Client
//!
//! A typed Rust client for the Shopify Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the access token, shop domain and API host
//! - Resource descriptors binding each record type to its URL path and JSON
//!   envelope key ([`rest::RestResource`])
//! - Resource-scoped, ordered query parameters ([`rest::QueryBuilder`])
//! - An async request pipeline ([`RestClient`]) with `read`, `create` and
//!   `delete` operations, plus callback forms that run on a spawned task
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{ClientConfig, RestClient};
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{ProductQuery, Products};
//!
//! let config = ClientConfig::new("shpat_access_token", "myshop").unwrap();
//! let client = RestClient::new(&config).unwrap();
//!
//! let query = QueryBuilder::<Products>::new()
//!     .add(ProductQuery::Limit(5))
//!     .add(ProductQuery::Page(2));
//!
//! assert_eq!(
//!     client.build_url(Some(&query)),
//!     "https://myshop.myshopify.com/admin/products.json?limit=5&page=2"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_rest::{ClientConfig, RestClient};
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{
//!     MarketingChannel, MarketingEvent, MarketingEventType, OrderQuery, OrderStatus, Orders,
//! };
//!
//! let client = RestClient::new(&ClientConfig::new("shpat_access_token", "myshop")?)?;
//!
//! // GET /admin/orders.json?limit=3&status=closed
//! let orders = client
//!     .read(
//!         &QueryBuilder::<Orders>::new()
//!             .add(OrderQuery::Limit(3))
//!             .add(OrderQuery::Status(OrderStatus::Closed)),
//!     )
//!     .await?;
//!
//! // POST /admin/marketing_events.json with {"marketing_event": {...}}
//! let event = client
//!     .create(&MarketingEvent::new(
//!         "Spring sale",
//!         MarketingEventType::Ad,
//!         MarketingChannel::Social,
//!         true,
//!         chrono::Utc::now(),
//!     ))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Pluggable transport**: Requests go through [`HttpTransport`], so tests
//!   can substitute their own

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ClientConfig, ClientConfigBuilder, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, RestClient,
    TransportError,
};

// Re-export REST resource types
pub use rest::{
    CreatableResource, QueryBuilder, QueryParam, ResourceContainer, ResourceError, RestResource,
};
