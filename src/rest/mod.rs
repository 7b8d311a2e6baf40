//! REST resource infrastructure.
//!
//! This module provides the generic pieces every resource plugs into:
//!
//! - **[`RestResource`] trait**: the statically bound descriptor (path, envelope key)
//! - **[`CreatableResource`] marker trait**: resources that can be created with a POST
//! - **[`ResourceContainer`] trait**: list shapes returned by reads, with their query parameter set
//! - **[`QueryParam`] / [`QueryBuilder`]**: resource-scoped, ordered query parameters
//! - **[`envelope`]**: single-key JSON envelope encoding and decoding
//! - **[`ResourceError`]**: tagged failure reasons for resource operations
//!
//! Individual resources (Product, Order, Webhook, ...) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{ClientConfig, RestClient};
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{OrderQuery, OrderStatus, Orders, Webhook};
//!
//! let client = RestClient::new(&ClientConfig::new("token", "my-store")?)?;
//!
//! // Read closed orders
//! let query = QueryBuilder::<Orders>::new()
//!     .add(OrderQuery::Limit(3))
//!     .add(OrderQuery::Status(OrderStatus::Closed));
//! let orders = client.read(&query).await?;
//!
//! // Create then delete a webhook
//! let webhook = client
//!     .create(&Webhook::new("orders/create", "https://example.com/hooks"))
//!     .await?;
//! client.delete(&webhook).await?;
//! ```

pub mod envelope;
mod errors;
mod query;
mod resource;

pub mod resources;

pub use errors::ResourceError;
pub use query::{encode_query_items, QueryBuilder, QueryParam};
pub use resource::{CreatableResource, ResourceContainer, RestResource};
