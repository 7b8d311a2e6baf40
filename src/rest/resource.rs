//! Resource descriptors.
//!
//! Every record type binds its URL path segment and JSON envelope key as
//! associated constants of [`RestResource`]. The pipeline only accepts types
//! implementing these traits, so an unmapped resource can never reach it.
//!
//! # Example: Defining a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::{CreatableResource, QueryParam, ResourceContainer, RestResource};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Page {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub title: String,
//! }
//!
//! impl RestResource for Page {
//!     type Id = u64;
//!
//!     const NAME: &'static str = "Page";
//!     const PATH: &'static str = "pages";
//!     const KEY: &'static str = "page";
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! impl CreatableResource for Page {}
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! pub enum PageQuery {
//!     Limit(u32),
//! }
//!
//! impl QueryParam for PageQuery {
//!     fn to_query_item(&self) -> (&'static str, String) {
//!         match self {
//!             Self::Limit(limit) => ("limit", limit.to_string()),
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Pages {
//!     pub pages: Vec<Page>,
//! }
//!
//! impl ResourceContainer for Pages {
//!     type Resource = Page;
//!     type Query = PageQuery;
//!
//!     fn records(&self) -> &[Page] {
//!         &self.pages
//!     }
//!
//!     fn into_records(self) -> Vec<Page> {
//!         self.pages
//!     }
//! }
//! ```

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

use crate::rest::QueryParam;

/// A REST resource record with a statically bound descriptor.
///
/// # Associated Constants
///
/// - `NAME`: human readable singular name (e.g. "Webhook"), used in errors and logs
/// - `PATH`: the URL path segment (e.g. "webhooks")
/// - `KEY`: the JSON envelope key for single records (e.g. "webhook")
pub trait RestResource: DeserializeOwned + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The singular display name of the resource.
    const NAME: &'static str;

    /// The URL path segment under `/admin/`.
    const PATH: &'static str;

    /// The JSON envelope key wrapping a single record.
    const KEY: &'static str;

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for records that have not been created yet.
    fn get_id(&self) -> Option<Self::Id>;
}

/// Marker trait for resources that can be created with a POST.
///
/// The record is serialized inside a `{ KEY: record }` envelope.
pub trait CreatableResource: RestResource + Serialize {}

/// The list shape returned when reading a resource collection.
///
/// A container decodes directly from the top-level response object (e.g.
/// `{"products": [...]}`) and fixes which query parameters may be used to
/// read it.
pub trait ResourceContainer: DeserializeOwned + Send + Sized {
    /// The record type held by this container.
    type Resource: RestResource;

    /// The closed set of query parameters valid for this container.
    type Query: QueryParam;

    /// Returns the records held by this container.
    fn records(&self) -> &[Self::Resource];

    /// Consumes the container, returning its records.
    fn into_records(self) -> Vec<Self::Resource>;
}
