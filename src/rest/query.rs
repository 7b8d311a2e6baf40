//! Resource-scoped query parameters and the query builder.
//!
//! Each resource defines its own parameter enum and implements
//! [`QueryParam`] for it. A [`QueryBuilder`] is parameterized by a
//! [`ResourceContainer`] and only accepts that container's `Query` type, so an
//! orders-only filter cannot be attached to a products query:
//!
//! ```rust,compile_fail
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{OrderQuery, OrderStatus, Products};
//!
//! let builder = QueryBuilder::<Products>::new().add(OrderQuery::Status(OrderStatus::Closed));
//! ```
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{OrderQuery, OrderStatus, Orders};
//!
//! let builder = QueryBuilder::<Orders>::new()
//!     .add(OrderQuery::Limit(3))
//!     .add(OrderQuery::Status(OrderStatus::Closed));
//!
//! assert_eq!(builder.to_query_string(), "limit=3&status=closed");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::rest::ResourceContainer;

/// A single query parameter variant.
///
/// Each variant serializes to exactly one `(key, value)` pair. Integers render
/// as decimal and enumerated values as their lowercase literal.
pub trait QueryParam: Clone + fmt::Debug + Send + Sync {
    /// Returns the `(key, value)` pair for this parameter.
    fn to_query_item(&self) -> (&'static str, String);
}

/// An ordered, append-only list of query parameters for one container type.
///
/// Parameters are emitted in the order they were added. Repeated keys are not
/// merged or deduplicated. A builder can be cloned and reused for several
/// requests.
pub struct QueryBuilder<C: ResourceContainer> {
    params: Vec<C::Query>,
    _container: PhantomData<fn() -> C>,
}

impl<C: ResourceContainer> QueryBuilder<C> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: Vec::new(),
            _container: PhantomData,
        }
    }

    /// Returns the builder with `param` appended.
    #[must_use]
    pub fn add(mut self, param: C::Query) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameters in append order.
    #[must_use]
    pub fn params(&self) -> &[C::Query] {
        &self.params
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the `(key, value)` pairs in append order.
    #[must_use]
    pub fn query_items(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|param| {
                let (key, value) = param.to_query_item();
                (key.to_string(), value)
            })
            .collect()
    }

    /// Returns the query string, without a leading `?`.
    ///
    /// Keys and values are percent-encoded; alphanumeric values are emitted
    /// unchanged.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        encode_query_items(&self.query_items())
    }
}

/// Joins `(key, value)` pairs into a percent-encoded `k=v&k=v` string.
#[must_use]
pub fn encode_query_items(items: &[(String, String)]) -> String {
    items
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

impl<C: ResourceContainer> Default for QueryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ResourceContainer> Clone for QueryBuilder<C> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            _container: PhantomData,
        }
    }
}

impl<C: ResourceContainer> fmt::Debug for QueryBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("resource", &<C::Resource as crate::rest::RestResource>::NAME)
            .field("params", &self.params)
            .finish()
    }
}
