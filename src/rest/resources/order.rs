//! Order resource implementation.
//!
//! Orders represent completed checkout transactions. Reads of [`Orders`] can
//! be filtered by [`OrderStatus`], a filter no other resource accepts.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{OrderQuery, OrderStatus, Orders};
//!
//! let query = QueryBuilder::<Orders>::new()
//!     .add(OrderQuery::Limit(3))
//!     .add(OrderQuery::Status(OrderStatus::Closed));
//!
//! let orders = client.read(&query).await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{CreatableResource, QueryParam, ResourceContainer, RestResource};

/// The status filter for order reads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Only open orders.
    Open,
    /// Only closed orders.
    Closed,
    /// Orders of any status.
    Any,
    /// Only cancelled orders.
    Cancelled,
}

impl OrderStatus {
    /// Returns the literal sent in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Any => "any",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order in a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The order name, e.g. "#1001".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// An optional note attached to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// The total price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    /// The three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The payment status, e.g. "paid".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// When the order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,

    /// When the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl RestResource for Order {
    type Id = u64;

    const NAME: &'static str = "Order";
    const PATH: &'static str = "orders";
    const KEY: &'static str = "order";

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl CreatableResource for Order {}

/// The response shape of `GET orders.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Orders {
    /// The orders on this page.
    pub orders: Vec<Order>,
}

impl ResourceContainer for Orders {
    type Resource = Order;
    type Query = OrderQuery;

    fn records(&self) -> &[Order] {
        &self.orders
    }

    fn into_records(self) -> Vec<Order> {
        self.orders
    }
}

/// Query parameters accepted when reading [`Orders`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderQuery {
    /// Maximum number of results to return.
    Limit(u32),
    /// The page of results to return.
    Page(u32),
    /// Filter by order status.
    Status(OrderStatus),
}

impl QueryParam for OrderQuery {
    fn to_query_item(&self) -> (&'static str, String) {
        match self {
            Self::Limit(limit) => ("limit", limit.to_string()),
            Self::Page(page) => ("page", page.to_string()),
            Self::Status(status) => ("status", status.as_str().to_string()),
        }
    }
}
