//! REST resource implementations.
//!
//! Each resource module provides three types:
//!
//! - the record (`Product`), which implements [`RestResource`](crate::rest::RestResource)
//!   and, for resources that can be created, [`CreatableResource`](crate::rest::CreatableResource)
//! - the container (`Products`), the list shape returned by reads
//! - the query enum (`ProductQuery`), the parameters a read of that container accepts
//!
//! | Record | Container | Query | Path | Envelope key |
//! |--------|-----------|-------|------|--------------|
//! | [`Product`] | [`Products`] | [`ProductQuery`] | `products` | `product` |
//! | [`Order`] | [`Orders`] | [`OrderQuery`] | `orders` | `order` |
//! | [`Webhook`] | [`Webhooks`] | [`WebhookQuery`] | `webhooks` | `webhook` |
//! | [`Customer`] | [`Customers`] | [`CustomerQuery`] | `customers` | `customer` |
//! | [`MarketingEvent`] | [`MarketingEvents`] | [`MarketingEventQuery`] | `marketing_events` | `marketing_event` |
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Webhook, Webhooks};
//!
//! assert_eq!(Webhook::PATH, "webhooks");
//! assert_eq!(Webhook::KEY, "webhook");
//!
//! let page: Webhooks = serde_json::from_str(r#"{"webhooks":[]}"#).unwrap();
//! assert!(page.webhooks.is_empty());
//! ```

mod customer;
mod marketing_event;
mod order;
mod product;
mod webhook;

pub use customer::{Customer, CustomerQuery, Customers};
pub use marketing_event::{
    MarketingChannel, MarketingEvent, MarketingEventQuery, MarketingEventType, MarketingEvents,
};
pub use order::{Order, OrderQuery, OrderStatus, Orders};
pub use product::{Product, ProductQuery, Products};
pub use webhook::{Webhook, WebhookQuery, Webhooks};
