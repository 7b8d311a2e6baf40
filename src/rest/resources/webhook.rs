//! Webhook resource implementation.
//!
//! A webhook subscription asks the store to POST a notification to `address`
//! whenever `topic` occurs.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Webhook;
//!
//! let webhook = client
//!     .create(&Webhook::new("orders/create", "https://example.com/webhooks/orders"))
//!     .await?;
//!
//! client.delete(&webhook).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{CreatableResource, QueryParam, ResourceContainer, RestResource};

/// A webhook subscription in a Shopify store.
///
/// # Fields
///
/// - `topic` - the event that triggers the webhook (e.g. "orders/create")
/// - `address` - the URL where payloads will be sent
/// - `format` - the payload format ("json" or "xml")
///
/// `id`, `created_at` and `updated_at` are assigned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The unique identifier of the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The event that triggers the webhook.
    pub topic: String,

    /// The URL where webhook payloads will be sent.
    pub address: String,

    /// The format of the webhook payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// When the webhook was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the webhook was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Webhook {
    /// Creates an unsaved webhook subscription.
    #[must_use]
    pub fn new(topic: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    /// Returns a copy of this webhook carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

impl RestResource for Webhook {
    type Id = u64;

    const NAME: &'static str = "Webhook";
    const PATH: &'static str = "webhooks";
    const KEY: &'static str = "webhook";

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl CreatableResource for Webhook {}

/// The response shape of `GET webhooks.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhooks {
    /// The webhooks on this page.
    pub webhooks: Vec<Webhook>,
}

impl ResourceContainer for Webhooks {
    type Resource = Webhook;
    type Query = WebhookQuery;

    fn records(&self) -> &[Webhook] {
        &self.webhooks
    }

    fn into_records(self) -> Vec<Webhook> {
        self.webhooks
    }
}

/// Query parameters accepted when reading [`Webhooks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookQuery {
    /// Maximum number of results to return.
    Limit(u32),
    /// The page of results to return.
    Page(u32),
    /// Filter by topic, e.g. "orders/create".
    Topic(String),
    /// Filter by delivery address.
    Address(String),
}

impl QueryParam for WebhookQuery {
    fn to_query_item(&self) -> (&'static str, String) {
        match self {
            Self::Limit(limit) => ("limit", limit.to_string()),
            Self::Page(page) => ("page", page.to_string()),
            Self::Topic(topic) => ("topic", topic.clone()),
            Self::Address(address) => ("address", address.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_serialization_omits_absent_fields() {
        let webhook = Webhook::new("order-create", "https://example.com/order");
        let json = serde_json::to_string(&webhook).unwrap();
        assert_eq!(
            json,
            r#"{"topic":"order-create","address":"https://example.com/order"}"#
        );
    }

    #[test]
    fn test_webhook_serialization_keeps_id_when_present() {
        let webhook = Webhook::new("order-create", "https://example.com/order").with_id(3);
        let json = serde_json::to_value(&webhook).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(webhook.get_id(), Some(3));
    }

    #[test]
    fn test_webhook_deserialization_from_api_response() {
        let json = r#"{
            "id": 4759306,
            "address": "https://example.com/webhooks/orders",
            "topic": "orders/create",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-06-20T15:45:00Z",
            "format": "json",
            "api_version": "2025-10"
        }"#;

        let webhook: Webhook = serde_json::from_str(json).unwrap();
        assert_eq!(webhook.id, Some(4759306));
        assert_eq!(webhook.topic, "orders/create");
        assert_eq!(webhook.format.as_deref(), Some("json"));
        assert!(webhook.created_at.is_some());
        assert!(webhook.updated_at.is_some());
    }

    #[test]
    fn test_webhook_query_items() {
        assert_eq!(
            WebhookQuery::Limit(10).to_query_item(),
            ("limit", "10".to_string())
        );
        assert_eq!(
            WebhookQuery::Topic("orders/create".into()).to_query_item(),
            ("topic", "orders/create".to_string())
        );
        assert_eq!(
            WebhookQuery::Address("https://example.com".into()).to_query_item(),
            ("address", "https://example.com".to_string())
        );
    }

    #[test]
    fn test_webhook_descriptor_constants() {
        assert_eq!(Webhook::NAME, "Webhook");
        assert_eq!(Webhook::PATH, "webhooks");
        assert_eq!(Webhook::KEY, "webhook");
    }
}
