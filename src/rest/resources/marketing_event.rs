//! Marketing event resource implementation.
//!
//! Marketing events record campaigns (ads, posts, newsletters, ...) that
//! drive traffic to the store. `started_at` and `ended_at` are encoded as
//! RFC 3339 timestamps in both directions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{CreatableResource, QueryParam, ResourceContainer, RestResource};

/// The kind of marketing activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MarketingEventType {
    Ad,
    Post,
    Message,
    Retargeting,
    Transactional,
    Affiliate,
    Loyalty,
    Newsletter,
    AbandonedCart,
    Receipt,
}

/// The channel a marketing event ran on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MarketingChannel {
    Search,
    Display,
    Social,
    Email,
    Referral,
}

/// A marketing event in a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketingEvent {
    /// The unique identifier of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// A description of the event.
    pub description: String,

    /// The kind of marketing activity.
    pub event_type: MarketingEventType,

    /// The channel the event ran on.
    pub marketing_channel: MarketingChannel,

    /// Whether the event was paid for.
    pub paid: bool,

    /// When the event started.
    pub started_at: DateTime<Utc>,

    /// When the event ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    /// The domain the traffic came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_domain: Option<String>,

    /// The UTM campaign name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,

    /// The UTM source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,

    /// The UTM medium.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
}

impl MarketingEvent {
    /// Creates an unsaved marketing event with the required fields.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        event_type: MarketingEventType,
        marketing_channel: MarketingChannel,
        paid: bool,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            event_type,
            marketing_channel,
            paid,
            started_at,
            ended_at: None,
            referring_domain: None,
            utm_campaign: None,
            utm_source: None,
            utm_medium: None,
        }
    }
}

impl RestResource for MarketingEvent {
    type Id = u64;

    const NAME: &'static str = "MarketingEvent";
    const PATH: &'static str = "marketing_events";
    const KEY: &'static str = "marketing_event";

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl CreatableResource for MarketingEvent {}

/// The response shape of `GET marketing_events.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MarketingEvents {
    pub marketing_events: Vec<MarketingEvent>,
}

impl ResourceContainer for MarketingEvents {
    type Resource = MarketingEvent;
    type Query = MarketingEventQuery;

    fn records(&self) -> &[MarketingEvent] {
        &self.marketing_events
    }

    fn into_records(self) -> Vec<MarketingEvent> {
        self.marketing_events
    }
}

/// Query parameters accepted when reading [`MarketingEvents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketingEventQuery {
    Limit(u32),
    /// Number of events to skip.
    Offset(u32),
}

impl QueryParam for MarketingEventQuery {
    fn to_query_item(&self) -> (&'static str, String) {
        match self {
            Self::Limit(limit) => ("limit", limit.to_string()),
            Self::Offset(offset) => ("offset", offset.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event() -> MarketingEvent {
        MarketingEvent::new(
            "Spring sale",
            MarketingEventType::Ad,
            MarketingChannel::Social,
            true,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_marketing_event_serializes_dates_as_rfc3339() {
        let json = serde_json::to_string(&sample_event()).unwrap();
        assert_eq!(
            json,
            r#"{"description":"Spring sale","event_type":"ad","marketing_channel":"social","paid":true,"started_at":"2024-03-01T12:00:00Z"}"#
        );
    }

    #[test]
    fn test_marketing_event_round_trip() {
        let mut event = sample_event();
        event.id = Some(998730532);
        event.ended_at = Some(Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap());
        event.utm_campaign = Some("spring".to_string());

        let json = serde_json::to_string(&event).unwrap();
        let decoded: MarketingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_enum_literals() {
        assert_eq!(
            serde_json::to_value(MarketingEventType::AbandonedCart).unwrap(),
            "abandoned_cart"
        );
        assert_eq!(
            serde_json::to_value(MarketingChannel::Referral).unwrap(),
            "referral"
        );
    }

    #[test]
    fn test_marketing_event_query_items() {
        assert_eq!(
            MarketingEventQuery::Offset(20).to_query_item(),
            ("offset", "20".to_string())
        );
        assert_eq!(MarketingEvent::PATH, "marketing_events");
        assert_eq!(MarketingEvent::KEY, "marketing_event");
    }
}
