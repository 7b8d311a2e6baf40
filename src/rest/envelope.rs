//! Single-key JSON envelopes.
//!
//! Create requests and responses wrap one record under the resource's
//! envelope key: `{"webhook": {...}}`. The record's own field order is kept
//! when encoding.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::rest::{CreatableResource, ResourceError, RestResource};

struct Envelope<'a, R> {
    key: &'static str,
    record: &'a R,
}

impl<R: Serialize> Serialize for Envelope<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.record)?;
        map.end()
    }
}

/// Encodes `record` as `{ R::KEY: record }`.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if the record cannot be serialized.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::envelope;
/// use shopify_rest::rest::resources::Webhook;
///
/// let webhook = Webhook::new("orders/create", "https://example.com/hook");
/// let body = envelope::wrap(&webhook).unwrap();
/// assert_eq!(body, r#"{"webhook":{"topic":"orders/create","address":"https://example.com/hook"}}"#);
/// ```
pub fn wrap<R: CreatableResource>(record: &R) -> Result<String, ResourceError> {
    serde_json::to_string(&Envelope {
        key: R::KEY,
        record,
    })
    .map_err(|source| ResourceError::Encode {
        resource: R::NAME,
        source,
    })
}

/// Decodes the record stored under `R::KEY` in `body`.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if `body` is not a JSON object or the
/// record does not match `R`, and [`ResourceError::MissingEnvelopeKey`] if the
/// expected key is absent.
pub fn unwrap<R: RestResource>(body: &str) -> Result<R, ResourceError> {
    let decode_error = |source| ResourceError::Decode {
        resource: R::NAME,
        source,
    };

    let mut envelope: HashMap<String, serde_json::Value> =
        serde_json::from_str(body).map_err(decode_error)?;

    let value = envelope
        .remove(R::KEY)
        .ok_or(ResourceError::MissingEnvelopeKey { key: R::KEY })?;

    serde_json::from_value(value).map_err(decode_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{Customer, Webhook};

    #[test]
    fn test_wrap_uses_resource_key_and_field_order() {
        let webhook = Webhook::new("customers/update", "https://www.ngrok.com/webhook/customer_update");
        let body = wrap(&webhook).unwrap();
        assert_eq!(
            body,
            r#"{"webhook":{"topic":"customers/update","address":"https://www.ngrok.com/webhook/customer_update"}}"#
        );
    }

    #[test]
    fn test_unwrap_round_trips_including_absent_fields() {
        let customer = Customer {
            id: None,
            email: "bob@example.com".to_string(),
            accepts_marketing: true,
            first_name: "Bob".to_string(),
            last_name: None,
            ..Default::default()
        };

        let body = wrap(&customer).unwrap();
        let decoded: Customer = unwrap(&body).unwrap();
        assert_eq!(decoded, customer);
    }

    #[test]
    fn test_unwrap_missing_key_is_an_error() {
        let result: Result<Webhook, _> = unwrap(r#"{"customer":{"email":"a@b.c"}}"#);
        assert!(matches!(
            result,
            Err(ResourceError::MissingEnvelopeKey { key: "webhook" })
        ));
    }

    #[test]
    fn test_unwrap_malformed_json_is_decode_error() {
        let result: Result<Webhook, _> = unwrap("not json");
        assert!(matches!(
            result,
            Err(ResourceError::Decode {
                resource: "Webhook",
                ..
            })
        ));

        let result: Result<Webhook, _> = unwrap(r#"{"webhook": 42}"#);
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }
}
