//! Product resource implementation.
//!
//! Products are the goods or services that merchants sell. This module
//! provides the [`Product`] record, the [`Products`] container returned by
//! reads, and the [`ProductQuery`] parameters accepted when reading it.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::QueryBuilder;
//! use shopify_rest::rest::resources::{ProductQuery, Products};
//!
//! let query = QueryBuilder::<Products>::new()
//!     .add(ProductQuery::Limit(5))
//!     .add(ProductQuery::Page(2));
//!
//! let products = client.read(&query).await?;
//! for product in &products.products {
//!     println!("- {}", product.title);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{CreatableResource, QueryParam, ResourceContainer, RestResource};

/// A product in a Shopify store.
///
/// Only `title` is required; every other field is omitted from request
/// bodies when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the product.
    pub title: String,

    /// The description of the product, in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// A unique, human-friendly string for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates an unsaved product with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl RestResource for Product {
    type Id = u64;

    const NAME: &'static str = "Product";
    const PATH: &'static str = "products";
    const KEY: &'static str = "product";

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl CreatableResource for Product {}

/// The response shape of `GET products.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Products {
    /// The products on this page.
    pub products: Vec<Product>,
}

impl ResourceContainer for Products {
    type Resource = Product;
    type Query = ProductQuery;

    fn records(&self) -> &[Product] {
        &self.products
    }

    fn into_records(self) -> Vec<Product> {
        self.products
    }
}

/// Query parameters accepted when reading [`Products`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    /// Maximum number of results to return.
    Limit(u32),
    /// The page of results to return.
    Page(u32),
    /// Filter by product title.
    Title(String),
    /// Filter by product vendor.
    Vendor(String),
}

impl QueryParam for ProductQuery {
    fn to_query_item(&self) -> (&'static str, String) {
        match self {
            Self::Limit(limit) => ("limit", limit.to_string()),
            Self::Page(page) => ("page", page.to_string()),
            Self::Title(title) => ("title", title.clone()),
            Self::Vendor(vendor) => ("vendor", vendor.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_descriptor_constants() {
        assert_eq!(Product::NAME, "Product");
        assert_eq!(Product::PATH, "products");
        assert_eq!(Product::KEY, "product");
    }

    #[test]
    fn test_products_container_decodes_top_level_object() {
        let json = r#"{"products":[{"title":"Mug"},{"title":"Cup"}]}"#;
        let products: Products = serde_json::from_str(json).unwrap();

        assert_eq!(products.records().len(), 2);
        assert_eq!(products.products.first().unwrap().title, "Mug");
        assert_eq!(products.products.last().unwrap().title, "Cup");
        assert_eq!(products.products[0].id, None);
    }

    #[test]
    fn test_product_deserialization_from_api_response() {
        let json = r#"{
            "id": 632910392,
            "title": "IPod Nano - 8GB",
            "body_html": "<p>It's the small iPod.</p>",
            "vendor": "Apple",
            "product_type": "Cult Products",
            "handle": "ipod-nano",
            "tags": "Emotive, Flash Memory",
            "created_at": "2024-01-02T09:28:43Z",
            "updated_at": "2024-01-02T09:28:43Z",
            "status": "active"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.get_id(), Some(632910392));
        assert_eq!(product.vendor.as_deref(), Some("Apple"));
        assert_eq!(product.handle.as_deref(), Some("ipod-nano"));
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_new_product_serializes_only_title() {
        let json = serde_json::to_string(&Product::new("Mug")).unwrap();
        assert_eq!(json, r#"{"title":"Mug"}"#);
    }

    #[test]
    fn test_product_query_items() {
        assert_eq!(
            ProductQuery::Limit(5).to_query_item(),
            ("limit", "5".to_string())
        );
        assert_eq!(ProductQuery::Page(2).to_query_item(), ("page", "2".to_string()));
        assert_eq!(
            ProductQuery::Title("Mug".into()).to_query_item(),
            ("title", "Mug".to_string())
        );
        assert_eq!(
            ProductQuery::Vendor("Apple".into()).to_query_item(),
            ("vendor", "Apple".to_string())
        );
    }
}
