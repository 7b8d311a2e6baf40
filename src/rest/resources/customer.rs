//! Customer resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{CreatableResource, QueryParam, ResourceContainer, RestResource};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub email: String,
    pub accepts_marketing: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for Customer {
    type Id = u64;

    const NAME: &'static str = "Customer";
    const PATH: &'static str = "customers";
    const KEY: &'static str = "customer";

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl CreatableResource for Customer {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customers {
    pub customers: Vec<Customer>,
}

impl ResourceContainer for Customers {
    type Resource = Customer;
    type Query = CustomerQuery;

    fn records(&self) -> &[Customer] {
        &self.customers
    }

    fn into_records(self) -> Vec<Customer> {
        self.customers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerQuery {
    Limit(u32),
    Page(u32),
}

impl QueryParam for CustomerQuery {
    fn to_query_item(&self) -> (&'static str, String) {
        match self {
            Self::Limit(limit) => ("limit", limit.to_string()),
            Self::Page(page) => ("page", page.to_string()),
        }
    }
}
