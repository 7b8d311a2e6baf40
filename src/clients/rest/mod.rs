//! REST request pipeline for the Shopify Admin API.
//!
//! [`RestClient`] maps typed resource operations onto HTTP requests:
//!
//! | Operation | Method | URL | Body |
//! |-----------|--------|-----|------|
//! | `read` / `read_all` | GET | `{base}/{path}.json[?query]` | none |
//! | `create` | POST | `{base}/{path}.json` | `{key: record}` |
//! | `delete` | DELETE | `{base}/{path}/{id}.json` | none |
//!
//! Each operation also has a callback form (`read_then`, `read_all_then`,
//! `create_then`, `delete_then`) that runs it on a spawned Tokio task.

mod client;

pub use client::{RestClient, CLIENT_VERSION};
