//! HTTP layer for Shopify Admin REST communication.
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: the typed request pipeline (`read`, `create`, `delete`)
//! - [`HttpTransport`]: the "send a request, get a response" capability
//! - [`ReqwestTransport`]: the production transport built on `reqwest`
//! - [`HttpRequest`] / [`HttpResponse`]: fully resolved requests and raw responses
//! - [`TransportError`]: failures that produced no response
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};
//!
//! let transport = ReqwestTransport::new()?;
//! let response = transport
//!     .send(HttpRequest::new(HttpMethod::Get, "https://my-store.myshopify.com/admin/shop.json"))
//!     .await?;
//! println!("{} {}", response.code, response.body);
//! ```

mod errors;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::TransportError;
pub use http_request::{HttpMethod, HttpRequest, CONTENT_TYPE_JSON};
pub use http_response::HttpResponse;
pub use transport::{HttpTransport, ReqwestTransport};

pub use rest::{RestClient, CLIENT_VERSION};
