//! Configuration types for the REST client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: credentials and host settings shared by every request
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`AccessToken`]: a validated access token with masked debug output
//! - [`ShopDomain`]: a validated shop domain
//! - [`HostUrl`]: a validated API host override
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ClientConfig, AccessToken, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.admin_base_url(), "https://my-store.myshopify.com/admin");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};

use crate::error::ConfigError;

/// Configuration for a [`RestClient`](crate::RestClient).
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    access_token: AccessToken,
    shop: ShopDomain,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration from a raw access token and shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is empty or the domain is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::ClientConfig;
    ///
    /// let config = ClientConfig::new("token", "myshop.myshopify.com").unwrap();
    /// assert_eq!(config.shop().as_ref(), "myshop.myshopify.com");
    /// ```
    pub fn new(
        access_token: impl Into<String>,
        domain: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .access_token(AccessToken::new(access_token)?)
            .shop(ShopDomain::new(domain)?)
            .build()
    }

    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the admin base URL without a trailing slash.
    ///
    /// This is `https://{shop}/admin`, or `{api_host origin}/admin` when an
    /// API host override is configured.
    #[must_use]
    pub fn admin_base_url(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}/admin", self.shop),
            |host| format!("{}/admin", host.origin()),
        )
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `access_token` and `shop` are required.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    access_token: Option<AccessToken>,
    shop: Option<ShopDomain>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sends requests to this host instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` or
    /// `shop` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;

        Ok(ClientConfig {
            access_token,
            shop,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
