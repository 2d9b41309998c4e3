//! Web SSO validator configuration.
//!
//! The expectations a service provider holds about an incoming Response:
//! who must have issued it, where it must be delivered, which client
//! presented it and which request it answers. A configuration is built once
//! and then only read.

use serde::{Deserialize, Serialize};

use crate::error::{SamlError, SamlResult};

/// Expected values checked against an incoming SAML Response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SsoValidatorConfig {
    /// Entity ID of the trusted identity provider.
    issuer_idp: String,

    /// Assertion Consumer Service URL of this service provider.
    assertion_consumer_url: String,

    /// Network address of the client that delivered the Response.
    #[serde(default)]
    client_address: Option<String>,

    /// ID of the AuthnRequest this Response must answer.
    ///
    /// When unset, `InResponseTo` correlation is not enforced
    /// (IdP-initiated SSO).
    #[serde(default)]
    request_id: Option<String>,

    /// Entity ID of this service provider, expected as an audience.
    sp_identifier: String,
}

impl SsoValidatorConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> SsoValidatorConfigBuilder {
        SsoValidatorConfigBuilder::default()
    }

    /// Entity ID of the trusted identity provider.
    #[must_use]
    pub fn issuer_idp(&self) -> &str {
        &self.issuer_idp
    }

    /// Assertion Consumer Service URL.
    #[must_use]
    pub fn assertion_consumer_url(&self) -> &str {
        &self.assertion_consumer_url
    }

    /// Address of the presenting client, if known.
    #[must_use]
    pub fn client_address(&self) -> Option<&str> {
        self.client_address.as_deref()
    }

    /// ID of the originating AuthnRequest, if correlation is enforced.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Entity ID of this service provider.
    #[must_use]
    pub fn sp_identifier(&self) -> &str {
        &self.sp_identifier
    }

    /// Checks that every mandatory expectation is set.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::Config`] naming the first empty mandatory field.
    pub fn validate(&self) -> SamlResult<()> {
        for (name, value) in [
            ("issuer_idp", &self.issuer_idp),
            ("assertion_consumer_url", &self.assertion_consumer_url),
            ("sp_identifier", &self.sp_identifier),
        ] {
            if value.is_empty() {
                return Err(SamlError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Builder for [`SsoValidatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct SsoValidatorConfigBuilder {
    issuer_idp: Option<String>,
    assertion_consumer_url: Option<String>,
    client_address: Option<String>,
    request_id: Option<String>,
    sp_identifier: Option<String>,
}

impl SsoValidatorConfigBuilder {
    /// Sets the trusted identity provider entity ID.
    #[must_use]
    pub fn issuer_idp(mut self, issuer: impl Into<String>) -> Self {
        self.issuer_idp = Some(issuer.into());
        self
    }

    /// Sets the Assertion Consumer Service URL.
    #[must_use]
    pub fn assertion_consumer_url(mut self, url: impl Into<String>) -> Self {
        self.assertion_consumer_url = Some(url.into());
        self
    }

    /// Sets the presenting client's address.
    #[must_use]
    pub fn client_address(mut self, address: impl Into<String>) -> Self {
        self.client_address = Some(address.into());
        self
    }

    /// Sets the originating AuthnRequest ID.
    #[must_use]
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Sets the service provider entity ID expected in audience restrictions.
    #[must_use]
    pub fn sp_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.sp_identifier = Some(identifier.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::Config`] if the issuer, ACS URL or SP identifier
    /// is missing or empty.
    pub fn build(self) -> SamlResult<SsoValidatorConfig> {
        let config = SsoValidatorConfig {
            issuer_idp: self.issuer_idp.unwrap_or_default(),
            assertion_consumer_url: self.assertion_consumer_url.unwrap_or_default(),
            client_address: self.client_address,
            request_id: self.request_id,
            sp_identifier: self.sp_identifier.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
