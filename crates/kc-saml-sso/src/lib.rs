//! SAML 2.0 Web Browser SSO response validation for Keycloak Rust.
//!
//! A service provider that receives a SAML Response at its Assertion
//! Consumer Service uses this crate to decide whether the Response may
//! establish a security context. It checks the rules the Web Browser SSO
//! profile places on the Response, its assertions, bearer subject
//! confirmations and audience restrictions.
//!
//! - [`types`] - The parsed Response object graph
//! - [`signature`] - Signature markers carried by signed assertions
//! - [`config`] - Expectations the service provider holds
//! - [`validator`] - The Web SSO profile validator
//! - [`error`] - Error types
//!
//! XML parsing, signature verification, decryption and replay caching happen
//! outside this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use kc_saml_sso::{SsoResponseValidator, SsoValidatorConfig};
//!
//! let config = SsoValidatorConfig::builder()
//!     .issuer_idp("https://idp.example")
//!     .assertion_consumer_url("https://sp.example/acs")
//!     .client_address(peer_ip)
//!     .request_id(authn_request_id)
//!     .sp_identifier("https://sp.example")
//!     .build()?;
//!
//! SsoResponseValidator::new(config)?.validate(&response, true)?;
//! ```
//!
//! # SAML Specifications
//!
//! - [SAML 2.0 Core](https://docs.oasis-open.org/security/saml/v2.0/saml-core-2.0-os.pdf)
//! - [SAML 2.0 Profiles](https://docs.oasis-open.org/security/saml/v2.0/saml-profiles-2.0-os.pdf)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod signature;
pub mod types;
pub mod validator;

pub use config::{SsoValidatorConfig, SsoValidatorConfigBuilder};
pub use error::{SamlError, SamlResult, INVALID_SAML_SECURITY};
pub use types::*;
pub use validator::SsoResponseValidator;
