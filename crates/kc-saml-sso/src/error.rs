//! SAML error types.
//!
//! Every Web SSO rule violation surfaces as the same
//! [`SamlError::InvalidSecurity`] error. The specific rule that failed is
//! logged at debug level and never returned, so a caller cannot leak to an
//! attacker which check tripped.

use thiserror::Error;

/// Result type for SAML operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// Fixed failure code reported for every rejected response.
pub const INVALID_SAML_SECURITY: &str = "invalidSAMLsecurity";

/// SAML SSO errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamlError {
    /// The response failed Web SSO profile validation.
    #[error("invalidSAMLsecurity")]
    InvalidSecurity,

    /// The validator configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SamlError {
    /// Returns the stable failure code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSecurity => INVALID_SAML_SECURITY,
            Self::Config(_) => "invalidConfiguration",
        }
    }
}
