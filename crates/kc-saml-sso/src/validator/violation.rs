//! Diagnostic reasons for rejecting a Response.
//!
//! These never leave the crate: the validator logs them and reports the
//! uniform [`crate::SamlError::InvalidSecurity`] instead.

use thiserror::Error;

/// Result of a single Web SSO rule.
pub(crate) type RuleResult<T = ()> = Result<T, Violation>;

/// The Web SSO rule a Response broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum Violation {
    #[error("issuer '{actual}' does not match the trusted identity provider '{expected}'")]
    IssuerMismatch { expected: String, actual: String },

    #[error("issuer format '{0}' is not the entity name ID format")]
    IssuerFormat(String),

    #[error("the response must contain at least one assertion")]
    NoAssertions,

    #[error("destination {actual:?} does not match the assertion consumer URL '{expected}'")]
    DestinationMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("assertion '{0}' has no issuer")]
    MissingAssertionIssuer(String),

    #[error("assertion '{0}' is unsigned but was delivered over the HTTP POST binding")]
    UnsignedAssertion(String),

    #[error("bearer subject confirmation has no subject confirmation data")]
    MissingConfirmationData,

    #[error("recipient {actual:?} does not match the assertion consumer URL '{expected}'")]
    RecipientMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("subject confirmation data has no NotOnOrAfter or it has expired")]
    ConfirmationExpired,

    #[error("subject confirmation address '{actual}' does not match client address {expected:?}")]
    AddressMismatch {
        expected: Option<String>,
        actual: String,
    },

    #[error("bearer subject confirmation data must not contain NotBefore")]
    NotBeforePresent,

    #[error("InResponseTo {actual:?} does not match the original request id '{expected}'")]
    InResponseToMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("authentication assertion has no conditions")]
    MissingConditions,

    #[error("no audience restriction names the service provider '{0}'")]
    AudienceMismatch(String),

    #[error("no authentication statement matched a bearer subject")]
    NoAuthenticatedSubject,
}
