//! Web Browser SSO profile validation of SAML Responses.
//!
//! Runs after schema validation and signature verification. The checks are
//! applied in a fixed order and the first failure rejects the Response:
//!
//! 1. The Response `Issuer`, if present, names the trusted IdP.
//! 2. The Response contains at least one assertion.
//! 3. A signed Response delivered over HTTP POST carries the ACS URL as its
//!    `Destination`.
//! 4. Every assertion has a trusted `Issuer` and, over HTTP POST, a signature.
//!    Assertions with an `AuthnStatement` must have valid bearer
//!    confirmations and an audience restriction naming this SP.
//! 5. At least one authentication assertion matched a subject.
//!
//! Replay detection and `SessionNotOnOrAfter` enforcement are left to the
//! caller.

mod audience;
mod issuer;
mod subject;
mod violation;

use chrono::{DateTime, Utc};

use crate::config::SsoValidatorConfig;
use crate::error::{SamlError, SamlResult};
use crate::types::{Conditions, Response, SamlBinding, Subject};

pub(crate) use violation::{RuleResult, Violation};

/// Validates SAML Responses against the Web Browser SSO profile.
///
/// Holds only its configuration, so one instance can be shared across
/// threads and reused for any number of Responses.
#[derive(Debug, Clone)]
pub struct SsoResponseValidator {
    config: SsoValidatorConfig,
}

impl SsoResponseValidator {
    /// Creates a validator for the given expectations.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::Config`] if a mandatory expectation is empty.
    pub fn new(config: SsoValidatorConfig) -> SamlResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configured expectations.
    #[must_use]
    pub const fn config(&self) -> &SsoValidatorConfig {
        &self.config
    }

    /// Validates a Response using the current time.
    ///
    /// `post_binding` must be true when the Response arrived over HTTP POST.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::InvalidSecurity`] if any rule is violated.
    pub fn validate(&self, response: &Response, post_binding: bool) -> SamlResult<()> {
        self.validate_at(response, post_binding, Utc::now())
    }

    /// Validates a Response that arrived over the given binding.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::InvalidSecurity`] if any rule is violated.
    pub fn validate_binding(&self, response: &Response, binding: SamlBinding) -> SamlResult<()> {
        self.validate(response, binding.is_post())
    }

    /// Validates a Response, comparing every timestamp against `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::InvalidSecurity`] if any rule is violated.
    pub fn validate_at(
        &self,
        response: &Response,
        post_binding: bool,
        now: DateTime<Utc>,
    ) -> SamlResult<()> {
        match Rules::new(&self.config, now).validate_response(response, post_binding) {
            Ok(()) => {
                tracing::trace!(
                    response_id = %response.id,
                    assertions = response.assertions.len(),
                    "SAML response accepted"
                );
                Ok(())
            }
            Err(violation) => {
                tracing::debug!(
                    response_id = %response.id,
                    %violation,
                    "SAML response rejected"
                );
                Err(SamlError::InvalidSecurity)
            }
        }
    }

    /// Validates the subject of an authentication assertion.
    ///
    /// Returns `Ok(false)` if the subject has no subject confirmations at
    /// all, and `Ok(true)` once every bearer confirmation has valid data.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::InvalidSecurity`] if a bearer confirmation is
    /// invalid.
    pub fn validate_authentication_subject(
        &self,
        subject: &Subject,
        now: DateTime<Utc>,
    ) -> SamlResult<bool> {
        Rules::new(&self.config, now)
            .validate_authentication_subject(subject)
            .map_err(reject)
    }

    /// Checks that the conditions restrict the audience to this SP.
    ///
    /// # Errors
    ///
    /// Returns [`SamlError::InvalidSecurity`] if the conditions are missing or
    /// no audience restriction names this SP.
    pub fn validate_audience_restriction_condition(
        &self,
        conditions: Option<&Conditions>,
    ) -> SamlResult<()> {
        Rules::untimed(&self.config)
            .validate_audience_restriction_condition(conditions)
            .map_err(reject)
    }
}

fn reject(violation: Violation) -> SamlError {
    tracing::debug!(%violation, "SAML assertion rejected");
    SamlError::InvalidSecurity
}

/// The rule set bound to one configuration and one observation of "now".
pub(crate) struct Rules<'a> {
    config: &'a SsoValidatorConfig,
    now: DateTime<Utc>,
}

impl<'a> Rules<'a> {
    pub(crate) const fn new(config: &'a SsoValidatorConfig, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }

    /// Rules for checks that never compare against the clock.
    pub(crate) const fn untimed(config: &'a SsoValidatorConfig) -> Self {
        Self::new(config, DateTime::<Utc>::MIN_UTC)
    }

    pub(crate) fn validate_response(&self, response: &Response, post_binding: bool) -> RuleResult {
        if let Some(issuer) = &response.issuer {
            self.validate_issuer(issuer)?;
        }

        if response.assertions.is_empty() {
            return Err(Violation::NoAssertions);
        }

        if post_binding
            && response.signed
            && response.destination.as_deref() != Some(self.config.assertion_consumer_url())
        {
            return Err(Violation::DestinationMismatch {
                expected: self.config.assertion_consumer_url().to_string(),
                actual: response.destination.clone(),
            });
        }

        let mut found_valid_subject = false;
        for assertion in &response.assertions {
            let issuer = assertion
                .issuer
                .as_ref()
                .ok_or_else(|| Violation::MissingAssertionIssuer(assertion.id.clone()))?;
            self.validate_issuer(issuer)?;

            if post_binding && !assertion.is_signed() {
                return Err(Violation::UnsignedAssertion(assertion.id.clone()));
            }

            if !assertion.is_authentication_assertion() {
                continue;
            }

            // A missing subject has no confirmations either.
            let matched = match &assertion.subject {
                Some(subject) => self.validate_authentication_subject(subject)?,
                None => false,
            };
            if matched {
                self.validate_audience_restriction_condition(assertion.conditions.as_ref())?;
                found_valid_subject = true;
            }
        }

        if found_valid_subject {
            Ok(())
        } else {
            Err(Violation::NoAuthenticatedSubject)
        }
    }
}
