//! Issuer rule, shared by the Response and every Assertion.

use super::{Rules, RuleResult, Violation};
use crate::types::{Issuer, NameIdFormat};

impl Rules<'_> {
    /// The issuer must be the trusted IdP and, if a format is given, it must
    /// be the entity format.
    pub(crate) fn validate_issuer(&self, issuer: &Issuer) -> RuleResult {
        if issuer.value != self.config.issuer_idp() {
            return Err(Violation::IssuerMismatch {
                expected: self.config.issuer_idp().to_string(),
                actual: issuer.value.clone(),
            });
        }

        match issuer.format.as_deref() {
            Some(format) if format != NameIdFormat::Entity.uri() => {
                Err(Violation::IssuerFormat(format.to_string()))
            }
            _ => Ok(()),
        }
    }
}
