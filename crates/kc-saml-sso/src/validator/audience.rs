//! Audience restriction rule.

use super::{Rules, RuleResult, Violation};
use crate::types::Conditions;

impl Rules<'_> {
    /// Conditions must be present and some audience restriction must name
    /// this service provider.
    pub(crate) fn validate_audience_restriction_condition(
        &self,
        conditions: Option<&Conditions>,
    ) -> RuleResult {
        let conditions = conditions.ok_or(Violation::MissingConditions)?;

        if conditions.permits_audience(self.config.sp_identifier()) {
            Ok(())
        } else {
            Err(Violation::AudienceMismatch(
                self.config.sp_identifier().to_string(),
            ))
        }
    }
}
