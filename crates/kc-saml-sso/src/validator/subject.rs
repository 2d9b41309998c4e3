//! Subject and bearer `SubjectConfirmationData` rules.

use super::{Rules, RuleResult, Violation};
use crate::types::{Subject, SubjectConfirmationData};

impl Rules<'_> {
    /// Validates the subject of an authentication assertion.
    ///
    /// Returns `false` when the subject has no confirmation collection at
    /// all. Otherwise every bearer confirmation must carry valid data and the
    /// subject counts as matched, even if no bearer confirmation was present.
    pub(crate) fn validate_authentication_subject(&self, subject: &Subject) -> RuleResult<bool> {
        let Some(confirmations) = subject.subject_confirmations.as_deref() else {
            return Ok(false);
        };

        for confirmation in confirmations.iter().filter(|c| c.is_bearer()) {
            self.validate_subject_confirmation(confirmation.subject_confirmation_data.as_ref())?;
        }

        Ok(true)
    }

    /// Validates the data of a bearer subject confirmation.
    ///
    /// `NotOnOrAfter` is exclusive: data expiring exactly at `now` is rejected.
    pub(crate) fn validate_subject_confirmation(
        &self,
        data: Option<&SubjectConfirmationData>,
    ) -> RuleResult {
        let data = data.ok_or(Violation::MissingConfirmationData)?;

        if data.recipient.as_deref() != Some(self.config.assertion_consumer_url()) {
            return Err(Violation::RecipientMismatch {
                expected: self.config.assertion_consumer_url().to_string(),
                actual: data.recipient.clone(),
            });
        }

        match data.not_on_or_after {
            Some(not_on_or_after) if self.now < not_on_or_after => {}
            _ => return Err(Violation::ConfirmationExpired),
        }

        if let Some(address) = data.address.as_deref() {
            if Some(address) != self.config.client_address() {
                return Err(Violation::AddressMismatch {
                    expected: self.config.client_address().map(str::to_string),
                    actual: address.to_string(),
                });
            }
        }

        if data.not_before.is_some() {
            return Err(Violation::NotBeforePresent);
        }

        if let Some(request_id) = self.config.request_id() {
            if data.in_response_to.as_deref() != Some(request_id) {
                return Err(Violation::InResponseToMismatch {
                    expected: request_id.to_string(),
                    actual: data.in_response_to.clone(),
                });
            }
        }

        Ok(())
    }
}
