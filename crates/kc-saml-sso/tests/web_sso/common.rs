//! Common test fixtures.

use chrono::{DateTime, Duration, Utc};

use kc_saml_sso::signature::XmlSignature;
use kc_saml_sso::{
    Assertion, AuthnStatement, Conditions, NameId, Response, SsoResponseValidator,
    SsoValidatorConfig, SsoValidatorConfigBuilder, Subject, SubjectConfirmation,
    SubjectConfirmationData,
};

pub const IDP: &str = "https://idp.example";
pub const ACS: &str = "https://sp.example/acs";
pub const SP: &str = "https://sp.example";
pub const REQUEST_ID: &str = "req-123";
pub const CLIENT_ADDRESS: &str = "10.0.0.1";

/// Installs a test subscriber so rejection diagnostics show up with
/// `RUST_LOG=kc_saml_sso=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kc_saml_sso=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Configuration matching every field of [`scenario_a`].
pub fn config_builder() -> SsoValidatorConfigBuilder {
    SsoValidatorConfig::builder()
        .issuer_idp(IDP)
        .assertion_consumer_url(ACS)
        .client_address(CLIENT_ADDRESS)
        .request_id(REQUEST_ID)
        .sp_identifier(SP)
}

pub fn validator() -> anyhow::Result<SsoResponseValidator> {
    init_tracing();
    Ok(SsoResponseValidator::new(config_builder().build()?)?)
}

pub fn bearer_data(now: DateTime<Utc>) -> SubjectConfirmationData {
    SubjectConfirmationData::for_request(REQUEST_ID, ACS, now + Duration::minutes(5))
}

/// A signed authentication assertion with a single bearer confirmation.
pub fn authn_assertion(id: &str, data: SubjectConfirmationData) -> Assertion {
    Assertion::with_id(id, IDP)
        .with_signature(XmlSignature::new())
        .with_authn_statement(AuthnStatement::password_protected_transport(Utc::now()))
        .with_subject(
            Subject::new(NameId::email("user@example.com"))
                .with_confirmation(SubjectConfirmation::bearer().with_data(data)),
        )
        .with_conditions(Conditions::default().with_audience(SP))
}

/// One signed assertion, bearer confirmation expiring five minutes after
/// `now`, no address, correlated to [`REQUEST_ID`], audience [`SP`].
pub fn scenario_a(now: DateTime<Utc>) -> Response {
    Response::new(IDP)
        .in_response_to(REQUEST_ID)
        .with_destination(ACS)
        .with_assertion(authn_assertion("_a1", bearer_data(now)))
}

/// Replaces the bearer confirmation data of the first assertion.
pub fn with_first_data(
    mut response: Response,
    edit: impl FnOnce(&mut SubjectConfirmationData),
) -> Response {
    let data = response.assertions[0]
        .subject
        .as_mut()
        .and_then(|s| s.subject_confirmations.as_mut())
        .and_then(|c| c.first_mut())
        .and_then(|c| c.subject_confirmation_data.as_mut())
        .expect("fixture has bearer confirmation data");
    edit(data);
    response
}
