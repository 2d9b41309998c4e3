//! Profile rules checked through the public API.

use chrono::{Duration, Utc};

use kc_saml_sso::{
    Assertion, Attribute, AttributeStatement, AudienceRestriction, Conditions, Issuer,
    NameIdFormat, Response, SsoResponseValidator, SsoValidatorConfig, Subject,
};

use crate::common::{
    authn_assertion, bearer_data, config_builder, scenario_a, validator, with_first_data, ACS,
    IDP, SP,
};

#[test]
fn response_without_assertions_is_rejected() -> anyhow::Result<()> {
    let validator = validator()?;
    let response = Response::new(IDP).with_destination(ACS);

    assert!(validator.validate(&response, true).is_err());
    assert!(validator.validate(&response, false).is_err());
    Ok(())
}

#[test]
fn assertion_without_issuer_is_rejected_on_any_binding() -> anyhow::Result<()> {
    let validator = validator()?;
    let mut response = scenario_a(Utc::now());
    response.assertions[0].issuer = None;

    assert!(validator.validate(&response, true).is_err());
    assert!(validator.validate(&response, false).is_err());
    Ok(())
}

#[test]
fn issuer_rules_apply_to_response_and_assertions() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();

    let mut anonymous = scenario_a(now);
    anonymous.issuer = None;
    validator.validate_at(&anonymous, true, now)?;

    let foreign = scenario_a(now).with_issuer(Issuer::entity("https://evil.example"));
    assert!(validator.validate_at(&foreign, true, now).is_err());

    let mut foreign_assertion = scenario_a(now);
    foreign_assertion.assertions[0].issuer =
        Some(Issuer::new(IDP).with_format(NameIdFormat::Email));
    assert!(validator.validate_at(&foreign_assertion, true, now).is_err());
    Ok(())
}

#[test]
fn destination_is_exact_for_signed_post_responses() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();

    for destination in [
        Some("https://sp.example/ACS"),
        Some("https://sp.example/acs/"),
        Some("https://sp.example/acs?x=1"),
        None,
    ] {
        let mut response = scenario_a(now).signed(true);
        response.destination = destination.map(str::to_string);

        assert!(
            validator.validate_at(&response, true, now).is_err(),
            "{destination:?} must be rejected over POST"
        );
        validator.validate_at(&response, false, now)?;
    }

    validator.validate_at(&scenario_a(now).signed(true), true, now)?;
    Ok(())
}

#[test]
fn unsigned_response_destination_is_not_checked() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();
    let mut response = scenario_a(now);
    response.destination = Some("https://elsewhere.example/acs".to_string());

    validator.validate_at(&response, true, now)?;
    Ok(())
}

#[test]
fn expired_bearer_confirmation_is_rejected() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();

    let expired = with_first_data(scenario_a(now), |data| {
        data.not_on_or_after = Some(now - Duration::seconds(1));
    });
    assert!(validator.validate_at(&expired, true, now).is_err());

    let fresh = with_first_data(scenario_a(now), |data| {
        data.not_on_or_after = Some(now + Duration::seconds(1));
    });
    validator.validate_at(&fresh, true, now)?;

    let missing = with_first_data(scenario_a(now), |data| data.not_on_or_after = None);
    assert!(validator.validate_at(&missing, true, now).is_err());
    Ok(())
}

#[test]
fn bearer_not_before_is_rejected_whatever_its_value() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();

    for offset in [-3600, 0, 3600] {
        let response = with_first_data(scenario_a(now), |data| {
            data.not_before = Some(now + Duration::seconds(offset));
        });
        assert!(validator.validate_at(&response, true, now).is_err());
    }
    Ok(())
}

#[test]
fn in_response_to_correlation() -> anyhow::Result<()> {
    let now = Utc::now();
    let correlated = validator()?;
    let uncorrelated = SsoResponseValidator::new(
        SsoValidatorConfig::builder()
            .issuer_idp(IDP)
            .assertion_consumer_url(ACS)
            .client_address("10.0.0.1")
            .sp_identifier(SP)
            .build()?,
    )?;

    let off_by_one = with_first_data(scenario_a(now), |data| {
        data.in_response_to = Some("req-124".to_string());
    });
    assert!(correlated.validate_at(&off_by_one, true, now).is_err());
    uncorrelated.validate_at(&off_by_one, true, now)?;

    let absent = with_first_data(scenario_a(now), |data| data.in_response_to = None);
    assert!(correlated.validate_at(&absent, true, now).is_err());
    uncorrelated.validate_at(&absent, true, now)?;
    Ok(())
}

#[test]
fn audience_match_is_existential() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();
    let mut response = scenario_a(now);
    response.assertions[0].conditions = Some(
        Conditions::default()
            .with_restriction(AudienceRestriction::new([
                "https://a.example",
                "https://b.example",
            ]))
            .with_restriction(AudienceRestriction::new(["https://c.example", SP])),
    );

    validator.validate_at(&response, true, now)?;
    Ok(())
}

#[test]
fn attribute_assertions_ride_along() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();
    let attributes = Assertion::with_id("_attrs", IDP)
        .with_signature(kc_saml_sso::signature::XmlSignature::new())
        .with_attribute_statement(
            AttributeStatement::default().with_attribute(Attribute::single("role", "admin")),
        );

    let response = scenario_a(now).with_assertion(attributes.clone());
    validator.validate_at(&response, true, now)?;

    let attributes_only = Response::new(IDP).with_assertion(attributes);
    assert!(validator.validate_at(&attributes_only, true, now).is_err());
    Ok(())
}

#[test]
fn unconfirmed_authentication_assertion_does_not_reject_by_itself() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();

    let mut unconfirmed = authn_assertion("_a0", bearer_data(now));
    unconfirmed.subject = Some(Subject::default());
    unconfirmed.conditions = None;

    let alone = Response::new(IDP).with_assertion(unconfirmed);
    assert!(validator.validate_at(&alone, true, now).is_err());

    let alongside = alone.with_assertion(authn_assertion("_a1", bearer_data(now)));
    validator.validate_at(&alongside, true, now)?;
    Ok(())
}

#[test]
fn every_authentication_assertion_must_pass() -> anyhow::Result<()> {
    let validator = validator()?;
    let now = Utc::now();

    let mut expired = bearer_data(now);
    expired.not_on_or_after = Some(now - Duration::minutes(1));
    let response = scenario_a(now).with_assertion(authn_assertion("_a2", expired));

    assert!(validator.validate_at(&response, true, now).is_err());
    Ok(())
}

#[test]
fn config_accessors_reflect_builder() -> anyhow::Result<()> {
    let validator = validator()?;
    let config = validator.config();

    assert_eq!(config.issuer_idp(), IDP);
    assert_eq!(config.assertion_consumer_url(), ACS);
    assert_eq!(config.sp_identifier(), SP);
    assert_eq!(config.client_address(), Some("10.0.0.1"));
    assert_eq!(config.request_id(), Some("req-123"));
    assert_eq!(config_builder().build()?, *config);
    Ok(())
}
