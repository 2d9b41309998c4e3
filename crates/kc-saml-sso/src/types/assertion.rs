//! SAML Assertion types.
//!
//! Assertions contain statements about a subject made by an issuer. These
//! structures are populated by the upstream XML parser; the SSO validator
//! only ever reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{authn_context_classes, confirmation_methods, Issuer, NameId};
use crate::signature::XmlSignature;

/// SAML Assertion.
///
/// A package of information that supplies one or more statements made
/// by a SAML authority (the issuer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    /// Unique identifier for this assertion.
    pub id: String,

    /// Version of the SAML protocol (always "2.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Timestamp when this assertion was issued.
    pub issue_instant: DateTime<Utc>,

    /// The identity provider that issued this assertion.
    ///
    /// Mandatory for the Web SSO profile; modelled as optional so that a
    /// missing issuer is rejected by validation rather than by parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Issuer>,

    /// Enveloped signature, if the assertion was signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<XmlSignature>,

    /// The subject of this assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,

    /// Conditions that must be evaluated for the assertion to be valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,

    /// Authentication statements describing how the subject authenticated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authn_statements: Vec<AuthnStatement>,

    /// Attribute statement containing attributes about the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_statement: Option<AttributeStatement>,
}

fn default_version() -> String {
    super::SAML_VERSION.to_string()
}

impl Assertion {
    /// Creates a new assertion issued by the given entity.
    #[must_use]
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            id: format!("_id{}", uuid::Uuid::new_v4()),
            version: default_version(),
            issue_instant: Utc::now(),
            issuer: Some(Issuer::entity(issuer)),
            signature: None,
            subject: None,
            conditions: None,
            authn_statements: Vec::new(),
            attribute_statement: None,
        }
    }

    /// Creates a new assertion with a custom ID.
    #[must_use]
    pub fn with_id(id: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(issuer)
        }
    }

    /// Replaces the issuer element.
    #[must_use]
    pub fn with_issuer(mut self, issuer: Issuer) -> Self {
        self.issuer = Some(issuer);
        self
    }

    /// Attaches a signature.
    #[must_use]
    pub fn with_signature(mut self, signature: XmlSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Sets the conditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Adds an authentication statement.
    #[must_use]
    pub fn with_authn_statement(mut self, statement: AuthnStatement) -> Self {
        self.authn_statements.push(statement);
        self
    }

    /// Sets the attribute statement.
    #[must_use]
    pub fn with_attribute_statement(mut self, statement: AttributeStatement) -> Self {
        self.attribute_statement = Some(statement);
        self
    }

    /// Returns true if this assertion carries at least one `AuthnStatement`.
    #[must_use]
    pub fn is_authentication_assertion(&self) -> bool {
        !self.authn_statements.is_empty()
    }

    /// Returns true if an enveloped signature is present.
    ///
    /// Presence only; the signature is verified upstream.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

/// Subject of an assertion.
///
/// Identifies the principal that is the subject of all statements in the assertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    /// The name identifier for the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_id: Option<NameId>,

    /// Subject confirmations.
    ///
    /// `None` means the subject carries no confirmation collection at all,
    /// which is distinct from an empty one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_confirmations: Option<Vec<SubjectConfirmation>>,
}

impl Subject {
    /// Creates a new subject with a name ID.
    #[must_use]
    pub const fn new(name_id: NameId) -> Self {
        Self {
            name_id: Some(name_id),
            subject_confirmations: None,
        }
    }

    /// Adds a subject confirmation, creating the collection if needed.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: SubjectConfirmation) -> Self {
        self.subject_confirmations
            .get_or_insert_with(Vec::new)
            .push(confirmation);
        self
    }

    /// Sets an empty confirmation collection.
    #[must_use]
    pub fn with_empty_confirmations(mut self) -> Self {
        self.subject_confirmations = Some(Vec::new());
        self
    }
}

/// Subject confirmation.
///
/// Information that allows the assertion consumer to confirm the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectConfirmation {
    /// The confirmation method.
    pub method: String,

    /// Additional confirmation data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_confirmation_data: Option<SubjectConfirmationData>,
}

impl SubjectConfirmation {
    /// Creates a confirmation with an arbitrary method URI.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            subject_confirmation_data: None,
        }
    }

    /// Creates a bearer confirmation.
    #[must_use]
    pub fn bearer() -> Self {
        Self::new(confirmation_methods::BEARER)
    }

    /// Creates a holder-of-key confirmation.
    #[must_use]
    pub fn holder_of_key() -> Self {
        Self::new(confirmation_methods::HOLDER_OF_KEY)
    }

    /// Sets the confirmation data.
    #[must_use]
    pub fn with_data(mut self, data: SubjectConfirmationData) -> Self {
        self.subject_confirmation_data = Some(data);
        self
    }

    /// Returns true if the method is bearer.
    #[must_use]
    pub fn is_bearer(&self) -> bool {
        self.method == confirmation_methods::BEARER
    }
}

/// Subject confirmation data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectConfirmationData {
    /// The request ID that this assertion responds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_response_to: Option<String>,

    /// Time at or after which the subject can no longer be confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Time before which the subject cannot be confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,

    /// The location to which the assertion can be presented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Network address of the attesting entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SubjectConfirmationData {
    /// Creates bearer confirmation data answering `request_id`, delivered to
    /// `recipient` and usable until `not_on_or_after`.
    #[must_use]
    pub fn for_request(
        request_id: impl Into<String>,
        recipient: impl Into<String>,
        not_on_or_after: DateTime<Utc>,
    ) -> Self {
        Self {
            in_response_to: Some(request_id.into()),
            recipient: Some(recipient.into()),
            not_on_or_after: Some(not_on_or_after),
            not_before: None,
            address: None,
        }
    }

    /// Sets the expiry instant.
    #[must_use]
    pub fn expires_at(mut self, not_on_or_after: DateTime<Utc>) -> Self {
        self.not_on_or_after = Some(not_on_or_after);
        self
    }

    /// Sets the attesting entity's address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Conditions for assertion validity.
///
/// The Web SSO validator evaluates only the audience restrictions. The
/// `NotBefore`/`NotOnOrAfter` window is enforced by the structural validator
/// that runs first and is carried here unchecked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conditions {
    /// Time before which the assertion is not valid. Not checked here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,

    /// Time at or after which the assertion is not valid. Not checked here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Audience restrictions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audience_restrictions: Vec<AudienceRestriction>,
}

impl Conditions {
    /// Adds an audience restriction with a single audience.
    #[must_use]
    pub fn with_audience(self, audience: impl Into<String>) -> Self {
        self.with_restriction(AudienceRestriction::new([audience]))
    }

    /// Adds an audience restriction.
    #[must_use]
    pub fn with_restriction(mut self, restriction: AudienceRestriction) -> Self {
        self.audience_restrictions.push(restriction);
        self
    }

    /// Returns true if any restriction names the given audience.
    #[must_use]
    pub fn permits_audience(&self, audience: &str) -> bool {
        self.audience_restrictions
            .iter()
            .any(|restriction| restriction.contains(audience))
    }
}

/// Audience restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudienceRestriction {
    /// List of valid audiences.
    #[serde(default)]
    pub audiences: Vec<String>,
}

impl AudienceRestriction {
    /// Creates a restriction over the given audience URIs.
    #[must_use]
    pub fn new<I, S>(audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            audiences: audiences.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the audience URI is listed (exact string match).
    #[must_use]
    pub fn contains(&self, audience: &str) -> bool {
        self.audiences.iter().any(|a| a == audience)
    }
}

/// Authentication statement.
///
/// Describes the act of authentication performed by the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthnStatement {
    /// The time of authentication.
    pub authn_instant: DateTime<Utc>,

    /// The session index (for session management).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_index: Option<String>,

    /// Time at which the session ends.
    ///
    /// Not enforced here; the caller discards the security context once
    /// this instant is reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_not_on_or_after: Option<DateTime<Utc>>,

    /// The authentication context.
    pub authn_context: AuthnContext,
}

impl AuthnStatement {
    /// Creates a statement for an authentication at `authn_instant` with the
    /// given context class and no session index.
    #[must_use]
    pub fn new(authn_instant: DateTime<Utc>, context_class_ref: impl Into<String>) -> Self {
        Self {
            authn_instant,
            session_index: None,
            session_not_on_or_after: None,
            authn_context: AuthnContext {
                authn_context_class_ref: Some(context_class_ref.into()),
                authn_context_decl_ref: None,
            },
        }
    }

    /// Creates a statement with the password-protected-transport class.
    #[must_use]
    pub fn password_protected_transport(authn_instant: DateTime<Utc>) -> Self {
        Self::new(authn_instant, authn_context_classes::PASSWORD_PROTECTED_TRANSPORT)
    }
}

/// Authentication context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthnContext {
    /// Authentication context class reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authn_context_class_ref: Option<String>,

    /// Authentication context declaration reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authn_context_decl_ref: Option<String>,
}

/// Attribute statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeStatement {
    /// List of attributes.
    pub attributes: Vec<Attribute>,
}

impl AttributeStatement {
    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }
}

/// SAML Attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute name (typically a URI).
    pub name: String,

    /// The attribute values.
    pub values: Vec<String>,
}

impl Attribute {
    /// Creates a new attribute with a single value.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }
}
