//! XML Signature markers for SAML.
//!
//! The Web SSO validator only needs to know whether an assertion carries an
//! enveloped `<ds:Signature>`; cryptographic verification happens in the
//! signature-verification stage that runs before it.

use serde::{Deserialize, Serialize};

/// Marks an assertion as carrying an enveloped `<ds:Signature>`.
///
/// Carries no key material or digest; presence is all this crate checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlSignature {}

impl XmlSignature {
    /// Creates a signature marker.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}
