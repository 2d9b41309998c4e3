//! SAML 2.0 types and data structures.
//!
//! This module contains the parsed object graph of a SAML Response as seen
//! by the service provider: the response itself, its assertions, subjects,
//! confirmations and conditions.

mod assertion;
mod constants;
mod name_id;
mod response;

pub use assertion::*;
pub use constants::*;
pub use name_id::*;
pub use response::*;
