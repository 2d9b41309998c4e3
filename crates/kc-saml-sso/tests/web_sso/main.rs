//! Web Browser SSO profile tests.
//!
//! Exercise the public validator API end to end with Responses assembled the
//! way an upstream parser would hand them over.

mod common;
mod properties;
