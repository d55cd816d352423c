//! Contact-exchange formats used by Identifini.

pub mod rfc;
