//! vCard value types.

use super::structured::{Address, StructuredName};

/// A vCard property value.
///
/// The variant decides how the value is written, not just what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Free text; line breaks are written as `\n`.
    Text(String),

    /// Written verbatim, with no escaping at all.
    Raw(String),

    /// URI value, written verbatim.
    Uri(String),

    /// Base64 payload of an inline binary value, written verbatim.
    Binary(String),

    /// Structured name (N property). Components are written verbatim.
    StructuredName(StructuredName),

    /// Address (ADR property). Line breaks in components are written as `\n`.
    Address(Address),
}
