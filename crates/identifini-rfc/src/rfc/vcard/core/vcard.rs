//! vCard wrapper type.

use super::property::VCardProperty;

/// The only vCard version cards are exported as (RFC 2426).
pub const VCARD_VERSION: &str = "3.0";

/// A single vCard: properties in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates an empty vCard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }
}
