//! Structured vCard values (N and ADR).

/// Structured name (N property).
///
/// Each component may hold several values, which are comma-joined on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a name whose family component carries the whole name.
    ///
    /// Serializes as `<name>;;;;`.
    #[must_use]
    pub fn whole(name: impl Into<String>) -> Self {
        Self {
            family: vec![name.into()],
            ..Self::default()
        }
    }
}

/// Address (ADR property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl Address {
    /// Creates an address with only the street component set.
    ///
    /// Serializes as `;;<street>;;;;`.
    #[must_use]
    pub fn street_only(street: impl Into<String>) -> Self {
        Self {
            street: vec![street.into()],
            ..Self::default()
        }
    }
}
