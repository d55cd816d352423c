//! vCard parameter types.

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., `TYPE=voice,HOME`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values, written as given.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates an ENCODING parameter (vCard 3.0 inline binary).
    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::new("ENCODING", value)
    }
}

/// TYPE and ENCODING values as they appear in exported cards.
///
/// Case is significant for byte-exact output.
pub mod types {
    pub const HOME: &str = "HOME";
    pub const VOICE: &str = "voice";
    pub const CELL: &str = "cell";
    pub const WHATSAPP: &str = "WhatsApp";
    pub const JPEG: &str = "JPEG";

    /// Inline base64 encoding marker for vCard 3.0 binary values.
    pub const BASE64: &str = "b";
}
