//! vCard property types.

use super::parameter::VCardParameter;
use super::value::VCardValue;

/// A vCard property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Property value.
    pub value: VCardValue,
}

impl VCardProperty {
    /// Creates a property with an arbitrary value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: VCardValue) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, VCardValue::Text(value.into()))
    }

    /// Creates a property whose value is written verbatim.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, VCardValue::Raw(value.into()))
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, VCardValue::Uri(value.into()))
    }

    /// Creates a property with an inline base64 value.
    #[must_use]
    pub fn binary(name: impl Into<String>, base64: impl Into<String>) -> Self {
        Self::new(name, VCardValue::Binary(base64.into()))
    }

    /// Builder-style variant of [`Self::add_param`].
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.add_param(param);
        self
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        if let Some(param) = self.params.iter_mut().find(|p| p.name == "TYPE") {
            param.values.push(type_value.into());
        } else {
            self.params.push(VCardParameter::type_param(type_value));
        }
    }
}

/// Property names used by card export.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const PHOTO: &str = "PHOTO";
    pub const ADR: &str = "ADR";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";

    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_name_is_uppercased() {
        let prop = VCardProperty::raw("fn", "Jane Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.value, VCardValue::Raw("Jane Doe".to_string()));
    }

    #[test]
    fn add_type_extends_existing_parameter() {
        let mut prop = VCardProperty::raw("TEL", "+15551234567");
        prop.add_type("voice");
        prop.add_type("HOME");

        assert_eq!(prop.params.len(), 1);
        assert_eq!(prop.params[0].name, "TYPE");
        assert_eq!(prop.params[0].values, vec!["voice", "HOME"]);
    }

    #[test]
    fn with_param_keeps_order() {
        let prop = VCardProperty::binary("PHOTO", "AAAA")
            .with_param(VCardParameter::encoding("b"))
            .with_param(VCardParameter::type_param("JPEG"));

        let names: Vec<&str> = prop.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ENCODING", "TYPE"]);
    }
}
