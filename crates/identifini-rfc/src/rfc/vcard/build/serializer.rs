//! vCard serialization.

use super::escape::escape_newlines;
use crate::rfc::vcard::core::{
    Address, StructuredName, VCARD_VERSION, VCard, VCardParameter, VCardProperty, VCardValue,
    names,
};

const CRLF: &str = "\r\n";

/// Serializes a vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    output.push_str(names::BEGIN);
    output.push_str(":VCARD");
    output.push_str(CRLF);

    // VERSION must be first after BEGIN
    output.push_str(names::VERSION);
    output.push(':');
    output.push_str(VCARD_VERSION);
    output.push_str(CRLF);

    for prop in &card.properties {
        serialize_property(prop, &mut output);
    }

    output.push_str(names::END);
    output.push_str(":VCARD");
    output.push_str(CRLF);

    output
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    output.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, output);
    }

    output.push(':');
    serialize_value(&prop.value, output);
    output.push_str(CRLF);
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');
    output.push_str(&param.values.join(","));
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) => output.push_str(&escape_newlines(s)),
        VCardValue::Raw(s) | VCardValue::Uri(s) | VCardValue::Binary(s) => output.push_str(s),
        VCardValue::StructuredName(name) => serialize_structured_name(name, output),
        VCardValue::Address(addr) => serialize_address(addr, output),
    }
}

fn serialize_structured_name(name: &StructuredName, output: &mut String) {
    // family;given;additional;prefixes;suffixes
    let components = [
        &name.family,
        &name.given,
        &name.additional,
        &name.prefixes,
        &name.suffixes,
    ];
    serialize_components(&components, output, str::to_owned);
}

fn serialize_address(addr: &Address, output: &mut String) {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    let components = [
        &addr.po_box,
        &addr.extended,
        &addr.street,
        &addr.locality,
        &addr.region,
        &addr.postal_code,
        &addr.country,
    ];
    serialize_components(&components, output, escape_newlines);
}

fn serialize_components(
    components: &[&Vec<String>],
    output: &mut String,
    render: impl Fn(&str) -> String,
) {
    for (i, list) in components.iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        let rendered: Vec<String> = list.iter().map(|s| render(s)).collect();
        output.push_str(&rendered.join(","));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::types;

    #[test]
    fn serialize_minimal_vcard() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::raw("FN", "Jane Doe"));

        let output = serialize_single(&card);

        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn serialize_empty_vcard_is_version_3() {
        let output = serialize_single(&VCard::new());

        assert_eq!(output, "BEGIN:VCARD\r\nVERSION:3.0\r\nEND:VCARD\r\n");
    }

    #[test]
    fn serialize_keeps_insertion_order() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::uri("URL", "https://example.com/view-card/jane"));
        card.add_property(VCardProperty::raw("FN", "Jane Doe"));

        let output = serialize_single(&card);
        let url_pos = output.find("URL:").expect("URL line present");
        let fn_pos = output.find("FN:").expect("FN line present");
        assert!(url_pos < fn_pos);
    }

    #[test]
    fn serialize_with_parameters() {
        let mut card = VCard::new();
        let mut prop = VCardProperty::raw("TEL", "+15551234567");
        prop.add_type(types::VOICE);
        prop.add_type(types::HOME);
        card.add_property(prop);

        let output = serialize_single(&card);
        assert!(output.contains("TEL;TYPE=voice,HOME:+15551234567\r\n"));
    }

    #[test]
    fn serialize_text_escapes_only_newlines() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("NOTE", "Line1\nLine2; with, chars"));

        let output = serialize_single(&card);
        assert!(output.contains("NOTE:Line1\\nLine2; with, chars\r\n"));
    }

    #[test]
    fn serialize_raw_is_verbatim() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::raw("FN", "Doe; Jane, Dr.\\"));

        let output = serialize_single(&card);
        assert!(output.contains("FN:Doe; Jane, Dr.\\\r\n"));
    }

    #[test]
    fn serialize_structured_name() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new(
            "N",
            VCardValue::StructuredName(StructuredName::whole("Jane Doe")),
        ));

        let output = serialize_single(&card);
        assert!(output.contains("N:Jane Doe;;;;\r\n"));
    }

    #[test]
    fn serialize_address_escapes_newlines() {
        let mut card = VCard::new();
        let mut prop = VCardProperty::new(
            "ADR",
            VCardValue::Address(Address::street_only("1 Main St\nSpringfield")),
        );
        prop.add_type(types::HOME);
        card.add_property(prop);

        let output = serialize_single(&card);
        assert!(output.contains("ADR;TYPE=HOME:;;1 Main St\\nSpringfield;;;;\r\n"));
    }

    #[test]
    fn serialize_does_not_fold_long_lines() {
        let mut card = VCard::new();
        let payload = "A".repeat(500);
        card.add_property(
            VCardProperty::binary("PHOTO", payload.as_str())
                .with_param(VCardParameter::encoding(types::BASE64))
                .with_param(VCardParameter::type_param(types::JPEG)),
        );

        let output = serialize_single(&card);
        assert!(output.contains(&format!("PHOTO;ENCODING=b;TYPE=JPEG:{payload}\r\n")));
        assert!(!output.contains("\r\n "));
    }
}
