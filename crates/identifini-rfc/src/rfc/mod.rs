pub mod vcard;
