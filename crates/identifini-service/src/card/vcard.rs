//! Card to vCard 3.0 mapping.
//!
//! Output layout is fixed: `FN`, `N`, `PHOTO`, `TEL`*, `EMAIL`*, `ADR`,
//! `URL`, `NOTE`.

use std::collections::HashSet;

use identifini_rfc::rfc::vcard::core::{names, types};
use identifini_rfc::rfc::vcard::{
    Address, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue, serialize_single,
};

use super::record::{CardRecord, FloatingActionKind};

const DATA_IMAGE_PREFIX: &str = "data:image";
const TEL_PREFIX: &str = "tel:";
const WHATSAPP_PREFIX: &str = "https://wa.me/";
const MAILTO_PREFIX: &str = "mailto:";

/// ## Summary
/// Maps a card to a vCard document.
///
/// `card_url` is the public page of the card and is written as `URL`.
/// Never fails: unusable optional fields are left out.
#[must_use]
#[tracing::instrument(skip_all, fields(card = %card.card_username))]
pub fn generate_vcard(card: &CardRecord, card_url: &str) -> VCard {
    let mut vcard = VCard::new();

    // FN and N are written unescaped
    vcard.add_property(VCardProperty::raw(names::FN, card.display_name.as_str()));
    vcard.add_property(VCardProperty::new(
        names::N,
        VCardValue::StructuredName(StructuredName::whole(card.display_name.as_str())),
    ));

    if let Some(photo) = card.card_pic.as_deref().and_then(photo_property) {
        vcard.add_property(photo);
    }

    let actions = card.floating_actions.actions();
    let mut emails = EmailList::default();
    for action in &actions {
        match action.kind() {
            FloatingActionKind::Call => {
                let phone = action.url.strip_prefix(TEL_PREFIX).unwrap_or(&action.url);
                vcard.add_property(tel_property(phone, types::VOICE, types::HOME));
            }
            FloatingActionKind::WhatsApp => {
                let phone = action
                    .url
                    .strip_prefix(WHATSAPP_PREFIX)
                    .unwrap_or(&action.url);
                vcard.add_property(tel_property(phone, types::CELL, types::WHATSAPP));
            }
            FloatingActionKind::Email => {
                let email = action.url.strip_prefix(MAILTO_PREFIX).unwrap_or(&action.url);
                if email.contains('@') {
                    emails.push(email);
                } else {
                    tracing::debug!(url = %action.url, "Skipping email action without an address");
                }
            }
            FloatingActionKind::Other => {
                tracing::trace!(action_type = %action.action_type, "Skipping non-contact action");
            }
        }
    }

    if let Some(email) = present(card.card_email.as_ref()) {
        emails.push(email);
    }

    for email in emails.into_inner() {
        vcard.add_property(VCardProperty::raw(names::EMAIL, email));
    }

    if let Some(address) = present(card.display_address.as_ref()) {
        let mut adr = VCardProperty::new(
            names::ADR,
            VCardValue::Address(Address::street_only(address)),
        );
        adr.add_type(types::HOME);
        vcard.add_property(adr);
    }

    vcard.add_property(VCardProperty::uri(names::URL, card_url));

    if let Some(bio) = present(card.bio.as_ref()) {
        vcard.add_property(VCardProperty::text(names::NOTE, bio));
    }

    vcard
}

/// ## Summary
/// Maps a card to vCard text, ready to be served as a `.vcf` file.
#[must_use]
pub fn render_vcard(card: &CardRecord, card_url: &str) -> String {
    serialize_single(&generate_vcard(card, card_url))
}

/// Embeds `data:image` URIs; anything else (remote URLs included) is skipped.
///
/// Always tagged JPEG, whatever the data URI says.
fn photo_property(card_pic: &str) -> Option<VCardProperty> {
    if !card_pic.starts_with(DATA_IMAGE_PREFIX) {
        if !card_pic.is_empty() {
            tracing::debug!("Card picture is not an inline image, leaving it out");
        }
        return None;
    }

    let Some((_, payload)) = card_pic.split_once(',') else {
        tracing::warn!("Card picture data URI has no payload, leaving it out");
        return None;
    };

    Some(
        VCardProperty::binary(names::PHOTO, payload)
            .with_param(VCardParameter::encoding(types::BASE64))
            .with_param(VCardParameter::type_param(types::JPEG)),
    )
}

fn tel_property(phone: &str, first_type: &str, second_type: &str) -> VCardProperty {
    let mut tel = VCardProperty::raw(names::TEL, phone);
    tel.add_type(first_type);
    tel.add_type(second_type);
    tel
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Email addresses in first-seen order, each kept once.
#[derive(Default)]
struct EmailList<'a> {
    seen: HashSet<&'a str>,
    ordered: Vec<&'a str>,
}

impl<'a> EmailList<'a> {
    fn push(&mut self, email: &'a str) {
        if self.seen.insert(email) {
            self.ordered.push(email);
        }
    }

    fn into_inner(self) -> Vec<&'a str> {
        self.ordered
    }
}
