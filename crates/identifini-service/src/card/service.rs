//! Card lookups and `.vcf` download assembly.

use identifini_core::constants::{VCARD_FILE_EXTENSION, VIEW_CARD_ROUTE_PREFIX};
use identifini_db::db::CardRepository;

use super::record::CardRecord;
use super::vcard::render_vcard;
use crate::error::{ServiceError, ServiceResult};

/// A rendered vCard and the name it should be downloaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardExport {
    pub filename: String,
    pub body: String,
}

/// ## Summary
/// Loads a live card by username and validates it for export.
///
/// ## Errors
/// - `NotFound` if no live card has this username
/// - `MissingRequiredField` if the stored card has no display name
/// - `DatabaseError` if the lookup fails
#[tracing::instrument(skip(repo))]
pub async fn load_card_by_username(
    repo: &dyn CardRepository,
    username: &str,
) -> ServiceResult<CardRecord> {
    let card = repo
        .find_by_username(username)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("card with username {username}")))?;

    CardRecord::try_from(card)
}

/// ## Summary
/// Loads a live card by ID and validates it for export.
///
/// ## Errors
/// Same as [`load_card_by_username`].
#[tracing::instrument(skip(repo))]
pub async fn load_card_by_id(repo: &dyn CardRepository, id: uuid::Uuid) -> ServiceResult<CardRecord> {
    let card = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("card with id {id}")))?;

    CardRecord::try_from(card)
}

/// ## Summary
/// Returns the public page of a card: `<origin>/view-card/<encoded username>`.
///
/// `origin` is scheme and host without a trailing slash.
#[must_use]
pub fn card_view_url(origin: &str, card_username: &str) -> String {
    format!(
        "{origin}{VIEW_CARD_ROUTE_PREFIX}/{}",
        urlencoding::encode(card_username)
    )
}

/// ## Summary
/// Returns the download file name for a card: `<encoded display name>.vcf`.
#[must_use]
pub fn vcard_filename(display_name: &str) -> String {
    format!(
        "{}.{VCARD_FILE_EXTENSION}",
        urlencoding::encode(display_name)
    )
}

/// ## Summary
/// Renders a card as a downloadable vCard, using `origin` for its `URL` line.
#[must_use]
pub fn export_vcard(card: &CardRecord, origin: &str) -> VCardExport {
    let url = card_view_url(origin, &card.card_username);

    VCardExport {
        filename: vcard_filename(&card.display_name),
        body: render_vcard(card, &url),
    }
}
