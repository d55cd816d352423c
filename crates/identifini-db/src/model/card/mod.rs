use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// A stored business card, as far as contact export is concerned.
///
/// `floating_actions` is whatever the front end saved: usually a JSON array
/// of `{type, url}` objects, sometimes that array serialized into a JSON
/// string.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::card)]
#[diesel(check_for_backend(Pg))]
pub struct Card {
    pub id: uuid::Uuid,
    pub card_username: String,
    pub display_name: Option<String>,
    pub card_pic: Option<String>,
    pub floating_actions: Option<serde_json::Value>,
    pub card_email: Option<String>,
    pub display_address: Option<String>,
    pub bio: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Card {
    /// Returns a card with only the username set and timestamps at now.
    ///
    /// Convenience for in-memory repositories and tests.
    #[must_use]
    pub fn new(card_username: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: uuid::Uuid::now_v7(),
            card_username: card_username.into(),
            display_name: None,
            card_pic: None,
            floating_actions: None,
            card_email: None,
            display_address: None,
            bio: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
