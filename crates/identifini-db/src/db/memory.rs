//! In-memory card storage for tests.
//!
//! Compiled only for this crate's tests or with the `test-util` feature.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::{BoxFuture, CardRepository};
use crate::error::DbResult;
use crate::model::card::Card;

/// ## Summary
/// A [`CardRepository`] backed by a `HashMap` keyed on card ID.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryCardRepository {
    cards: Arc<RwLock<HashMap<uuid::Uuid, Card>>>,
}

impl MemoryCardRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a card.
    pub fn insert(&self, card: Card) {
        let mut cards = match self.cards.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cards.insert(card.id, card);
    }

    fn find(&self, predicate: impl Fn(&Card) -> bool) -> Option<Card> {
        let cards = match self.cards.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cards
            .values()
            .find(|card| !card.is_deleted() && predicate(card))
            .cloned()
    }
}

impl CardRepository for MemoryCardRepository {
    fn find_by_username<'a>(&'a self, username: &'a str) -> BoxFuture<'a, DbResult<Option<Card>>> {
        Box::pin(async move { Ok(self.find(|card| card.card_username == username)) })
    }

    fn find_by_id<'a>(&'a self, id: uuid::Uuid) -> BoxFuture<'a, DbResult<Option<Card>>> {
        Box::pin(async move { Ok(self.find(|card| card.id == id)) })
    }
}
