use crate::error::DbResult;
use crate::model::card::Card;
use std::future::Future;
use std::pin::Pin;

pub mod connection;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod migrations;
pub mod query;
pub mod schema;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait DbProvider: Send + Sync {
    fn get_connection<'a>(&'a self) -> BoxFuture<'a, DbResult<connection::DbConnection<'a>>>;
}

/// ## Summary
/// Read access to stored cards.
///
/// Soft-deleted cards are never returned.
pub trait CardRepository: Send + Sync {
    fn find_by_username<'a>(&'a self, username: &'a str) -> BoxFuture<'a, DbResult<Option<Card>>>;

    fn find_by_id<'a>(&'a self, id: uuid::Uuid) -> BoxFuture<'a, DbResult<Option<Card>>>;
}
