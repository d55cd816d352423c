//! Query functions for stored cards.

use diesel::dsl::AsSelect;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::card;
use crate::model::card::Card;

type BoxedQuery<'a> = card::BoxedQuery<'a, Pg, AsSelect<Card, Pg>>;

/// ## Summary
/// Returns a query to select all live (not soft-deleted) cards.
#[must_use]
pub fn not_deleted<'a>() -> BoxedQuery<'a> {
    card::table
        .filter(card::deleted_at.is_null())
        .select(Card::as_select())
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a live card by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    not_deleted().filter(card::id.eq(id))
}

/// ## Summary
/// Returns a query to find a live card by its public username.
#[must_use]
pub fn by_username(username: &str) -> BoxedQuery<'_> {
    not_deleted().filter(card::card_username.eq(username))
}

/// ## Summary
/// Loads a live card by username.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_by_username(
    conn: &mut DbConnection<'_>,
    username: &str,
) -> diesel::QueryResult<Option<Card>> {
    by_username(username).first::<Card>(conn).await.optional()
}

/// ## Summary
/// Loads a live card by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_by_id(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> diesel::QueryResult<Option<Card>> {
    by_id(id).first::<Card>(conn).await.optional()
}
