use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::db::query;
use crate::db::{BoxFuture, CardRepository, DbProvider};
use crate::error::DbResult;
use crate::model::card::Card;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// ## Summary
/// Creates a new database connection pool.
///
/// ## Errors
/// Returns an error if the pool cannot be created with the provided database URL.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub async fn create_pool(database_url: &str, size: u32) -> anyhow::Result<DbPool> {
    tracing::debug!("Creating database connection pool");

    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(size)
        .min_idle(Some(size))
        .test_on_check_out(false)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(config)
        .await?;

    tracing::info!(
        pool_size = size,
        "Database connection pool created successfully"
    );

    Ok(pool)
}

impl DbProvider for DbPool {
    #[tracing::instrument(skip(self))]
    fn get_connection<'a>(&'a self) -> BoxFuture<'a, DbResult<DbConnection<'a>>> {
        Box::pin(async move {
            let conn = self.get().await?;
            Ok(conn)
        })
    }
}

impl CardRepository for DbPool {
    fn find_by_username<'a>(&'a self, username: &'a str) -> BoxFuture<'a, DbResult<Option<Card>>> {
        Box::pin(async move {
            let mut conn = self.get_connection().await?;
            Ok(query::card::find_by_username(&mut conn, username).await?)
        })
    }

    fn find_by_id<'a>(&'a self, id: uuid::Uuid) -> BoxFuture<'a, DbResult<Option<Card>>> {
        Box::pin(async move {
            let mut conn = self.get_connection().await?;
            Ok(query::card::find_by_id(&mut conn, id).await?)
        })
    }
}
