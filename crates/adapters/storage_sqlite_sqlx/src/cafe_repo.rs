//! `SQLite` implementation of [`CafeRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqliteConnection, SqlitePool, Transaction};

use cafehub_app::ports::CafeRepository;
use cafehub_domain::cafe::{Cafe, NewCafe};
use cafehub_domain::error::CafeHubError;
use cafehub_domain::id::CafeId;

use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Cafe);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Cafe> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Cafe {
            id: CafeId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            map_url: row.try_get("map_url")?,
            img_url: row.try_get("img_url")?,
            location: row.try_get("location")?,
            seats: row.try_get("seats")?,
            has_toilet: row.try_get("has_toilet")?,
            has_wifi: row.try_get("has_wifi")?,
            has_sockets: row.try_get("has_sockets")?,
            can_take_calls: row.try_get("can_take_calls")?,
            coffee_price: row.try_get("coffee_price")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO cafe (name, map_url, img_url, location, seats,
                      has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM cafe WHERE id = ?";
const SELECT_RANDOM: &str = "SELECT * FROM cafe ORDER BY RANDOM() LIMIT 1";
const SELECT_ALL: &str = "SELECT * FROM cafe ORDER BY name";
const SELECT_BY_LOCATION: &str = "SELECT * FROM cafe WHERE location = ? ORDER BY name";
const UPDATE_PRICE: &str = "UPDATE cafe SET coffee_price = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cafe WHERE id = ?";

/// `SQLite`-backed cafe repository.
pub struct SqliteCafeRepository {
    pool: SqlitePool,
}

impl SqliteCafeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, CafeHubError> {
        self.pool.begin().await.map_err(write_error)
    }
}

/// Commit on success, roll back on failure.
///
/// The connection goes back to the pool on both paths.
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    outcome: Result<T, sqlx::Error>,
) -> Result<T, CafeHubError> {
    match outcome {
        Ok(value) => {
            tx.commit().await.map_err(write_error)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "failed to roll back transaction");
            }
            Err(write_error(err))
        }
    }
}

async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Wrapper>, sqlx::Error> {
    sqlx::query_as(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(conn)
        .await
}

async fn insert_in(conn: &mut SqliteConnection, cafe: NewCafe) -> Result<Cafe, sqlx::Error> {
    let id = sqlx::query(INSERT)
        .bind(cafe.name)
        .bind(cafe.map_url)
        .bind(cafe.img_url)
        .bind(cafe.location)
        .bind(cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(cafe.coffee_price)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

    fetch_by_id(conn, id)
        .await?
        .map(|w| w.0)
        .ok_or(sqlx::Error::RowNotFound)
}

async fn update_price_in(
    conn: &mut SqliteConnection,
    id: CafeId,
    coffee_price: String,
) -> Result<Option<Cafe>, sqlx::Error> {
    let updated = sqlx::query(UPDATE_PRICE)
        .bind(coffee_price)
        .bind(id.get())
        .execute(&mut *conn)
        .await?;

    if updated.rows_affected() == 0 {
        return Ok(None);
    }
    Ok(Wrapper::maybe(fetch_by_id(conn, id.get()).await?))
}

async fn delete_in(conn: &mut SqliteConnection, id: CafeId) -> Result<Option<Cafe>, sqlx::Error> {
    let Some(Wrapper(cafe)) = fetch_by_id(&mut *conn, id.get()).await? else {
        return Ok(None);
    };

    sqlx::query(DELETE_BY_ID)
        .bind(id.get())
        .execute(conn)
        .await?;

    Ok(Some(cafe))
}

impl CafeRepository for SqliteCafeRepository {
    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, CafeHubError> {
        let mut tx = self.begin().await?;
        let outcome = insert_in(&mut tx, cafe).await;
        finish(tx, outcome).await
    }

    async fn get_random(&self) -> Result<Option<Cafe>, CafeHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_RANDOM)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Cafe>, CafeHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_location(&self, location: Option<String>) -> Result<Vec<Cafe>, CafeHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_LOCATION)
            .bind(location)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update_coffee_price(
        &self,
        id: CafeId,
        coffee_price: String,
    ) -> Result<Option<Cafe>, CafeHubError> {
        let mut tx = self.begin().await?;
        let outcome = update_price_in(&mut tx, id, coffee_price).await;
        finish(tx, outcome).await
    }

    async fn delete(&self, id: CafeId) -> Result<Option<Cafe>, CafeHubError> {
        let mut tx = self.begin().await?;
        let outcome = delete_in(&mut tx, id).await;
        finish(tx, outcome).await
    }
}
