//! Review repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Manage the `reviews` table and CRUD over its rows.
//! - Keep a `Review`'s identity slot in sync with storage.
//!
//! # Invariants
//! - `save` inserts exactly once per transient record; later calls update.
//! - `update` and `delete` on an id with no row succeed without effect.
//! - Reads rebuild records through the trusted path (no employee lookup).
//! - `get_all` returns rows in storage-native order.

use crate::model::review::{Review, ReviewId};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

const CREATE_REVIEWS_SQL: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    year INTEGER,
    summary TEXT,
    employee_id INTEGER,
    FOREIGN KEY (employee_id) REFERENCES employees(id)
);";

const REVIEW_SELECT_SQL: &str = "SELECT
    id,
    year,
    summary,
    employee_id
FROM reviews";

/// Repository interface for review persistence.
pub trait ReviewRepository {
    /// Ensures the `reviews` table exists. No-op when it already does.
    fn create_table(&self) -> RepoResult<()>;
    /// Removes the `reviews` table if present.
    fn drop_table(&self) -> RepoResult<()>;
    /// Inserts a transient review (assigning its id) or updates a persisted one.
    fn save(&self, review: &mut Review) -> RepoResult<ReviewId>;
    fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>>;
    /// Overwrites every column of the row matching `review.id()`.
    ///
    /// An id with no matching row is not an error; nothing is written.
    fn update(&self, review: &Review) -> RepoResult<()>;
    /// Deletes the matching row, then clears `review.id()` in all cases.
    fn delete(&self, review: &mut Review) -> RepoResult<()>;
    fn get_all(&self) -> RepoResult<Vec<Review>>;
}

/// SQLite-backed review repository.
pub struct SqliteReviewRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReviewRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert(&self, review: &mut Review) -> RepoResult<ReviewId> {
        self.conn.execute(
            "INSERT INTO reviews (year, summary, employee_id)
             VALUES (?1, ?2, ?3);",
            params![review.year(), review.summary(), review.employee_id()],
        )?;

        let id = self.conn.last_insert_rowid();
        review.assign_id(id);
        debug!("event=review_insert module=repo status=ok review_id={id}");
        Ok(id)
    }
}

impl ReviewRepository for SqliteReviewRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(CREATE_REVIEWS_SQL)?;
        debug!("event=table_create module=repo status=ok table=reviews");
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS reviews;")?;
        debug!("event=table_drop module=repo status=ok table=reviews");
        Ok(())
    }

    fn save(&self, review: &mut Review) -> RepoResult<ReviewId> {
        match review.id() {
            Some(id) => {
                self.update(review)?;
                Ok(id)
            }
            None => self.insert(review),
        }
    }

    fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_review_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, review: &Review) -> RepoResult<()> {
        let id = review.id().ok_or(RepoError::NotPersisted)?;

        let changed = self.conn.execute(
            "UPDATE reviews
             SET
                year = ?1,
                summary = ?2,
                employee_id = ?3
             WHERE id = ?4;",
            params![review.year(), review.summary(), review.employee_id(), id],
        )?;

        debug!("event=review_update module=repo status=ok review_id={id} rows={changed}");
        Ok(())
    }

    fn delete(&self, review: &mut Review) -> RepoResult<()> {
        if let Some(id) = review.id() {
            let changed = self
                .conn
                .execute("DELETE FROM reviews WHERE id = ?1;", [id])?;
            debug!("event=review_delete module=repo status=ok review_id={id} rows={changed}");
        }

        review.clear_id();
        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Review>> {
        let mut stmt = self.conn.prepare(&format!("{REVIEW_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();

        while let Some(row) = rows.next()? {
            reviews.push(parse_review_row(row)?);
        }

        debug!("event=review_list module=repo status=ok rows={}", reviews.len());
        Ok(reviews)
    }
}

fn parse_review_row(row: &Row<'_>) -> RepoResult<Review> {
    let id: ReviewId = row.get("id")?;
    let year = row
        .get::<_, Option<i64>>("year")?
        .ok_or_else(|| null_column(id, "year"))?;
    let summary = row
        .get::<_, Option<String>>("summary")?
        .ok_or_else(|| null_column(id, "summary"))?;
    let employee_id = row
        .get::<_, Option<i64>>("employee_id")?
        .ok_or_else(|| null_column(id, "employee_id"))?;

    Ok(Review::from_storage(id, year, summary, employee_id))
}

fn null_column(id: ReviewId, column: &str) -> RepoError {
    RepoError::InvalidData(format!("NULL in reviews.{column} for id {id}"))
}
