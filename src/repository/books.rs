//! Books repository for database operations.
//!
//! Each operation is one unit of work: it opens a transaction through
//! [`TxGuard`], runs its statements on the transaction handle, and finishes
//! with exactly one commit-or-rollback. See `tx.rs` for the guard protocol.

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

use super::tx::TxGuard;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book. The backend assigns the id; `created_at` is taken
    /// from the value as constructed by the caller, never recomputed here.
    /// Returns the stored row.
    pub async fn create(&self, book: &Book) -> AppResult<Book> {
        let mut guard = TxGuard::begin(&self.pool, "books.create").await?;

        let outcome = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, price, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, title, price, created_at
            "#,
        )
        .bind(&book.title)
        .bind(book.price)
        .bind(book.created_at)
        .fetch_one(guard.conn())
        .await
        .map_err(AppError::from);

        guard.finish(outcome).await
    }

    /// Get a book by id
    pub async fn get(&self, id: i64) -> AppResult<Book> {
        let mut guard = TxGuard::begin(&self.pool, "books.get").await?;

        let outcome = sqlx::query_as::<_, Book>(
            "SELECT id, title, price, created_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(guard.conn())
        .await
        .map_err(AppError::from)
        .and_then(|row| {
            row.ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
        });

        guard.finish(outcome).await
    }

    /// List all books, ordered by id for reproducibility.
    /// Returns an empty vec, not an error, when no rows exist.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let mut guard = TxGuard::begin(&self.pool, "books.list").await?;

        let outcome = sqlx::query_as::<_, Book>(
            "SELECT id, title, price, created_at FROM books ORDER BY id",
        )
        .fetch_all(guard.conn())
        .await
        .map_err(AppError::from);

        guard.finish(outcome).await
    }

    /// Overwrite title and price for the row matching id. `created_at` is
    /// preserved. A missing id is a NotFound error, consistent with `delete`.
    pub async fn update(&self, id: i64, title: &str, price: Decimal) -> AppResult<Book> {
        let mut guard = TxGuard::begin(&self.pool, "books.update").await?;

        let outcome = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET title = $1, price = $2
            WHERE id = $3
            RETURNING id, title, price, created_at
            "#,
        )
        .bind(title)
        .bind(price)
        .bind(id)
        .fetch_optional(guard.conn())
        .await
        .map_err(AppError::from)
        .and_then(|row| {
            row.ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
        });

        guard.finish(outcome).await
    }

    /// Delete the row matching id. A missing id is a NotFound error,
    /// consistent with `update`.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut guard = TxGuard::begin(&self.pool, "books.delete").await?;

        let outcome = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(guard.conn())
            .await
            .map_err(AppError::from)
            .and_then(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound(format!("Book with id {} not found", id)))
                } else {
                    Ok(())
                }
            });

        guard.finish(outcome).await
    }
}
