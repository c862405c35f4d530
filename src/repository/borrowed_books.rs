//! Borrow records repository
//!
//! Every write that changes whether a record holds a copy runs in a single
//! transaction together with the matching `available_copies` movement.

use sqlx::{Pool, Postgres};

use super::books::{release_copy, take_copy};
use crate::{
    error::{AppError, AppResult},
    models::borrowed_book::{copy_transfer, BorrowedBook, CreateBorrowedBook, UpdateBorrowedBook},
};

const DUPLICATE: &str = "Borrow record already exists";
const MISSING_REFERENCE: &str = "Member or book does not exist";

#[derive(Clone)]
pub struct BorrowedBooksRepository {
    pool: Pool<Postgres>,
}

impl BorrowedBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List borrow records, optionally only the outstanding ones
    pub async fn list(&self, outstanding_only: bool) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            r#"
            SELECT * FROM borrowed_books
            WHERE ($1 = FALSE OR return_date IS NULL)
            ORDER BY borrow_id
            "#,
        )
        .bind(outstanding_only)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Borrow records of a member
    pub async fn list_for_member(&self, member_id: i32) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM borrowed_books WHERE member_id = $1 ORDER BY borrow_date, borrow_id",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Borrow records of a book
    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM borrowed_books WHERE book_id = $1 ORDER BY borrow_date, borrow_id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get borrow record by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowedBook> {
        sqlx::query_as::<_, BorrowedBook>("SELECT * FROM borrowed_books WHERE borrow_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Borrow record not found".to_string()))
    }

    /// Create a borrow record, taking a copy of the book when the record is
    /// outstanding
    pub async fn create(&self, data: &CreateBorrowedBook) -> AppResult<BorrowedBook> {
        let mut tx = self.pool.begin().await?;

        if let Some(book_id) = data.held_book() {
            if !take_copy(&mut tx, book_id).await? {
                return Err(AppError::BookNotAvailable);
            }
        }

        let record = sqlx::query_as::<_, BorrowedBook>(
            r#"
            INSERT INTO borrowed_books (member_id, book_id, borrow_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.member_id)
        .bind(data.book_id)
        .bind(data.borrow_date)
        .bind(data.return_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_constraint(e, DUPLICATE, MISSING_REFERENCE))?;

        tx.commit().await?;
        Ok(record)
    }

    /// Replace a borrow record.
    ///
    /// The copy held by the stored state is released and a copy is taken for
    /// the new state, so returning, un-returning and moving an outstanding
    /// record to another book all keep `available_copies` consistent.
    pub async fn update(&self, id: i32, data: &UpdateBorrowedBook) -> AppResult<BorrowedBook> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM borrowed_books WHERE borrow_id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Borrow record not found".to_string()))?;

        let (release, acquire) = copy_transfer(current.held_book(), data.held_book());

        if let Some(book_id) = acquire {
            if !take_copy(&mut tx, book_id).await? {
                return Err(AppError::BookNotAvailable);
            }
        }
        if let Some(book_id) = release {
            if !release_copy(&mut tx, book_id).await? {
                tracing::warn!("Book {} vanished while releasing borrow record {}", book_id, id);
            }
        }

        let record = sqlx::query_as::<_, BorrowedBook>(
            r#"
            UPDATE borrowed_books
            SET member_id = $1, book_id = $2, borrow_date = $3, return_date = $4
            WHERE borrow_id = $5
            RETURNING *
            "#,
        )
        .bind(data.member_id)
        .bind(data.book_id)
        .bind(data.borrow_date)
        .bind(data.return_date)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_constraint(e, DUPLICATE, MISSING_REFERENCE))?;

        tx.commit().await?;

        if release.is_some() || acquire.is_some() {
            tracing::info!(
                "Borrow record {} updated, released copy of {:?}, took copy of {:?}",
                id,
                release,
                acquire
            );
        }

        Ok(record)
    }

    /// Delete a borrow record, giving back the copy it still held
    pub async fn delete(&self, id: i32) -> AppResult<BorrowedBook> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, BorrowedBook>(
            "DELETE FROM borrowed_books WHERE borrow_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Borrow record not found".to_string()))?;

        if let Some(book_id) = record.held_book() {
            release_copy(&mut tx, book_id).await?;
        }

        tx.commit().await?;
        Ok(record)
    }
}
