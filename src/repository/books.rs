//! Books repository for database operations
//!
//! Besides the plain CRUD queries this module owns the two statements that
//! move copies in and out of `available_copies`. Both run on a caller
//! supplied connection so they can share a transaction with the borrow
//! record write.

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

const DUPLICATE: &str = "Book already exists";
const REFERENCED: &str = "Book still has borrow records";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY book_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE book_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE book_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create a book, every copy starts available
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, published_year, total_copies, available_copies)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(data.published_year)
        .bind(data.total_copies)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, DUPLICATE, REFERENCED))
    }

    /// Replace the catalog fields of a book.
    ///
    /// `available_copies` is left alone except that it never ends up above
    /// the new `total_copies`.
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, published_year = $4,
                total_copies = $5,
                available_copies = LEAST(available_copies, $5)
            WHERE book_id = $6
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(data.published_year)
        .bind(data.total_copies)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_constraint(e, DUPLICATE, REFERENCED))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}

/// Take one copy of a book. Returns `false` when the book does not exist
/// or has no copy left.
pub async fn take_copy(conn: &mut PgConnection, book_id: i32) -> AppResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE books SET available_copies = available_copies - 1
        WHERE book_id = $1 AND available_copies > 0
        "#,
    )
    .bind(book_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Give one copy back, never exceeding `total_copies`. Returns `false` when
/// the book no longer exists.
pub async fn release_copy(conn: &mut PgConnection, book_id: i32) -> AppResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE books SET available_copies = LEAST(available_copies + 1, total_copies)
        WHERE book_id = $1
        "#,
    )
    .bind(book_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}
