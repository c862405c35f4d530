//! Repository layer for database operations

pub mod books;
pub mod borrowed_books;
pub mod librarian_accounts;
pub mod librarians;
pub mod members;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub members: members::MembersRepository,
    pub books: books::BooksRepository,
    pub borrowed_books: borrowed_books::BorrowedBooksRepository,
    pub librarians: librarians::LibrariansRepository,
    pub librarian_accounts: librarian_accounts::LibrarianAccountsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            members: members::MembersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            borrowed_books: borrowed_books::BorrowedBooksRepository::new(pool.clone()),
            librarians: librarians::LibrariansRepository::new(pool.clone()),
            librarian_accounts: librarian_accounts::LibrarianAccountsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
