//! Book catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        borrowed_book::BorrowedBook,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.create(data).await?;
        tracing::info!(
            "Created book {} '{}' with {} copies",
            book.book_id,
            book.title,
            book.total_copies
        );
        Ok(book)
    }

    /// Update a book, clamping available copies to the new total
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.update(id, data).await?;
        tracing::debug!(
            "Book {} now has {}/{} copies available",
            book.book_id,
            book.available_copies,
            book.total_copies
        );
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    /// Borrow records of a book
    pub async fn borrowed_books(&self, id: i32) -> AppResult<Vec<BorrowedBook>> {
        // Verify book exists
        self.repository.books.get_by_id(id).await?;
        self.repository.borrowed_books.list_for_book(id).await
    }
}
