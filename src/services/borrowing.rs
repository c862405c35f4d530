//! Borrow and return service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::borrowed_book::{BorrowedBook, CreateBorrowedBook, UpdateBorrowedBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowingService {
    repository: Repository,
}

impl BorrowingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, outstanding_only: bool) -> AppResult<Vec<BorrowedBook>> {
        self.repository.borrowed_books.list(outstanding_only).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowedBook> {
        self.repository.borrowed_books.get_by_id(id).await
    }

    /// Borrow a book.
    ///
    /// A missing book and a book without available copies are the same
    /// failure: the book is not available.
    pub async fn borrow(&self, data: &CreateBorrowedBook) -> AppResult<BorrowedBook> {
        data.validate()?;

        if !self.repository.members.exists(data.member_id).await? {
            return Err(AppError::NotFound("Member not found".to_string()));
        }
        if data.held_book().is_none() && !self.repository.books.exists(data.book_id).await? {
            return Err(AppError::BookNotAvailable);
        }

        let record = self.repository.borrowed_books.create(data).await?;
        tracing::info!(
            "Member {} borrowed book {} (record {})",
            record.member_id,
            record.book_id,
            record.borrow_id
        );
        Ok(record)
    }

    /// Replace a borrow record. Setting a return date gives the copy back.
    pub async fn update(&self, id: i32, data: &UpdateBorrowedBook) -> AppResult<BorrowedBook> {
        data.validate()?;

        if !self.repository.members.exists(data.member_id).await? {
            return Err(AppError::NotFound("Member not found".to_string()));
        }
        if !self.repository.books.exists(data.book_id).await? {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        self.repository.borrowed_books.update(id, data).await
    }

    /// Delete a borrow record. An outstanding record gives its copy back.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let record = self.repository.borrowed_books.delete(id).await?;
        tracing::info!(
            "Deleted borrow record {} (book {}, outstanding: {})",
            id,
            record.book_id,
            record.return_date.is_none()
        );
        Ok(())
    }
}
