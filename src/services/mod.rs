//! Business logic services

pub mod books;
pub mod borrowing;
pub mod librarians;
pub mod members;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub members: members::MembersService,
    pub books: books::BooksService,
    pub borrowing: borrowing::BorrowingService,
    pub librarians: librarians::LibrariansService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            members: members::MembersService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            borrowing: borrowing::BorrowingService::new(repository.clone()),
            librarians: librarians::LibrariansService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping_database(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
