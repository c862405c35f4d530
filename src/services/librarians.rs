//! Librarian and librarian account service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        librarian::{Librarian, LibrarianData},
        librarian_account::{CreateLibrarianAccount, LibrarianAccount, UpdateLibrarianAccount},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariansService {
    repository: Repository,
}

impl LibrariansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Librarian>> {
        self.repository.librarians.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Librarian> {
        self.repository.librarians.get_by_id(id).await
    }

    pub async fn create(&self, data: &LibrarianData) -> AppResult<Librarian> {
        data.validate()?;
        self.repository.librarians.create(data).await
    }

    pub async fn update(&self, id: i32, data: &LibrarianData) -> AppResult<Librarian> {
        data.validate()?;
        self.repository.librarians.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.librarians.delete(id).await?;
        tracing::info!("Deleted librarian {} and any account", id);
        Ok(())
    }

    /// The account of a librarian
    pub async fn account(&self, id: i32) -> AppResult<LibrarianAccount> {
        self.repository.librarians.get_by_id(id).await?;
        self.repository
            .librarian_accounts
            .get_by_librarian(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Librarian account not found".to_string()))
    }

    pub async fn list_accounts(&self) -> AppResult<Vec<LibrarianAccount>> {
        self.repository.librarian_accounts.list().await
    }

    pub async fn get_account(&self, id: i32) -> AppResult<LibrarianAccount> {
        self.repository.librarian_accounts.get_by_id(id).await
    }

    /// Create the account of a librarian (at most one per librarian)
    pub async fn create_account(&self, data: &CreateLibrarianAccount) -> AppResult<LibrarianAccount> {
        data.validate()?;
        if !self.repository.librarians.exists(data.librarian_id).await? {
            return Err(AppError::NotFound("Librarian not found".to_string()));
        }
        let account = self.repository.librarian_accounts.create(data).await?;
        tracing::info!(
            "Created account '{}' for librarian {}",
            account.username,
            account.librarian_id
        );
        Ok(account)
    }

    pub async fn update_account(
        &self,
        id: i32,
        data: &UpdateLibrarianAccount,
    ) -> AppResult<LibrarianAccount> {
        data.validate()?;
        self.repository.librarian_accounts.update(id, data).await
    }

    pub async fn delete_account(&self, id: i32) -> AppResult<()> {
        self.repository.librarian_accounts.delete(id).await
    }
}
