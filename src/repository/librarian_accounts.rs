//! Librarian accounts repository
//!
//! `password_hash` is written but never read back.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::librarian_account::{CreateLibrarianAccount, LibrarianAccount, UpdateLibrarianAccount},
};

const ACCOUNT_COLUMNS: &str = "account_id, librarian_id, username";

/// Map a constraint violation to the rule it breaks
fn map_account_error(err: sqlx::Error) -> AppError {
    let constraint = err
        .as_database_error()
        .and_then(|db_err| db_err.constraint())
        .map(str::to_string);

    match constraint.as_deref() {
        Some("librarian_accounts_username_key") => {
            AppError::Conflict("Username already taken".to_string())
        }
        Some("librarian_accounts_librarian_id_key") => {
            AppError::Conflict("Librarian already has an account".to_string())
        }
        _ => AppError::from_constraint(
            err,
            "Librarian account already exists",
            "Librarian does not exist",
        ),
    }
}

#[derive(Clone)]
pub struct LibrarianAccountsRepository {
    pool: Pool<Postgres>,
}

impl LibrarianAccountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<LibrarianAccount>> {
        let query = format!(
            "SELECT {} FROM librarian_accounts ORDER BY account_id",
            ACCOUNT_COLUMNS
        );
        let rows = sqlx::query_as::<_, LibrarianAccount>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LibrarianAccount> {
        let query = format!(
            "SELECT {} FROM librarian_accounts WHERE account_id = $1",
            ACCOUNT_COLUMNS
        );
        sqlx::query_as::<_, LibrarianAccount>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Librarian account not found".to_string()))
    }

    /// Account of a librarian, if one was created
    pub async fn get_by_librarian(&self, librarian_id: i32) -> AppResult<Option<LibrarianAccount>> {
        let query = format!(
            "SELECT {} FROM librarian_accounts WHERE librarian_id = $1",
            ACCOUNT_COLUMNS
        );
        let row = sqlx::query_as::<_, LibrarianAccount>(&query)
            .bind(librarian_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, data: &CreateLibrarianAccount) -> AppResult<LibrarianAccount> {
        let query = format!(
            r#"
            INSERT INTO librarian_accounts (librarian_id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        );
        sqlx::query_as::<_, LibrarianAccount>(&query)
            .bind(data.librarian_id)
            .bind(&data.username)
            .bind(&data.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(map_account_error)
    }

    /// Update the username, and the password hash when one is given
    pub async fn update(&self, id: i32, data: &UpdateLibrarianAccount) -> AppResult<LibrarianAccount> {
        let query = format!(
            r#"
            UPDATE librarian_accounts
            SET username = $1, password_hash = COALESCE($2, password_hash)
            WHERE account_id = $3
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        );
        sqlx::query_as::<_, LibrarianAccount>(&query)
            .bind(&data.username)
            .bind(&data.password_hash)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_account_error)?
            .ok_or_else(|| AppError::NotFound("Librarian account not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM librarian_accounts WHERE account_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Librarian account not found".to_string()));
        }
        Ok(())
    }
}
