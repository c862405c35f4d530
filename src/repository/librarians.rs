//! Librarians repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::librarian::{Librarian, LibrarianData},
};

#[derive(Clone)]
pub struct LibrariansRepository {
    pool: Pool<Postgres>,
}

impl LibrariansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Librarian>> {
        let rows = sqlx::query_as::<_, Librarian>("SELECT * FROM librarians ORDER BY librarian_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Librarian> {
        sqlx::query_as::<_, Librarian>("SELECT * FROM librarians WHERE librarian_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Librarian not found".to_string()))
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM librarians WHERE librarian_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn create(&self, data: &LibrarianData) -> AppResult<Librarian> {
        let row = sqlx::query_as::<_, Librarian>(
            "INSERT INTO librarians (full_name, hire_date) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.full_name)
        .bind(data.hire_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &LibrarianData) -> AppResult<Librarian> {
        sqlx::query_as::<_, Librarian>(
            r#"
            UPDATE librarians SET full_name = $1, hire_date = $2
            WHERE librarian_id = $3
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(data.hire_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Librarian not found".to_string()))
    }

    /// Delete a librarian (the account row goes with it)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM librarians WHERE librarian_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Librarian not found".to_string()));
        }
        Ok(())
    }
}
