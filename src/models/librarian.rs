//! Librarian (staff) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Librarian {
    pub librarian_id: i32,
    pub full_name: String,
    pub hire_date: NaiveDate,
}

/// Create or replace a librarian
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LibrarianData {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1 to 100 characters"))]
    pub full_name: String,
    pub hire_date: NaiveDate,
}
