//! Book (catalog entry) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book row, also used as the response body
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
    pub total_copies: i32,
    /// Copies not currently lent out
    pub available_copies: i32,
}

/// Create book request. `available_copies` starts at `total_copies`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be 1 to 100 characters"))]
    pub author: String,
    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: Option<String>,
    pub published_year: Option<i32>,
    #[validate(range(min = 0, message = "Total copies cannot be negative"))]
    pub total_copies: i32,
}

/// Update book request (full replacement of the catalog fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be 1 to 100 characters"))]
    pub author: String,
    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: Option<String>,
    pub published_year: Option<i32>,
    #[validate(range(min = 0, message = "Total copies cannot be negative"))]
    pub total_copies: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_total_rejected() {
        let book: CreateBook = serde_json::from_str(
            r#"{"title": "Dune", "author": "Frank Herbert", "total_copies": -1}"#,
        )
        .unwrap();
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_available_copies_not_accepted_from_request() {
        // Unknown fields are ignored, availability is server-managed
        let book: CreateBook = serde_json::from_str(
            r#"{"title": "Dune", "author": "Frank Herbert", "genre": "sf", "total_copies": 4, "available_copies": 99}"#,
        )
        .unwrap();
        assert!(book.validate().is_ok());
        assert_eq!(book.total_copies, 4);
    }
}
