//! Librarian account model (one-to-one with a librarian)
//!
//! `password_hash` is stored as given. It is never hashed nor checked here,
//! and never included in a response.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Librarian account as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LibrarianAccount {
    pub account_id: i32,
    pub librarian_id: i32,
    pub username: String,
}

/// Create librarian account request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLibrarianAccount {
    pub librarian_id: i32,
    #[validate(length(min = 1, max = 50, message = "Username must be 1 to 50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 200, message = "Password hash must be 1 to 200 characters"))]
    pub password_hash: String,
}

/// Update librarian account request. The stored hash is kept when
/// `password_hash` is omitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLibrarianAccount {
    #[validate(length(min = 1, max = 50, message = "Username must be 1 to 50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 200, message = "Password hash must be 1 to 200 characters"))]
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let account = LibrarianAccount {
            account_id: 1,
            librarian_id: 3,
            username: "mlewis".to_string(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "mlewis");
    }

    #[test]
    fn test_update_without_hash() {
        let data: UpdateLibrarianAccount = serde_json::from_str(r#"{"username": "mlewis"}"#).unwrap();
        assert!(data.validate().is_ok());
        assert!(data.password_hash.is_none());

        let empty: UpdateLibrarianAccount =
            serde_json::from_str(r#"{"username": "mlewis", "password_hash": ""}"#).unwrap();
        assert!(empty.validate().is_err());
    }
}
