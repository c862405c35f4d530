//! Member (library patron) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Member row, also used as the response body
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub member_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub join_date: NaiveDate,
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1 to 100 characters"))]
    pub full_name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,
    /// Defaults to the current date when omitted
    pub join_date: Option<NaiveDate>,
}

/// Update member request (full replacement)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1 to 100 characters"))]
    pub full_name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,
    /// Keeps the stored join date when omitted
    pub join_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_member_validation() {
        let member: CreateMember = serde_json::from_str(
            r#"{"full_name": "Ada Lovelace", "email": "ada@example.org"}"#,
        )
        .unwrap();
        assert!(member.validate().is_ok());
        assert!(member.phone.is_none());
        assert!(member.join_date.is_none());

        let bad_email: CreateMember =
            serde_json::from_str(r#"{"full_name": "Ada", "email": "not-an-email"}"#).unwrap();
        assert!(bad_email.validate().is_err());

        let empty_name: CreateMember =
            serde_json::from_str(r#"{"full_name": "", "email": "ada@example.org"}"#).unwrap();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_phone_length() {
        let member = UpdateMember {
            full_name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            phone: Some("0".repeat(21)),
            join_date: None,
        };
        assert!(member.validate().is_err());
    }
}
