//! Borrow record model (junction between members and books)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Borrow record row, also used as the response body
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowedBook {
    pub borrow_id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowedBook {
    /// Book whose copy this record currently holds, if any
    pub fn held_book(&self) -> Option<i32> {
        self.return_date.is_none().then_some(self.book_id)
    }
}

/// Create borrow record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateBorrowedBook {
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl CreateBorrowedBook {
    /// Book whose copy the new record will hold, if any
    pub fn held_book(&self) -> Option<i32> {
        self.return_date.is_none().then_some(self.book_id)
    }
}

/// Update borrow record request (full replacement). Setting `return_date`
/// marks the book as returned.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateBorrowedBook {
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl UpdateBorrowedBook {
    pub fn held_book(&self) -> Option<i32> {
        self.return_date.is_none().then_some(self.book_id)
    }
}

/// Borrow record list filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BorrowedBookQuery {
    /// Only records without a return date
    pub outstanding: Option<bool>,
}

fn check_dates(borrow_date: NaiveDate, return_date: Option<NaiveDate>) -> Result<(), ValidationError> {
    match return_date {
        Some(returned) if returned < borrow_date => {
            let mut err = ValidationError::new("return_before_borrow");
            err.message = Some("Return date cannot precede borrow date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_create_dates(data: &CreateBorrowedBook) -> Result<(), ValidationError> {
    check_dates(data.borrow_date, data.return_date)
}

fn validate_update_dates(data: &UpdateBorrowedBook) -> Result<(), ValidationError> {
    check_dates(data.borrow_date, data.return_date)
}

/// Copy-count movements required to go from one holding to another.
///
/// Returns `(release, acquire)`: the book to give a copy back to and the
/// book to take a copy from. Nothing moves when both sides hold the same book.
pub fn copy_transfer(before: Option<i32>, after: Option<i32>) -> (Option<i32>, Option<i32>) {
    if before == after {
        (None, None)
    } else {
        (before, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_return_before_borrow_rejected() {
        let data = UpdateBorrowedBook {
            member_id: 1,
            book_id: 2,
            borrow_date: date(2024, 3, 10),
            return_date: Some(date(2024, 3, 9)),
        };
        assert!(data.validate().is_err());

        let same_day = UpdateBorrowedBook {
            return_date: Some(date(2024, 3, 10)),
            ..data
        };
        assert!(same_day.validate().is_ok());
    }

    #[test]
    fn test_held_book() {
        let record = BorrowedBook {
            borrow_id: 1,
            member_id: 1,
            book_id: 7,
            borrow_date: date(2024, 1, 1),
            return_date: None,
        };
        assert_eq!(record.held_book(), Some(7));

        let returned = BorrowedBook {
            return_date: Some(date(2024, 1, 5)),
            ..record
        };
        assert_eq!(returned.held_book(), None);
    }

    #[test]
    fn test_copy_transfer() {
        // Return
        assert_eq!(copy_transfer(Some(7), None), (Some(7), None));
        // Un-return
        assert_eq!(copy_transfer(None, Some(7)), (None, Some(7)));
        // Still outstanding, same book
        assert_eq!(copy_transfer(Some(7), Some(7)), (None, None));
        // Already returned, updated again
        assert_eq!(copy_transfer(None, None), (None, None));
        // Outstanding record moved to another book
        assert_eq!(copy_transfer(Some(7), Some(8)), (Some(7), Some(8)));
    }

    #[test]
    fn test_parse_dates_from_json() {
        let data: CreateBorrowedBook = serde_json::from_str(
            r#"{"member_id": 1, "book_id": 2, "borrow_date": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(data.borrow_date, date(2024, 5, 1));
        assert_eq!(data.held_book(), Some(2));
    }
}
