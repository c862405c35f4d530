//! Borrow record endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::borrowed_book::{BorrowedBook, BorrowedBookQuery, CreateBorrowedBook, UpdateBorrowedBook},
};

use super::MessageResponse;

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrowed_books",
    tag = "borrowed_books",
    request_body = CreateBorrowedBook,
    responses(
        (status = 201, description = "Book borrowed, one copy less available", body = BorrowedBook),
        (status = 400, description = "Book not available or invalid dates"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn create_borrowed_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBorrowedBook>,
) -> AppResult<(StatusCode, Json<BorrowedBook>)> {
    let record = state.services.borrowing.borrow(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List borrow records
#[utoipa::path(
    get,
    path = "/borrowed_books",
    tag = "borrowed_books",
    params(BorrowedBookQuery),
    responses(
        (status = 200, description = "Borrow records", body = Vec<BorrowedBook>)
    )
)]
pub async fn list_borrowed_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BorrowedBookQuery>,
) -> AppResult<Json<Vec<BorrowedBook>>> {
    let records = state
        .services
        .borrowing
        .list(query.outstanding.unwrap_or(false))
        .await?;
    Ok(Json(records))
}

/// Get a borrow record by ID
#[utoipa::path(
    get,
    path = "/borrowed_books/{id}",
    tag = "borrowed_books",
    params(("id" = i32, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Borrow record", body = BorrowedBook),
        (status = 404, description = "Borrow record not found")
    )
)]
pub async fn get_borrowed_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BorrowedBook>> {
    let record = state.services.borrowing.get_by_id(id).await?;
    Ok(Json(record))
}

/// Replace a borrow record (set `return_date` to return the book)
#[utoipa::path(
    put,
    path = "/borrowed_books/{id}",
    tag = "borrowed_books",
    params(("id" = i32, Path, description = "Borrow record ID")),
    request_body = UpdateBorrowedBook,
    responses(
        (status = 200, description = "Borrow record updated", body = BorrowedBook),
        (status = 400, description = "Book not available or invalid dates"),
        (status = 404, description = "Borrow record, member or book not found")
    )
)]
pub async fn update_borrowed_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBorrowedBook>,
) -> AppResult<Json<BorrowedBook>> {
    let record = state.services.borrowing.update(id, &data).await?;
    Ok(Json(record))
}

/// Delete a borrow record
#[utoipa::path(
    delete,
    path = "/borrowed_books/{id}",
    tag = "borrowed_books",
    params(("id" = i32, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Borrow record deleted", body = MessageResponse),
        (status = 404, description = "Borrow record not found")
    )
)]
pub async fn delete_borrowed_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowing.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Borrow record {} deleted successfully",
        id
    ))))
}
