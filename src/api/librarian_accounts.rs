//! Librarian account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::librarian_account::{CreateLibrarianAccount, LibrarianAccount, UpdateLibrarianAccount},
};

use super::MessageResponse;

/// Create a librarian account
#[utoipa::path(
    post,
    path = "/librarian_accounts",
    tag = "librarian_accounts",
    request_body = CreateLibrarianAccount,
    responses(
        (status = 201, description = "Account created", body = LibrarianAccount),
        (status = 404, description = "Librarian not found"),
        (status = 409, description = "Username taken or librarian already has an account")
    )
)]
pub async fn create_librarian_account(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLibrarianAccount>,
) -> AppResult<(StatusCode, Json<LibrarianAccount>)> {
    let account = state.services.librarians.create_account(&data).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// List all librarian accounts
#[utoipa::path(
    get,
    path = "/librarian_accounts",
    tag = "librarian_accounts",
    responses(
        (status = 200, description = "All accounts", body = Vec<LibrarianAccount>)
    )
)]
pub async fn list_librarian_accounts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LibrarianAccount>>> {
    let accounts = state.services.librarians.list_accounts().await?;
    Ok(Json(accounts))
}

/// Get a librarian account by ID
#[utoipa::path(
    get,
    path = "/librarian_accounts/{id}",
    tag = "librarian_accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account details", body = LibrarianAccount),
        (status = 404, description = "Librarian account not found")
    )
)]
pub async fn get_librarian_account(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LibrarianAccount>> {
    let account = state.services.librarians.get_account(id).await?;
    Ok(Json(account))
}

/// Update a librarian account
#[utoipa::path(
    put,
    path = "/librarian_accounts/{id}",
    tag = "librarian_accounts",
    params(("id" = i32, Path, description = "Account ID")),
    request_body = UpdateLibrarianAccount,
    responses(
        (status = 200, description = "Account updated", body = LibrarianAccount),
        (status = 404, description = "Librarian account not found"),
        (status = 409, description = "Username taken")
    )
)]
pub async fn update_librarian_account(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLibrarianAccount>,
) -> AppResult<Json<LibrarianAccount>> {
    let account = state.services.librarians.update_account(id, &data).await?;
    Ok(Json(account))
}

/// Delete a librarian account
#[utoipa::path(
    delete,
    path = "/librarian_accounts/{id}",
    tag = "librarian_accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 404, description = "Librarian account not found")
    )
)]
pub async fn delete_librarian_account(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.librarians.delete_account(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Librarian account {} deleted successfully",
        id
    ))))
}
