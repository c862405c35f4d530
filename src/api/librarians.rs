//! Librarian endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        librarian::{Librarian, LibrarianData},
        librarian_account::LibrarianAccount,
    },
};

use super::MessageResponse;

/// Create a librarian
#[utoipa::path(
    post,
    path = "/librarians",
    tag = "librarians",
    request_body = LibrarianData,
    responses(
        (status = 201, description = "Librarian created", body = Librarian),
        (status = 400, description = "Invalid librarian data")
    )
)]
pub async fn create_librarian(
    State(state): State<crate::AppState>,
    Json(data): Json<LibrarianData>,
) -> AppResult<(StatusCode, Json<Librarian>)> {
    let librarian = state.services.librarians.create(&data).await?;
    Ok((StatusCode::CREATED, Json(librarian)))
}

/// List all librarians
#[utoipa::path(
    get,
    path = "/librarians",
    tag = "librarians",
    responses(
        (status = 200, description = "All librarians", body = Vec<Librarian>)
    )
)]
pub async fn list_librarians(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Librarian>>> {
    let librarians = state.services.librarians.list().await?;
    Ok(Json(librarians))
}

/// Get a librarian by ID
#[utoipa::path(
    get,
    path = "/librarians/{id}",
    tag = "librarians",
    params(("id" = i32, Path, description = "Librarian ID")),
    responses(
        (status = 200, description = "Librarian details", body = Librarian),
        (status = 404, description = "Librarian not found")
    )
)]
pub async fn get_librarian(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Librarian>> {
    let librarian = state.services.librarians.get_by_id(id).await?;
    Ok(Json(librarian))
}

/// Replace a librarian
#[utoipa::path(
    put,
    path = "/librarians/{id}",
    tag = "librarians",
    params(("id" = i32, Path, description = "Librarian ID")),
    request_body = LibrarianData,
    responses(
        (status = 200, description = "Librarian updated", body = Librarian),
        (status = 404, description = "Librarian not found")
    )
)]
pub async fn update_librarian(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<LibrarianData>,
) -> AppResult<Json<Librarian>> {
    let librarian = state.services.librarians.update(id, &data).await?;
    Ok(Json(librarian))
}

/// Delete a librarian and its account
#[utoipa::path(
    delete,
    path = "/librarians/{id}",
    tag = "librarians",
    params(("id" = i32, Path, description = "Librarian ID")),
    responses(
        (status = 200, description = "Librarian deleted", body = MessageResponse),
        (status = 404, description = "Librarian not found")
    )
)]
pub async fn delete_librarian(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.librarians.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Librarian {} deleted successfully",
        id
    ))))
}

/// Get the account of a librarian
#[utoipa::path(
    get,
    path = "/librarians/{id}/account",
    tag = "librarians",
    params(("id" = i32, Path, description = "Librarian ID")),
    responses(
        (status = 200, description = "Librarian account", body = LibrarianAccount),
        (status = 404, description = "Librarian or account not found")
    )
)]
pub async fn get_librarian_account_of(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LibrarianAccount>> {
    let account = state.services.librarians.account(id).await?;
    Ok(Json(account))
}
