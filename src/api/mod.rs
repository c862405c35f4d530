//! API handlers and routing for the library REST endpoints

pub mod books;
pub mod borrowed_books;
pub mod health;
pub mod librarian_accounts;
pub mod librarians;
pub mod members;
pub mod openapi;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::AppState;

/// Plain confirmation message, returned by delete endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every resource answers with and without a trailing slash
    let resources: Vec<(&str, MethodRouter<AppState>)> = vec![
        // Members
        ("/members", get(members::list_members).post(members::create_member)),
        (
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        ),
        (
            "/members/:id/borrowed_books",
            get(members::list_member_borrowed_books),
        ),
        // Books
        ("/books", get(books::list_books).post(books::create_book)),
        (
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        ),
        (
            "/books/:id/borrowed_books",
            get(books::list_book_borrowed_books),
        ),
        // Borrowed books
        (
            "/borrowed_books",
            get(borrowed_books::list_borrowed_books).post(borrowed_books::create_borrowed_book),
        ),
        (
            "/borrowed_books/:id",
            get(borrowed_books::get_borrowed_book)
                .put(borrowed_books::update_borrowed_book)
                .delete(borrowed_books::delete_borrowed_book),
        ),
        // Librarians
        (
            "/librarians",
            get(librarians::list_librarians).post(librarians::create_librarian),
        ),
        (
            "/librarians/:id",
            get(librarians::get_librarian)
                .put(librarians::update_librarian)
                .delete(librarians::delete_librarian),
        ),
        (
            "/librarians/:id/account",
            get(librarians::get_librarian_account_of),
        ),
        // Librarian accounts
        (
            "/librarian_accounts",
            get(librarian_accounts::list_librarian_accounts)
                .post(librarian_accounts::create_librarian_account),
        ),
        (
            "/librarian_accounts/:id",
            get(librarian_accounts::get_librarian_account)
                .put(librarian_accounts::update_librarian_account)
                .delete(librarian_accounts::delete_librarian_account),
        ),
    ];

    let api = resources
        .into_iter()
        .fold(
            Router::new()
                .route("/health", get(health::health_check))
                .route("/ready", get(health::readiness_check)),
            |router, (path, methods)| {
                router
                    .route(path, methods.clone())
                    .route(&format!("{}/", path), methods)
            },
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
