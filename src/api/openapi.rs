//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrowed_books, health, librarian_accounts, librarians, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "CRUD API for members, books, borrow records and librarians"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Members
        members::create_member,
        members::list_members,
        members::get_member,
        members::update_member,
        members::delete_member,
        members::list_member_borrowed_books,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
        books::list_book_borrowed_books,
        // Borrowed books
        borrowed_books::create_borrowed_book,
        borrowed_books::list_borrowed_books,
        borrowed_books::get_borrowed_book,
        borrowed_books::update_borrowed_book,
        borrowed_books::delete_borrowed_book,
        // Librarians
        librarians::create_librarian,
        librarians::list_librarians,
        librarians::get_librarian,
        librarians::update_librarian,
        librarians::delete_librarian,
        librarians::get_librarian_account_of,
        // Librarian accounts
        librarian_accounts::create_librarian_account,
        librarian_accounts::list_librarian_accounts,
        librarian_accounts::get_librarian_account,
        librarian_accounts::update_librarian_account,
        librarian_accounts::delete_librarian_account,
    ),
    components(
        schemas(
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::borrowed_book::BorrowedBook,
            crate::models::borrowed_book::CreateBorrowedBook,
            crate::models::borrowed_book::UpdateBorrowedBook,
            crate::models::librarian::Librarian,
            crate::models::librarian::LibrarianData,
            crate::models::librarian_account::LibrarianAccount,
            crate::models::librarian_account::CreateLibrarianAccount,
            crate::models::librarian_account::UpdateLibrarianAccount,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "members", description = "Library members"),
        (name = "books", description = "Book catalog"),
        (name = "borrowed_books", description = "Borrowing and returning books"),
        (name = "librarians", description = "Library staff"),
        (name = "librarian_accounts", description = "Staff login accounts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/members",
            "/members/{id}",
            "/books/{id}/borrowed_books",
            "/borrowed_books",
            "/borrowed_books/{id}",
            "/librarians/{id}/account",
            "/librarian_accounts/{id}",
            "/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {}", path);
        }
    }
}
