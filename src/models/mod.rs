//! Data models for the library API

pub mod book;
pub mod borrowed_book;
pub mod librarian;
pub mod librarian_account;
pub mod member;

// Re-export commonly used types
pub use book::Book;
pub use borrowed_book::BorrowedBook;
pub use librarian::Librarian;
pub use librarian_account::LibrarianAccount;
pub use member::Member;
