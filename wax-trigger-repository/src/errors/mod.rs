//! Error types for the trigger cursor repository.
mod cursor_repository;

pub use cursor_repository::CursorRepositoryError;
