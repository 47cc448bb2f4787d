//! PostgreSQL-backed cursor persistence.
mod cursor_repository;

pub use cursor_repository::PostgresCursorRepository;
