//! In-process cursor store.
mod cursor_repository;

pub use cursor_repository::InMemoryCursorRepository;
