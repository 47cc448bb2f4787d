//! This module defines and re-exports the interfaces for cursor persistence.
mod cursor_repository;

pub use cursor_repository::CursorRepository;
