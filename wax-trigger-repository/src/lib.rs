//! # WAX Trigger Repository
//! This crate provides the trait and implementations for persisting the
//! trigger's resumption cursor. It includes definitions for errors, the
//! `CursorRepository` interface, an in-memory store, and a PostgreSQL
//! implementation.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;

pub use errors::CursorRepositoryError;
pub use interfaces::CursorRepository;
pub use memory::InMemoryCursorRepository;
pub use postgres::PostgresCursorRepository;
