//! Commerce store implementations.
//!
//! Provides two backends for the repository traits defined in `domain`:
//! - [`InMemoryStore`] for development and tests
//! - [`PostgresStore`] for durable persistence via sqlx

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
