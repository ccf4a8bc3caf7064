//! `storefront-infra` — store adapter implementations.
//!
//! Postgres (sqlx) for production, in-memory for tests/dev. Both implement
//! the store traits from `storefront-catalog`.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
