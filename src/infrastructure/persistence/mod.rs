//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryUrlRepository`] - Process-local maps behind a single lock
//! - [`PgUrlRepository`] - PostgreSQL storage via SQLx

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
