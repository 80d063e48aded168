//! Domain layer containing business entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Typed failure conditions of the core
//! - [`policy`] - Shortening and click-counting behavior switches
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod errors;
pub mod policy;
pub mod repositories;

pub use errors::{CodeError, StoreError};
pub use policy::{ClickCounting, ShortenPolicy};
