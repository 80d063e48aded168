//! Business logic services.
//!
//! - [`UrlService`] - Shortening, redirect resolution, statistics and administration

pub mod url_service;

pub use url_service::{MAX_GENERATION_ATTEMPTS, ShortenOutcome, ShortenerSettings, UrlService};
