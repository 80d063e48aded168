//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls,
//! validation, and policy. They consume repository traits and give HTTP
//! handlers a small API.
//!
//! - [`services::url_service::UrlService`] - Short URL creation, resolution and statistics

pub mod services;
