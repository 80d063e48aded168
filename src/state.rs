//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ShortenerSettings, UrlService};
use crate::domain::repositories::UrlRepository;

/// Handler state. Cheap to clone; everything behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
}

impl AppState {
    /// Wires a service around the chosen storage backend.
    pub fn new(repository: Arc<dyn UrlRepository>, settings: ShortenerSettings) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository, settings)),
        }
    }
}
