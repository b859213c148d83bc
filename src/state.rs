//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::infrastructure::memory::{InMemoryLinkStore, InMemoryUserStore};
use crate::infrastructure::remote_log::LogSink;

/// Handler state. Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkStore>>,
    pub user_service: Arc<UserService<InMemoryUserStore>>,
    pub log_sink: Arc<dyn LogSink>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<InMemoryLinkStore>>,
        user_service: Arc<UserService<InMemoryUserStore>>,
        log_sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            link_service,
            user_service,
            log_sink,
        }
    }
}
