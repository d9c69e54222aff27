use std::sync::Arc;

use crate::email::Notifier;
use crate::storage::Storage;

/// Shared services, assembled once in `main` and handed to both the REST
/// collector (axum state) and the server functions (leptos context).
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, notifier: Arc<Notifier>) -> Self {
        AppState { storage, notifier }
    }
}
