use std::sync::Arc;

use crate::config::Settings;
use crate::store::PlatformStore;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn PlatformStore>,
}

impl AppState {
    pub fn new(settings: Settings, store: Arc<dyn PlatformStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }
}
