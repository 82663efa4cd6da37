use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::SessionScheduler;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scheduler: SessionScheduler,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            scheduler: SessionScheduler::new(),
        }
    }
}
