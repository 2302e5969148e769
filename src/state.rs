use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::scheduling::Scheduler;

pub struct AppState {
    pub config: AppConfig,
    pub scheduler: Arc<Scheduler>,
}
