use std::sync::Arc;

use crate::config::Config;
use crate::db::SystemStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn SystemStore>,
    pub config: Config,
}
