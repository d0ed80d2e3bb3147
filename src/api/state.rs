use std::sync::Arc;

use crate::config::AppConfig;
use crate::recommend::Recommender;

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub default_limit: usize,
    pub cors_origin: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            recommender: Arc::new(Recommender::new(config.scoring.weights)),
            default_limit: config.scoring.default_limit,
            cors_origin: config.server.cors_origin.clone(),
        }
    }
}
