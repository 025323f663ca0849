use config::AuthConfig;
use std::sync::Arc;

use crate::core::Jobly;

#[derive(Debug, Clone)]
pub struct AppState {
    pub jobly: Arc<Jobly>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(jobly: Jobly, auth: AuthConfig) -> Self {
        Self {
            jobly: Arc::new(jobly),
            auth: Arc::new(auth),
        }
    }
}
