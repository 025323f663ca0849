use axum::extract::State;

use super::state::AppState;
use crate::errors::JoblyError;

pub async fn livez() -> Result<(), JoblyError> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<(), JoblyError> {
    state.jobly.health_check().await?;
    tracing::debug!("service is healthy");
    Ok(())
}
