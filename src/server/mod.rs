pub mod auth;
pub mod probes;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use config::AppConfig;
use tower_http::trace::TraceLayer;

use crate::core::Jobly;
use crate::errors::JoblyError;
use auth::{authenticate, ensure_admin};
use probes::{healthz, livez};
use state::AppState;

/// Restrict the methods registered so far on `route` to admins
fn admin(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(from_fn(ensure_admin))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/companies",
            admin(post(routes::companies::create)).get(routes::companies::list),
        )
        .route(
            "/companies/:handle",
            admin(
                axum::routing::patch(routes::companies::update)
                    .delete(routes::companies::delete),
            )
            .get(routes::companies::get),
        )
        .route(
            "/jobs",
            admin(post(routes::jobs::create)).get(routes::jobs::list),
        )
        .route(
            "/jobs/:id",
            admin(axum::routing::patch(routes::jobs::update).delete(routes::jobs::delete))
                .get(routes::jobs::get),
        )
        .layer(from_fn_with_state(state.clone(), authenticate))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect to the database and serve until ctrl+c
pub async fn listen(config: AppConfig) -> Result<(), JoblyError> {
    let jobly = Jobly::new(&config.database).await?;
    let state = AppState::new(jobly, config.auth);

    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!("Listening at {}", config.server.bind_address());

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    tracing::info!("received ctrl+c interrupt, closing server");
}
