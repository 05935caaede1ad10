//! Store reachability check
//!
//! Acquires a connection through the same factory the item handlers use and
//! runs `SELECT 1` on it. 200 when the round trip succeeds, 503 otherwise.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{ConnectionFactory, DbError};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

async fn ping(db: &dyn ConnectionFactory) -> Result<(), DbError> {
    let mut conn = db.connect().await?;
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match ping(state.db()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database: "reachable",
            }),
        ),
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(cause) => tracing::warn!("health check failed: {}: {}", e, cause),
                None => tracing::warn!("health check failed: {}", e),
            }
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "unreachable",
                }),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
