use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::{Pool, Postgres};
use tracing::error;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    database: String,
    posts: i64,
}

/// Liveness probe that doubles as a smoke test: counting posts proves the
/// connection works and the schema is migrated.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse),
        (status = 503, description = "Service unavailable")
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    match count_posts(&state.db_pool).await {
        Ok(posts) => Ok(Json(HealthResponse {
            status: "OK".to_string(),
            database: "healthy".to_string(),
            posts,
        })),
        Err(err) => {
            error!(error = %err, "Database health check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn count_posts(pool: &Pool<Postgres>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT count(*) FROM posts")
        .fetch_one(pool)
        .await
}
