use axum::{
    Router,
    routing::{get, post},
};
use sqlx::{Pool, Postgres};

use quill::{
    app_state::AppState,
    comments::handlers::{create_comment, list_comments},
    health::health_check,
    linkcheck::handlers::validate_urls,
    posts::handlers::{create_post, get_post, latest_post, list_posts},
};

/// Full API surface over real repositories and the default link policy.
/// Rate limiting is left off: it needs `ConnectInfo`, which `oneshot`
/// requests do not carry.
pub fn test_app(pool: Pool<Postgres>) -> Router {
    let state = AppState::new(pool);

    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/latest", get(latest_post))
        .route("/api/posts/{id}", get(get_post))
        .route("/api/comments", post(create_comment))
        .route("/api/comments/{post_id}", get(list_comments))
        .route("/api/validate-urls", post(validate_urls))
        .route("/healthz", get(health_check))
        .with_state(state)
}
