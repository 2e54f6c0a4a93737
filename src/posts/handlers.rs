use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    posts::dtos::{CreatePostRequest, ErrorResponse, PostListResponse, PostResponse},
};

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, newest first", body = PostListResponse)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Response {
    match state.post_repo.list().await {
        Ok(posts) => (
            StatusCode::OK,
            Json(PostListResponse {
                posts: posts.into_iter().map(PostResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch posts.".to_string(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/posts/latest",
    tag = "posts",
    responses(
        (status = 200, description = "The newest post", body = PostResponse),
        (status = 404, description = "No posts exist yet", body = ErrorResponse)
    )
)]
pub async fn latest_post(State(state): State<AppState>) -> Response {
    match state.post_repo.find_latest().await {
        Ok(Some(post)) => (StatusCode::OK, Json(PostResponse::from(post))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No posts found.".to_string(),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch latest post.".to_string(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Unknown post", body = ErrorResponse)
    )
)]
pub async fn get_post(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.post_repo.find_by_id(id).await {
        Ok(Some(post)) => (StatusCode::OK, Json(PostResponse::from(post))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Post not found.".to_string(),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch post.".to_string(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    match state.post_repo.create(&payload.title, &payload.content).await {
        Ok(post) => (StatusCode::CREATED, Json(PostResponse::from(post))).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to create post.".to_string(),
            }),
        )
            .into_response(),
    }
}
