use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    comments::dtos::{
        CommentListResponse, CommentResponse, CreateCommentRequest, RejectedCommentResponse,
    },
    linkcheck,
    posts::dtos::ErrorResponse,
};

#[utoipa::path(
    get,
    path = "/api/comments/{post_id}",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments for the post, newest first", body = CommentListResponse)
    )
)]
pub async fn list_comments(State(state): State<AppState>, Path(post_id): Path<Uuid>) -> Response {
    match state.comment_repo.list_for_post(post_id).await {
        Ok(comments) => (
            StatusCode::OK,
            Json(CommentListResponse {
                comments: comments.into_iter().map(CommentResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch comments.".to_string(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Invalid payload or unsafe links", body = RejectedCommentResponse),
        (status = 404, description = "Unknown post", body = ErrorResponse)
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    // The comment must target an existing post
    match state.post_repo.find_by_id(payload.post_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Post with id {} not found.", payload.post_id),
                }),
            )
                .into_response();
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create comment.".to_string(),
                }),
            )
                .into_response();
        }
    }

    // Link-safety gate: every URL in the text must classify as safe
    let report = linkcheck::check_text(&state.classifier, &payload.text);
    if !report.all_safe() {
        let unsafe_urls: Vec<String> = report
            .unsafe_urls()
            .into_iter()
            .map(str::to_string)
            .collect();
        info!(post_id = %payload.post_id, urls = ?unsafe_urls, "Rejected comment with unsafe links");
        return (
            StatusCode::BAD_REQUEST,
            Json(RejectedCommentResponse {
                error: format!("Comment contains unsafe links: {}", unsafe_urls.join(", ")),
                unsafe_urls,
            }),
        )
            .into_response();
    }

    match state
        .comment_repo
        .create(payload.post_id, &payload.text)
        .await
    {
        Ok(comment) => (StatusCode::CREATED, Json(CommentResponse::from(comment))).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to create comment.".to_string(),
            }),
        )
            .into_response(),
    }
}
