use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::Comment;

/// Submission payload. The field is called `text` on the wire; the stored
/// column is `content`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub post_id: Uuid,
    pub text: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("'postId' and 'text' are required.".to_string());
        }
        if self.text.len() > 4096 {
            return Err("Comment too long".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

/// 400 body when the link-safety gate blocks a submission: the human-readable
/// message plus the offending URLs for the client to highlight.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RejectedCommentResponse {
    pub error: String,
    pub unsafe_urls: Vec<String>,
}
