use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// --- Tables ---

#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid, // FK -> posts.id
    pub content: String,
    pub created_at: DateTime<Utc>,
}
