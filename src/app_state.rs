use crate::linkcheck::{LinkPolicy, UrlClassifier};
use crate::repositories::{
    CommentRepository, CommentRepositoryTrait, PostRepository, PostRepositoryTrait,
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub post_repo: Arc<dyn PostRepositoryTrait + Send + Sync>,
    pub comment_repo: Arc<dyn CommentRepositoryTrait + Send + Sync>,
    pub classifier: Arc<UrlClassifier>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self::with_policy(pool, LinkPolicy::default())
    }

    /// Build state with a custom link policy (tests swap the blacklist here).
    pub fn with_policy(pool: Pool<Postgres>, policy: LinkPolicy) -> Self {
        Self {
            post_repo: Arc::new(PostRepository::new(pool.clone())),
            comment_repo: Arc::new(CommentRepository::new(pool.clone())),
            classifier: Arc::new(UrlClassifier::new(policy)),
            db_pool: pool,
        }
    }
}
