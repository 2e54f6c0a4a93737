use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::{net::SocketAddr, sync::Arc};
use tracing::warn;

use crate::posts::dtos::ErrorResponse;

/// Fixed-window counter per client IP. Comment submission is the only write
/// path an anonymous visitor can hit, so this sits in front of it.
#[derive(Clone)]
pub struct RateLimit {
    store: Arc<DashMap<String, WindowState>>,
    max_requests: u32,
    window_seconds: i64,
}

#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    window_start: DateTime<Utc>,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_seconds: i64) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            max_requests,
            window_seconds,
        }
    }

    /// Count one request from `key`; false once the window budget is spent.
    fn allow(&self, key: &str, now: DateTime<Utc>) -> bool {
        let mut entry = self
            .store
            .entry(key.to_string())
            .or_insert_with(|| WindowState {
                count: 0,
                window_start: now,
            });
        let state = entry.value_mut();

        if now.signed_duration_since(state.window_start) >= Duration::seconds(self.window_seconds) {
            state.count = 0;
            state.window_start = now;
        }

        state.count += 1;
        state.count <= self.max_requests
    }
}

/// IP-based rate limiting middleware.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(rate_limit): State<RateLimit>,
    req: Request,
    next: Next,
) -> Response {
    let ip = addr.ip().to_string();

    if !rate_limit.allow(&ip, Utc::now()) {
        warn!(%ip, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "Rate limit exceeded".to_string(),
            }),
        )
            .into_response();
    }

    next.run(req).await
}
