use anyhow::Result;
use axum::middleware;
use quill::{
    app_state::AppState,
    comments::handlers::{
        __path_create_comment, __path_list_comments, create_comment, list_comments,
    },
    config::Config,
    health::{__path_health_check, health_check},
    linkcheck::handlers::{__path_validate_urls, validate_urls},
    middleware::{RateLimit, rate_limit_middleware},
    posts::handlers::{
        __path_create_post, __path_get_post, __path_latest_post, __path_list_posts, create_post,
        get_post, latest_post, list_posts,
    },
};
use std::net::SocketAddr;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "quill", description = "A small blog platform with link-safety checking"),
    tags(
        (name = "posts", description = "Blog posts"),
        (name = "comments", description = "Comments with link-safety gating"),
        (name = "linkcheck", description = "URL validation"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(config.database_url())
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::new(pool);

    // Anonymous write paths get a per-IP budget; reads stay unthrottled
    let rate_limit = RateLimit::new(30, 60);
    let submission_routes = OpenApiRouter::new()
        .routes(routes!(create_comment))
        .routes(routes!(validate_urls))
        .layer(middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ));

    let (api_router, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_posts, create_post))
        .routes(routes!(latest_post))
        .routes(routes!(get_post))
        .routes(routes!(list_comments))
        .routes(routes!(health_check))
        .merge(submission_routes)
        .with_state(state)
        .split_for_parts();

    let app = api_router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc))
        .fallback_service(ServeDir::new(config.public_dir()))
        // Outermost last: the request id must exist before the trace span opens
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on http://{}", config.bind_addr());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
