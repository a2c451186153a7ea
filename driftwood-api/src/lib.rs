/*
    driftwood-api - HTTP adapter layer for the driftwood board

    Thin glue over driftwood-core: axum routing, JSON bodies, JWT
    issuance/validation, error-to-status mapping and static file serving.
    All state lives in the shared in-memory store.
*/

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use driftwood_core::Store;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod token;

pub use config::Config;
pub use error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            store: Arc::new(Store::new()),
            config: Arc::new(config),
        }
    }
}

/// Build the full application router: the `/api` surface plus static
/// file serving for the frontend bundle.
pub fn app(state: AppState) -> Router {
    let web_dir = state.config.web_dir.clone();

    let api = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/posts", get(handlers::posts::list).post(handlers::posts::create))
        .route("/posts/", get(handlers::posts::list))
        .route("/posts/:category", get(handlers::posts::by_category))
        .route("/user/:username", get(handlers::posts::by_user))
        .route(
            "/post/:id",
            get(handlers::posts::details)
                .post(handlers::posts::add_comment)
                .delete(handlers::posts::delete_post),
        )
        // GET  /post/:id/{upvote|downvote|unvote} casts a vote;
        // DELETE /post/:id/:comment_id removes a comment. One parametric
        // route serves both shapes.
        .route(
            "/post/:id/:action",
            get(handlers::posts::vote_action).delete(handlers::posts::delete_comment),
        );

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(web_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
