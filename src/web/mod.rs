use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::registry::ActivityRegistry;

pub mod routes;

/// Assembles the full application router over a registry. Kept in the
/// library so integration tests can drive the app without a socket.
pub fn app(registry: Arc<ActivityRegistry>) -> Router {
    Router::new()
        // Landing page lives under /static; the root is just a pointer to it.
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/health", get(routes::health::health_check))
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:name/unregister",
            delete(routes::activities::unregister_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(registry)
}
