use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;
use crate::handlers;

fn cors() -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{}", port));
            allowed_origins.push(format!("http://127.0.0.1:{}", port));
        }
        allowed_origins
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect::<Vec<_>>(),
        )
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root::redirect))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route("/activities/{name}/signup", post(handlers::activities::signup))
        .route(
            "/activities/{name}/unregister",
            delete(handlers::activities::unregister),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
