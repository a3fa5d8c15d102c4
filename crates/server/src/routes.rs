use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Welcome};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod movies;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[utoipa::path(
    get, path = "/", tag = "root",
    responses((status = 200, description = "Welcome", body = crate::openapi::WelcomeResponse))
)]
pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: format!("Welcome to Movies CRUD API v{VERSION}"),
        docs: "/docs".into(),
        redoc: "/redoc".into(),
        version: VERSION.into(),
    })
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Healthy", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::healthy(VERSION))
}

/// Build the full application router: root, health, movie CRUD, and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let movie_routes = Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/search/year-range", get(movies::year_range))
        .route(
            "/movies/:id",
            get(movies::get).put(movies::update).delete(movies::delete),
        );

    public
        .merge(movie_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
