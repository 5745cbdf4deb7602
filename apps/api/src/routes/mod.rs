pub mod health;

use axum::{
    extract::Request,
    http::{header, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::review::handlers;
use crate::state::AppState;

/// Full application: routes plus the tracing and CORS stack served by `main`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/review",
            post(handlers::handle_review).fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(reject_bare_options))
                .layer(CorsLayer::permissive()),
        )
}

/// The CORS layer answers every OPTIONS request itself. Only real preflights
/// (carrying `Access-Control-Request-Method`) may reach it; a bare OPTIONS is
/// just another non-POST method.
async fn reject_bare_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS
        && !request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
    {
        return AppError::MethodNotAllowed.into_response();
    }
    next.run(request).await
}
