//! Route definitions

use axum::{
    routing::{get, MethodFilter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware::CorsLayer, state::AppState};

pub const TODO_ROOT: &str = "/api/todo";

/// Build the router with all routes and middleware.
///
/// The id route is a catch-all so that an id containing `/` still reaches
/// the handler and is rejected as malformed rather than unrouted. The todo
/// routes register HEAD explicitly, otherwise axum answers it with the GET
/// handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            TODO_ROOT,
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .on(MethodFilter::HEAD, handlers::method_not_allowed),
        )
        .route(
            "/api/todo/{*id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .on(MethodFilter::HEAD, handlers::method_not_allowed),
        )
        .route("/api/color", get(handlers::get_color))
        .route("/weatherforecast", get(handlers::weather_forecast))
        .route("/WeatherForecast", get(handlers::weather_forecast))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CorsLayer::new())
        .layer(TraceLayer::new_for_http())
}
