//! HTTP service for a single collection of todo items.
//!
//! # Overview
//! `routes` maps verbs and paths onto `handlers`, which validate ids and
//! bodies and call `TodoService`. The service is a thin layer over a
//! `TodoStore`, the persistence gateway: `MemoryStore` in-process, or
//! `MongoStore` with the `mongodb` feature. `CorsLayer` wraps everything.

pub mod color;
pub mod config;
pub mod error;
pub mod forecast;
pub mod handlers;
pub mod id;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

pub use color::ColorService;
pub use config::{DatabaseSettings, Settings};
pub use error::{ApiError, ErrorResponse};
pub use forecast::ForecastService;
pub use id::{IdError, TodoId};
pub use model::{ColorModel, TodoInput, TodoItem, WeatherForecast};
pub use service::TodoService;
pub use state::AppState;
pub use store::{MemoryStore, StoreError, TodoStore};
#[cfg(feature = "mongodb")]
pub use store::MongoStore;

pub fn app(state: AppState) -> Router {
    routes::create_router(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    serve(listener, state, std::future::pending()).await
}
