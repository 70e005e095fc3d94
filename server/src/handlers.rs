//! Request handlers.
//!
//! Ids are validated before any store call. Update and delete look the item
//! up first so a missing id answers 404; the lookup and the write are two
//! separate store calls, made in that order. All store calls in one request
//! share a single deadline.

use std::{future::Future, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tokio::time::Instant;
use tracing::error;

use crate::{
    error::ApiError,
    id::TodoId,
    model::{ColorModel, TodoInput, TodoItem, WeatherForecast},
    routes::TODO_ROOT,
    state::AppState,
    store::StoreError,
};

struct Deadline(Instant);

impl Deadline {
    fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    async fn run<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout_at(self.0, call)
            .await
            .unwrap_or_else(|_| Err(StoreError::Timeout))
    }
}

/// Log anything but a miss, then map to an HTTP error.
fn failed(operation: &'static str) -> impl Fn(StoreError) -> ApiError {
    move |err| {
        if !matches!(err, StoreError::NotFound) {
            error!(operation, error = %err, "store call failed");
        }
        err.into()
    }
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::NotFound);
    }
    if raw.contains('/') {
        return Err(ApiError::BadRequest("invalid id format".to_string()));
    }
    TodoId::parse_hex(raw).map_err(|_| ApiError::BadRequest("invalid id format".to_string()))
}

fn decode_input(body: &[u8]) -> Result<TodoInput, ApiError> {
    TodoInput::from_json(body).map_err(|_| ApiError::BadRequest("invalid request body".to_string()))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let deadline = Deadline::after(state.request_timeout);
    let items = deadline
        .run(state.todos.get_all())
        .await
        .map_err(failed("list todos"))?;
    Ok(Json(items))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let deadline = Deadline::after(state.request_timeout);
    let input = decode_input(&body)?;

    let created = deadline
        .run(state.todos.create(input))
        .await
        .map_err(failed("create todo"))?;

    let location = format!("{TODO_ROOT}/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&raw_id)?;
    let deadline = Deadline::after(state.request_timeout);
    let item = deadline
        .run(state.todos.get_by_id(id))
        .await
        .map_err(failed("get todo"))?;
    Ok(Json(item))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let deadline = Deadline::after(state.request_timeout);
    let input = decode_input(&body)?;

    deadline
        .run(state.todos.get_by_id(id))
        .await
        .map_err(failed("get todo before update"))?;
    deadline
        .run(state.todos.update(id, input))
        .await
        .map_err(failed("update todo"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let deadline = Deadline::after(state.request_timeout);

    deadline
        .run(state.todos.get_by_id(id))
        .await
        .map_err(failed("get todo before delete"))?;
    deadline
        .run(state.todos.delete(id))
        .await
        .map_err(failed("delete todo"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_color(State(state): State<AppState>) -> Json<ColorModel> {
    Json(state.color.get())
}

pub async fn weather_forecast(State(state): State<AppState>) -> Json<Vec<WeatherForecast>> {
    Json(state.forecast.forecast(Utc::now()))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_object_id() {
        let id = parse_id("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn parse_id_rejects_malformed_ids() {
        for raw in [
            "abc",
            "507f1f77bcf86cd79943901",
            "507f1f77bcf86cd7994390111",
            "507f1f77bcf86cd79943901g",
            "507f1f77bcf8/cd799439011",
            "507f1f77bcf86cd799439011/extra",
        ] {
            assert!(
                matches!(parse_id(raw), Err(ApiError::BadRequest(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn parse_id_treats_empty_as_missing_route() {
        assert!(matches!(parse_id(""), Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn deadline_turns_stall_into_timeout() {
        let deadline = Deadline::after(Duration::from_millis(10));
        let result: Result<(), StoreError> = deadline.run(std::future::pending()).await;
        assert!(matches!(result, Err(StoreError::Timeout)));
    }

    #[tokio::test]
    async fn deadline_passes_through_prompt_results() {
        let deadline = Deadline::after(Duration::from_secs(5));
        let result = deadline.run(async { Ok::<_, StoreError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
