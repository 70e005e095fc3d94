//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Color, NewTodo, Todo};

const TODO_PATH: &str = "/api/todo";
const COLOR_PATH: &str = "/api/color";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todo_url(&self, id: &str) -> String {
        format!("{}{TODO_PATH}/{id}", self.base_url)
    }

    fn bodiless(method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(method: HttpMethod, path: String, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_get_color(&self) -> HttpRequest {
        Self::bodiless(HttpMethod::Get, format!("{}{COLOR_PATH}", self.base_url))
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        Self::bodiless(HttpMethod::Get, format!("{}{TODO_PATH}", self.base_url))
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        Self::bodiless(HttpMethod::Get, self.todo_url(id))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        Self::with_json(HttpMethod::Post, format!("{}{TODO_PATH}", self.base_url), input)
    }

    pub fn build_update_todo(&self, id: &str, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        Self::with_json(HttpMethod::Put, self.todo_url(id), input)
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        Self::bodiless(HttpMethod::Delete, self.todo_url(id))
    }

    pub fn parse_get_color(&self, response: HttpResponse) -> Result<Color, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
