use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::TodoId;

/// A stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub name: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, input: TodoInput) -> Self {
        Self {
            id,
            name: input.name,
            done: input.done,
        }
    }
}

/// The writable fields of a todo item, as accepted on create and update.
///
/// There is no `id` here: an id in a request body is ignored and the
/// store (create) or the path (update) decides it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoInput {
    /// Decode a request body. Only a JSON object is accepted.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorModel {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: DateTime<Utc>,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}
