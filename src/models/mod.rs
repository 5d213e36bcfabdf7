//! Data models for todofile entities.
//!
//! This module defines the single persisted entity (`Todo`) and the request
//! body shapes used by the HTTP layer (`NewTodo` for creation, `TodoPatch`
//! for partial updates).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A todo record, the sole persisted entity.
///
/// Serialized with camelCase field names; `created_at` appears on the wire
/// and on disk as `createdAt`, an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned by the server on creation and immutable
    /// thereafter.
    pub id: u64,

    /// Todo title
    pub title: String,

    /// Detailed description, defaults to empty
    #[serde(default)]
    pub description: String,

    /// Completion flag, defaults to false
    #[serde(default)]
    pub completed: bool,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new todo with the given id and title, timestamped now.
    pub fn new(id: u64, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    /// Title, required at the JSON boundary
    pub title: String,

    /// Description, defaults to empty when omitted
    #[serde(default)]
    pub description: String,
}

/// Request body for partially updating a todo.
///
/// Every field is optional; absent fields leave the stored value untouched.
/// Unknown keys (including `id`) are ignored by deserialization, so the
/// stored id can never be overwritten through this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Apply this patch to a record, overwriting only the provided fields.
    /// The record's id and creation timestamp are never touched.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Next id for a collection: max existing id + 1, or 1 when empty.
///
/// Deleting the record with the highest id makes that id eligible for reuse
/// on a later create; this matches the stored-collection contract.
pub fn next_id(todos: &[Todo]) -> u64 {
    todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}
