//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the mock-server crate; the integration tests catch schema drift between
//! the two. Ids are assigned by the server and never generated client-side.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    /// May be empty; servers that omit the field deserialize to "".
    #[serde(default)]
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// The full-item update payload for a completion toggle: every field
    /// unchanged except `completed`, which is inverted.
    pub fn toggled(&self) -> Todo {
        Todo {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
