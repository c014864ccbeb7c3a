//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; a
//! [`Transport`](crate::http::Transport) executes the round-trip in between.
//! Any 2xx status counts as success — the backend answers 200 where the mock
//! answers 201/204, and nothing downstream distinguishes the two.

use crate::error::RequestFailed;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo};

/// Where the client points when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
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

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, RequestFailed> {
        let body = serde_json::to_string(input).map_err(RequestFailed::encode)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The update is a full-item PUT addressed by `todo.id`; the server
    /// replaces title, description, and completed wholesale.
    pub fn build_update_todo(&self, todo: &Todo) -> Result<HttpRequest, RequestFailed> {
        let body = serde_json::to_string(todo).map_err(RequestFailed::encode)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(todo.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, RequestFailed> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(RequestFailed::decode)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, RequestFailed> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(RequestFailed::decode)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, RequestFailed> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(RequestFailed::decode)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), RequestFailed> {
        check_status(&response)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), RequestFailed> {
    if (200..300).contains(&response.status) {
        Ok(())
    } else {
        Err(RequestFailed::status(response.status, &response.body))
    }
}
