//! The stateful synchronization session.
//!
//! # Design
//! `TodoSession` keeps an in-memory mirror of the server's todo collection
//! plus the two draft fields staged for the next create. Every mutation is
//! one REST call followed by a full list refetch — the list is replaced
//! wholesale, never patched. Failures of any kind are logged at warn level
//! and swallowed; the session keeps whatever state it had, which for a
//! failed create means the drafts stay filled for retry.

use tracing::warn;

use crate::client::TodoClient;
use crate::http::Transport;
use crate::types::{NewTodo, Todo};

/// Mirrored server state and pending input for one todo list.
pub struct TodoSession {
    client: TodoClient,
    todos: Vec<Todo>,
    /// Title staged for the next create; required to be non-empty by the
    /// input surface, not re-checked here.
    pub draft_title: String,
    /// Description staged for the next create; may stay empty.
    pub draft_description: String,
}

impl TodoSession {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            todos: Vec::new(),
            draft_title: String::new(),
            draft_description: String::new(),
        }
    }

    /// The last collection the server returned, in server order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Fetch the full collection and replace the local list.
    ///
    /// On failure the stale list stays visible; the error only reaches the
    /// log.
    pub fn refresh(&mut self, transport: &impl Transport) {
        let result = transport
            .execute(self.client.build_list_todos())
            .and_then(|resp| self.client.parse_list_todos(resp));
        match result {
            Ok(todos) => self.todos = todos,
            Err(err) => warn!("failed to fetch todos: {err}"),
        }
    }

    /// Create a todo from the draft fields, always with `completed` false.
    ///
    /// On success the drafts are cleared and the list refetched; the
    /// server-assigned id is not read from the create response — it arrives
    /// with the refetch. On failure the drafts are left filled.
    pub fn submit_draft(&mut self, transport: &impl Transport) {
        let input = NewTodo {
            title: self.draft_title.clone(),
            description: self.draft_description.clone(),
            completed: false,
        };
        let result = self
            .client
            .build_create_todo(&input)
            .and_then(|req| transport.execute(req))
            .and_then(|resp| self.client.parse_create_todo(resp));
        match result {
            Ok(_) => {
                self.draft_title.clear();
                self.draft_description.clear();
                self.refresh(transport);
            }
            Err(err) => warn!("failed to add todo: {err}"),
        }
    }

    /// Invert `completed` on the item with this id by resending the full
    /// item. Unknown ids are ignored.
    pub fn toggle(&mut self, transport: &impl Transport, id: i64) {
        let Some(payload) = self.todos.iter().find(|t| t.id == id).map(Todo::toggled) else {
            return;
        };
        let result = self
            .client
            .build_update_todo(&payload)
            .and_then(|req| transport.execute(req))
            .and_then(|resp| self.client.parse_update_todo(resp));
        match result {
            Ok(_) => self.refresh(transport),
            Err(err) => warn!("failed to update todo {id}: {err}"),
        }
    }

    /// Delete the item with this id.
    pub fn remove(&mut self, transport: &impl Transport, id: i64) {
        let result = transport
            .execute(self.client.build_delete_todo(id))
            .and_then(|resp| self.client.parse_delete_todo(resp));
        match result {
            Ok(()) => self.refresh(transport),
            Err(err) => warn!("failed to delete todo {id}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::error::RequestFailed;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replays a queue of canned outcomes and records every request sent.
    struct Scripted {
        requests: RefCell<Vec<HttpRequest>>,
        outcomes: RefCell<VecDeque<Result<HttpResponse, RequestFailed>>>,
    }

    impl Scripted {
        fn new(outcomes: Vec<Result<HttpResponse, RequestFailed>>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                outcomes: RefCell::new(outcomes.into()),
            }
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestFailed> {
            self.requests.borrow_mut().push(request);
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("more requests issued than scripted")
        }
    }

    fn ok(status: u16, body: &str) -> Result<HttpResponse, RequestFailed> {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    fn unreachable_server() -> Result<HttpResponse, RequestFailed> {
        Err(RequestFailed::new("connection refused"))
    }

    const ONE_TODO: &str =
        r#"[{"id":1,"title":"Test Todo","description":"Test Description","completed":false}]"#;

    fn session_with_one_todo() -> TodoSession {
        let mut session = TodoSession::new("http://localhost:8081");
        session.refresh(&Scripted::new(vec![ok(200, ONE_TODO)]));
        assert_eq!(session.todos().len(), 1);
        session
    }

    #[test]
    fn refresh_replaces_list_wholesale() {
        let mut session = session_with_one_todo();
        let transport = Scripted::new(vec![ok(200, "[]")]);
        session.refresh(&transport);
        assert!(session.todos().is_empty());
    }

    #[test]
    fn refresh_failure_keeps_stale_list() {
        let mut session = session_with_one_todo();
        let transport = Scripted::new(vec![unreachable_server()]);
        session.refresh(&transport);
        assert_eq!(session.todos().len(), 1);
    }

    #[test]
    fn submit_sends_one_create_then_one_refetch() {
        let mut session = TodoSession::new("http://localhost:8081");
        session.draft_title = "New Todo".to_string();
        session.draft_description = "New Description".to_string();

        let created = r#"{"id":1,"title":"New Todo","description":"New Description","completed":false}"#;
        let transport = Scripted::new(vec![ok(201, created), ok(200, ONE_TODO)]);
        session.submit_draft(&transport);

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://localhost:8081/api/todos");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "New Todo");
        assert_eq!(body["description"], "New Description");
        assert_eq!(body["completed"], false);
        assert_eq!(sent[1].method, HttpMethod::Get);

        assert!(session.draft_title.is_empty());
        assert!(session.draft_description.is_empty());
        assert_eq!(session.todos().len(), 1);
    }

    #[test]
    fn submit_failure_preserves_drafts() {
        let mut session = TodoSession::new("http://localhost:8081");
        session.draft_title = "New Todo".to_string();
        session.draft_description = "New Description".to_string();

        let transport = Scripted::new(vec![ok(500, "internal error")]);
        session.submit_draft(&transport);

        // No refetch after a failed create, and the input survives for retry.
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(session.draft_title, "New Todo");
        assert_eq!(session.draft_description, "New Description");
        assert!(session.todos().is_empty());
    }

    #[test]
    fn toggle_resends_full_item_with_completed_flipped() {
        let mut session = session_with_one_todo();

        let updated =
            r#"{"id":1,"title":"Test Todo","description":"Test Description","completed":true}"#;
        let refreshed =
            r#"[{"id":1,"title":"Test Todo","description":"Test Description","completed":true}]"#;
        let transport = Scripted::new(vec![ok(200, updated), ok(200, refreshed)]);
        session.toggle(&transport, 1);

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].url, "http://localhost:8081/api/todos/1");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "Test Todo");
        assert_eq!(body["description"], "Test Description");
        assert_eq!(body["completed"], true);

        assert!(session.todos()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_issues_no_request() {
        let mut session = session_with_one_todo();
        let transport = Scripted::new(vec![]);
        session.toggle(&transport, 99);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn toggle_failure_leaves_item_unchanged() {
        let mut session = session_with_one_todo();
        let transport = Scripted::new(vec![unreachable_server()]);
        session.toggle(&transport, 1);
        assert_eq!(transport.sent().len(), 1);
        assert!(!session.todos()[0].completed);
    }

    #[test]
    fn remove_sends_delete_then_refetch() {
        let mut session = session_with_one_todo();

        let transport = Scripted::new(vec![ok(204, ""), ok(200, "[]")]);
        session.remove(&transport, 1);

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].url, "http://localhost:8081/api/todos/1");
        assert_eq!(sent[1].method, HttpMethod::Get);
        assert!(session.todos().is_empty());
    }

    #[test]
    fn remove_failure_leaves_list_unchanged() {
        let mut session = session_with_one_todo();
        let transport = Scripted::new(vec![ok(404, "")]);
        session.remove(&transport, 1);
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(session.todos().len(), 1);
    }

    #[test]
    fn refetch_failure_after_successful_delete_keeps_stale_list() {
        // The delete succeeded server-side but the refetch died; the session
        // silently shows the stale list until the next successful fetch.
        let mut session = session_with_one_todo();
        let transport = Scripted::new(vec![ok(204, ""), unreachable_server()]);
        session.remove(&transport, 1);
        assert_eq!(session.todos().len(), 1);
    }
}
