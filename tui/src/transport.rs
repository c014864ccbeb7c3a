//! Blocking HTTP executor for the core's transport seam.

use todo_core::{HttpMethod, HttpRequest, HttpResponse, RequestFailed, Transport};

/// Executes requests with ureq.
///
/// Automatic status-code-as-error is disabled so 4xx/5xx responses come
/// back as data for the core to interpret; only failures with no response
/// at all (connection refused, broken transfer) become `Err`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent(),
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, RequestFailed> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.url).send_empty(),
        };
        let mut response = result.map_err(|e| RequestFailed::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
