use wiremock::{MockServer, Request};

/// Running mock Discord API.
///
/// Keeps the server alive for the lifetime of the test; mocks are verified when it is
/// dropped.
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    pub fn new(server: MockServer) -> Self {
        Self { server }
    }

    /// Base URL to configure the client with, standing in for `https://discord.com/api/v10`.
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    /// All requests received so far, in arrival order.
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Received requests with the given HTTP method.
    pub async fn requests_with_method(&self, http_method: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|request| request.method.as_str() == http_method)
            .collect()
    }
}
