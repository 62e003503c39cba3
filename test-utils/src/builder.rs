use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{context::TestContext, fixture};

/// Priority of one-shot mocks, so they answer before persistent ones on the same route.
const ONCE_PRIORITY: u8 = 1;

/// Builder for a mock Discord API.
///
/// Every mounted route requires the fixture token in the `Authorization` header, so a
/// request without it gets wiremock's default 404.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_delete_once("1", ResponseTemplate::new(429).set_body_json(factory::rate_limit(0.05)))
///     .with_delete("1", ResponseTemplate::new(204))
///     .build()
///     .await;
/// ```
pub struct TestBuilder {
    /// Mocks to mount, in the order they were added.
    mocks: Vec<Mock>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { mocks: Vec::new() }
    }

    /// Adds an arbitrary mock.
    pub fn with_mock(mut self, mock: Mock) -> Self {
        self.mocks.push(mock);
        self
    }

    /// Answers every guild search with a 200 and `body`.
    pub fn with_guild_search(self, body: Value) -> Self {
        self.with_guild_search_response(ResponseTemplate::new(200).set_body_json(body))
    }

    /// Answers every guild search with `response`.
    pub fn with_guild_search_response(self, response: ResponseTemplate) -> Self {
        let route = format!("/guilds/{}/messages/search", fixture::GUILD_ID);
        self.with_mock(authorized("GET", &route).respond_with(response))
    }

    /// Answers the next guild search only with `response`.
    pub fn with_guild_search_once(self, response: ResponseTemplate) -> Self {
        let route = format!("/guilds/{}/messages/search", fixture::GUILD_ID);
        self.with_mock(once(authorized("GET", &route).respond_with(response)))
    }

    /// Answers every direct-message channel search with a 200 and `body`.
    pub fn with_channel_search(self, body: Value) -> Self {
        let route = format!("/channels/{}/messages/search", fixture::CHANNEL_ID);
        self.with_mock(
            authorized("GET", &route).respond_with(ResponseTemplate::new(200).set_body_json(body)),
        )
    }

    /// Answers every delete of `message_id` in the fixture channel with `response`.
    pub fn with_delete(self, message_id: &str, response: ResponseTemplate) -> Self {
        let route = delete_route(message_id);
        self.with_mock(authorized("DELETE", &route).respond_with(response))
    }

    /// Answers the next delete of `message_id` only with `response`.
    pub fn with_delete_once(self, message_id: &str, response: ResponseTemplate) -> Self {
        let route = delete_route(message_id);
        self.with_mock(once(authorized("DELETE", &route).respond_with(response)))
    }

    /// Starts the mock server and mounts all configured mocks.
    pub async fn build(self) -> TestContext {
        let server = MockServer::start().await;

        for mock in self.mocks {
            server.register(mock).await;
        }

        TestContext::new(server)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn authorized(http_method: &str, route: &str) -> wiremock::MockBuilder {
    Mock::given(method(http_method))
        .and(path(route.to_string()))
        .and(header("authorization", fixture::TOKEN))
}

fn once(mock: Mock) -> Mock {
    mock.up_to_n_times(1).with_priority(ONCE_PRIORITY)
}

fn delete_route(message_id: &str) -> String {
    format!("/channels/{}/messages/{}", fixture::CHANNEL_ID, message_id)
}
