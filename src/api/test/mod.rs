use crate::{
    api::{delete::DeleteClient, retry::RetryPolicy, search::SearchClient},
    config::{RemovalConfig, DM_GUILD_ID},
    error::api::ApiError,
    model::{
        message::Message,
        outcome::{DeleteOutcome, SkipReason},
    },
};
use std::time::{Duration, Instant};
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};
use wiremock::ResponseTemplate;


fn config_for(test: &TestContext) -> RemovalConfig {
    RemovalConfig::new(
        test.api_url(),
        fixture::TOKEN,
        fixture::SENDER_ID,
        fixture::GUILD_ID,
        fixture::CHANNEL_ID,
    )
}

fn message(id: &str, kind: i32) -> Message {
    Message::new(id, kind, fixture::CHANNEL_ID)
}
