//! Discord REST API clients.
//!
//! `SearchClient` fetches pages of candidate messages and `DeleteClient` deletes single
//! messages. Both absorb rate limiting internally. `DiscordClient` bundles the two behind
//! the `DiscordApi` trait, which is the only thing the removal engine depends on.

pub mod delete;
pub mod query;
pub mod retry;
pub mod search;

#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::{
    api::{delete::DeleteClient, search::SearchClient},
    config::RemovalConfig,
    error::api::ApiError,
    model::{
        message::{Message, Page},
        outcome::DeleteOutcome,
    },
};

/// The two capabilities the removal engine consumes.
#[async_trait]
pub trait DiscordApi: Sync {
    /// Fetches the page of candidates starting at `offset`.
    async fn search(&self, offset: u32) -> Result<Page, ApiError>;

    /// Deletes one message.
    async fn delete(&self, message: &Message) -> DeleteOutcome;
}

/// HTTP implementation of `DiscordApi`.
pub struct DiscordClient<'a> {
    search: SearchClient<'a>,
    delete: DeleteClient<'a>,
}

impl<'a> DiscordClient<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a RemovalConfig) -> Self {
        Self {
            search: SearchClient::new(http, config),
            delete: DeleteClient::new(http, config),
        }
    }
}

#[async_trait]
impl<'a> DiscordApi for DiscordClient<'a> {
    async fn search(&self, offset: u32) -> Result<Page, ApiError> {
        self.search.search(offset).await
    }

    async fn delete(&self, message: &Message) -> DeleteOutcome {
        self.delete.delete(message).await
    }
}
