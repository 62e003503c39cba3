use crate::{
    api::DiscordApi,
    config::{RemovalConfig, DEFAULT_DELAY, DM_GUILD_ID},
    error::api::ApiError,
    model::{
        message::{ContentKinds, Message, Page},
        outcome::{DeleteOutcome, RemovalStatus, SkipReason},
    },
    service::remover::{RemovalEngine, RECONCILE_FACTOR},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::{
    collections::{HashSet, VecDeque},
    sync::Mutex,
    time::Duration,
};

mod failure;

const CHANNEL: &str = "channel";

#[derive(Default)]
struct FakeState {
    /// Messages the server currently holds, in search order.
    corpus: Vec<Message>,
    /// Scripted search results, served before falling back to `corpus`.
    pages: VecDeque<Result<Page, ApiError>>,
    archived: HashSet<String>,
    failing: HashSet<String>,
    searches: Vec<u32>,
    deletes: Vec<String>,
}

/// In-memory Discord that serves pages from a corpus and records every call.
#[derive(Default)]
struct FakeDiscord {
    state: Mutex<FakeState>,
}

impl FakeDiscord {
    fn with_corpus(corpus: Vec<Message>) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().corpus = corpus;
        fake
    }

    fn with_pages(pages: Vec<Result<Page, ApiError>>) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().pages = pages.into();
        fake
    }

    /// Deletes of `id` answer with an archived-thread skip.
    fn archived(self, id: &str) -> Self {
        self.state.lock().unwrap().archived.insert(id.to_string());
        self
    }

    /// Deletes of `id` fail with a 500.
    fn failing(self, id: &str) -> Self {
        self.state.lock().unwrap().failing.insert(id.to_string());
        self
    }

    fn deletes(&self) -> Vec<String> {
        self.state.lock().unwrap().deletes.clone()
    }

    fn searches(&self) -> Vec<u32> {
        self.state.lock().unwrap().searches.clone()
    }
}

#[async_trait]
impl DiscordApi for FakeDiscord {
    async fn search(&self, offset: u32) -> Result<Page, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.searches.push(offset);

        if let Some(page) = state.pages.pop_front() {
            return page;
        }

        Ok(Page {
            total_results: state.corpus.len() as u64,
            candidates: state
                .corpus
                .iter()
                .skip(offset as usize)
                .take(25)
                .cloned()
                .collect(),
        })
    }

    async fn delete(&self, message: &Message) -> DeleteOutcome {
        let mut state = self.state.lock().unwrap();
        state.deletes.push(message.id.clone());

        if state.archived.contains(&message.id) {
            return DeleteOutcome::Skipped(SkipReason::ArchivedThread);
        }

        if state.failing.contains(&message.id) {
            return DeleteOutcome::Fatal(ApiError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            });
        }

        state.corpus.retain(|m| m != message);
        DeleteOutcome::Deleted
    }
}

fn config() -> RemovalConfig {
    RemovalConfig::new("http://discord.test", "token", "sender", DM_GUILD_ID, CHANNEL)
}

fn message(id: &str, kind: i32) -> Message {
    Message::new(id, kind, CHANNEL)
}

fn page(total_results: u64, candidates: Vec<Message>) -> Result<Page, ApiError> {
    Ok(Page {
        total_results,
        candidates,
    })
}

fn search_error() -> Result<Page, ApiError> {
    Err(ApiError::Http {
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: String::new(),
    })
}
