//! The removal engine.
//!
//! Drives the session loop: pace, search the page at the current offset, partition it
//! into deletable and skipped messages, then either stop, wait for the search index to
//! reconcile, or delete every deletable message and search again.
//!
//! # Termination
//!
//! Discord's `total_results` lags behind deletions, so it is never compared against
//! zero. A page without deletable messages ends the session when
//!
//! 1. everything the server still reports is in the skip set, or
//! 2. the page is short (the server has shown the end of its results) and the messages
//!    deleted since the last reconciliation already cover what the server reports
//!    beyond the skip set.
//!
//! The second check only applies to short pages: on a full page more messages may
//! follow the window, and the deleted count says nothing about them.
//!
//! Otherwise the engine waits for the index to catch up and advances the offset past the
//! skipped messages on that page. It never resets the offset to 0: the positions before
//! the offset only ever hold skipped messages, so re-scanning them cannot find anything
//! to delete.

#[cfg(test)]
mod test;

use crate::{
    api::DiscordApi,
    config::{RemovalConfig, DEFAULT_DELAY},
    model::{
        message::Message,
        outcome::{DeleteOutcome, RemovalReport, RemovalStatus},
    },
    service::{
        filter::{Classification, FilterPolicy},
        skip::SkipTracker,
    },
};

/// Reconciliation waits this many times the larger of the configured and default delay.
pub const RECONCILE_FACTOR: u32 = 10;

/// A page split into what can be deleted and how much was skipped.
struct Partition {
    deletable: Vec<Message>,
    skipped_this_page: u32,
    /// Number of candidates on the page, deletable or not.
    candidates: usize,
}

/// What to do with a partitioned page.
#[derive(Debug, PartialEq)]
enum PageDecision {
    Done,
    Reconcile,
    Delete,
}

pub struct RemovalEngine<'a, A> {
    api: &'a A,
    config: &'a RemovalConfig,
    filter: FilterPolicy,
    skipped: SkipTracker,
    offset: u32,
    /// Deletions since the last reconciliation wait.
    deleted_count: u64,
    deleted_total: u64,
}

impl<'a, A: DiscordApi> RemovalEngine<'a, A> {
    pub fn new(api: &'a A, config: &'a RemovalConfig) -> Self {
        Self {
            api,
            config,
            filter: FilterPolicy::from_config(config),
            skipped: SkipTracker::new(),
            offset: 0,
            deleted_count: 0,
            deleted_total: 0,
        }
    }

    /// Runs the session to completion.
    ///
    /// Search failures and delete failures end the session with `SearchFailed` or
    /// `DeleteFailed`, unless skip-on-failure is configured, in which case a failed
    /// search is retried and a failed message is skipped.
    ///
    /// # Returns
    /// - `RemovalReport` - Terminal status with deleted and skipped counts
    pub async fn run(mut self) -> RemovalReport {
        tracing::info!("Searching for messages to delete");
        if !self.config.excluded.is_empty() {
            tracing::info!("Keeping messages with content: {:?}", self.config.excluded);
        }

        let status = loop {
            tokio::time::sleep(self.config.delay).await;

            let page = match self.api.search(self.offset).await {
                Ok(page) => page,
                Err(err) if self.config.skip_if_fail => {
                    tracing::warn!("Search failed, trying again: {}", err);
                    continue;
                }
                Err(err) => {
                    tracing::error!("Search failed: {}", err);
                    break RemovalStatus::SearchFailed;
                }
            };

            let total_results = page.total_results;
            let partition = self.partition(page.candidates);

            match self.decide(total_results, &partition) {
                PageDecision::Done => break RemovalStatus::Ok,
                PageDecision::Reconcile => self.reconcile(partition.skipped_this_page).await,
                PageDecision::Delete => {
                    if let Err(status) = self.delete_all(partition.deletable).await {
                        break status;
                    }
                }
            }
        };

        tracing::info!(
            "Removal finished with {:?}: {} deleted, {} skipped",
            status,
            self.deleted_total,
            self.skipped.len()
        );

        RemovalReport {
            status,
            deleted: self.deleted_total,
            skipped: self.skipped.len(),
        }
    }

    /// Splits candidates into deletable messages and skips, recording new skips.
    fn partition(&mut self, candidates: Vec<Message>) -> Partition {
        let count = candidates.len();
        let mut deletable = Vec::with_capacity(candidates.len());
        let mut skipped_this_page = 0;

        for message in candidates {
            if self.skipped.contains(&message) {
                skipped_this_page += 1;
                continue;
            }

            match self.filter.classify(&message) {
                Classification::Deletable => deletable.push(message),
                Classification::Skip(reason) => {
                    tracing::debug!("Skipping message {} ({})", message.id, reason);
                    self.skipped.record(message);
                    skipped_this_page += 1;
                }
            }
        }

        Partition {
            deletable,
            skipped_this_page,
            candidates: count,
        }
    }

    fn decide(&self, total_results: u64, partition: &Partition) -> PageDecision {
        if !partition.deletable.is_empty() {
            return PageDecision::Delete;
        }

        let skipped = self.skipped.len() as u64;
        if total_results <= skipped {
            tracing::debug!(
                "Only skipped messages remain ({} total, {} skipped)",
                total_results,
                skipped
            );
            return PageDecision::Done;
        }

        let page_is_full = partition.candidates >= usize::from(self.config.limit);
        if !page_is_full && self.deleted_count >= total_results - skipped {
            tracing::debug!(
                "Deleted {} messages, covering the {} the server still reports",
                self.deleted_count,
                total_results - skipped
            );
            return PageDecision::Done;
        }

        PageDecision::Reconcile
    }

    /// Waits for the search index to reflect deletions and moves past skipped messages.
    async fn reconcile(&mut self, skipped_this_page: u32) {
        self.deleted_count = 0;

        let wait = self.config.delay.max(DEFAULT_DELAY) * RECONCILE_FACTOR;
        tracing::info!(
            "No deletable messages at offset {}, waiting {:.1}s for the search index",
            self.offset,
            wait.as_secs_f64()
        );
        tokio::time::sleep(wait).await;

        self.offset += skipped_this_page;
    }

    /// Deletes the messages of one page in order.
    ///
    /// # Returns
    /// - `Ok(())` - Every message was deleted or skipped
    /// - `Err(RemovalStatus::DeleteFailed)` - A delete failed without skip-on-failure
    async fn delete_all(&mut self, deletable: Vec<Message>) -> Result<(), RemovalStatus> {
        for message in deletable {
            tokio::time::sleep(DEFAULT_DELAY).await;

            match self.api.delete(&message).await {
                DeleteOutcome::Deleted => {
                    self.deleted_count += 1;
                    self.deleted_total += 1;
                }
                DeleteOutcome::Skipped(reason) => {
                    tracing::debug!("Skipped message {} ({})", message.id, reason);
                    self.skipped.record(message);
                }
                DeleteOutcome::Fatal(err) if self.config.skip_if_fail => {
                    tracing::warn!("Failed to delete message {}, skipping: {}", message.id, err);
                    self.skipped.record(message);
                }
                DeleteOutcome::Fatal(err) => {
                    tracing::error!("Failed to delete message {}: {}", message.id, err);
                    return Err(RemovalStatus::DeleteFailed);
                }
            }
        }

        Ok(())
    }
}
