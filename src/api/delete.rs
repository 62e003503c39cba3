use reqwest::{header::AUTHORIZATION, StatusCode};
use url::Url;

use crate::{
    config::RemovalConfig,
    error::api::ApiError,
    model::{
        discord::{ErrorBodyDto, RateLimitDto},
        message::Message,
        outcome::{DeleteOutcome, SkipReason},
    },
    service::filter,
};

/// Discord error code for an operation on an archived thread.
pub const ARCHIVED_THREAD_CODE: i64 = 50083;

/// Classified delete response.
#[derive(Debug, PartialEq)]
enum DeleteResponse {
    Deleted,
    RateLimited { retry_after: f64 },
    ArchivedThread,
}

pub struct DeleteClient<'a> {
    http: &'a reqwest::Client,
    config: &'a RemovalConfig,
}

impl<'a> DeleteClient<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a RemovalConfig) -> Self {
        Self { http, config }
    }

    pub fn endpoint(&self, message: &Message) -> Result<Url, ApiError> {
        let url = format!(
            "{}/channels/{}/messages/{}",
            self.config.api_url, message.channel_id, message.id
        );

        Ok(Url::parse(&url)?)
    }

    /// Deletes one message.
    ///
    /// System messages are skipped without sending a request. Rate-limit responses are
    /// retried after twice the reported `retry_after`; archived-thread errors become a
    /// skip.
    ///
    /// # Arguments
    /// - `message` - Message to delete
    ///
    /// # Returns
    /// - `DeleteOutcome::Deleted` - Discord confirmed the deletion
    /// - `DeleteOutcome::Skipped(System)` - System message, no request sent
    /// - `DeleteOutcome::Skipped(ArchivedThread)` - Message is in an archived thread
    /// - `DeleteOutcome::Fatal(ApiError)` - Transport, parse or HTTP error
    pub async fn delete(&self, message: &Message) -> DeleteOutcome {
        if filter::is_system_message(message.kind) {
            tracing::info!("Skipping system message {}", message.id);
            return DeleteOutcome::Skipped(SkipReason::System);
        }

        match self.send(message).await {
            Ok(DeleteResponse::ArchivedThread) => {
                tracing::info!("Message {} is in an archived thread, skipping", message.id);
                DeleteOutcome::Skipped(SkipReason::ArchivedThread)
            }
            Ok(_) => {
                tracing::info!("Deleted message {}", message.id);
                DeleteOutcome::Deleted
            }
            Err(err) => DeleteOutcome::Fatal(err),
        }
    }

    /// Sends the delete request until it is no longer rate limited.
    async fn send(&self, message: &Message) -> Result<DeleteResponse, ApiError> {
        let url = self.endpoint(message)?;

        let mut attempts = 0;
        loop {
            attempts += 1;
            tracing::debug!("Deleting {} (attempt {})", url, attempts);

            let response = self
                .http
                .delete(url.clone())
                .header(AUTHORIZATION, &self.config.token)
                .send()
                .await?;
            let status = response.status();
            let body = response.bytes().await?;

            tracing::debug!("Delete responded with {}: {} bytes", status, body.len());

            match classify(status, &body)? {
                DeleteResponse::RateLimited { retry_after } => {
                    self.config.retry.wait(attempts, retry_after).await?;
                }
                response => return Ok(response),
            }
        }
    }
}

/// Classifies a delete response by status and body.
///
/// # Returns
/// - `Ok(DeleteResponse::RateLimited)` - 429 with a parsable `retry_after`
/// - `Ok(DeleteResponse::ArchivedThread)` - 400 with code 50083
/// - `Ok(DeleteResponse::Deleted)` - Any 2xx
/// - `Err(ApiError::Parse)` - 429 or 400 body that is not the expected JSON
/// - `Err(ApiError::Http)` - Any other non-success status
fn classify(status: StatusCode, body: &[u8]) -> Result<DeleteResponse, ApiError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let limit: RateLimitDto =
            serde_json::from_slice(body).map_err(ApiError::parse("rate limit"))?;
        return Ok(DeleteResponse::RateLimited {
            retry_after: limit.retry_after,
        });
    }

    if status == StatusCode::BAD_REQUEST {
        let error: ErrorBodyDto =
            serde_json::from_slice(body).map_err(ApiError::parse("error"))?;
        if error.code == Some(ARCHIVED_THREAD_CODE) {
            return Ok(DeleteResponse::ArchivedThread);
        }
    }

    if !status.is_success() {
        return Err(ApiError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    Ok(DeleteResponse::Deleted)
}
