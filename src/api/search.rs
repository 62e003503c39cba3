use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::{
    api::query::QueryBuilder,
    config::RemovalConfig,
    error::api::ApiError,
    model::{discord::SearchBody, message::Page},
};

pub struct SearchClient<'a> {
    http: &'a reqwest::Client,
    config: &'a RemovalConfig,
}

impl<'a> SearchClient<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a RemovalConfig) -> Self {
        Self { http, config }
    }

    /// Search endpoint for the configured target.
    ///
    /// Direct-message channels are searched per channel, guild channels through the
    /// guild.
    pub fn endpoint(&self) -> Result<Url, ApiError> {
        let config = self.config;
        let url = if config.is_dm() {
            format!(
                "{}/channels/{}/messages/search",
                config.api_url, config.channel_id
            )
        } else {
            format!(
                "{}/guilds/{}/messages/search",
                config.api_url, config.guild_id
            )
        };

        Ok(Url::parse(&url)?)
    }

    /// Fetches one page of the sender's messages.
    ///
    /// Rate-limit responses are absorbed: the client waits twice the reported
    /// `retry_after` and re-sends the identical request until a page arrives or the
    /// retry policy gives up.
    ///
    /// # Arguments
    /// - `offset` - Page cursor
    ///
    /// # Returns
    /// - `Ok(Page)` - Server total and the primary message of each result group
    /// - `Err(ApiError::Transport)` - Request could not be sent
    /// - `Err(ApiError::Parse)` - Body is not a valid search page
    /// - `Err(ApiError::Http)` - Non-success status without `retry_after`
    /// - `Err(ApiError::RateLimitExhausted)` - Retry ceiling reached
    pub async fn search(&self, offset: u32) -> Result<Page, ApiError> {
        let mut url = self.endpoint()?;
        url.query_pairs_mut()
            .extend_pairs(QueryBuilder::new(self.config).build(offset));

        let mut attempts = 0;
        loop {
            attempts += 1;
            tracing::debug!("Searching {} (attempt {})", url, attempts);

            let response = self
                .http
                .get(url.clone())
                .header(AUTHORIZATION, &self.config.token)
                .send()
                .await?;
            let status = response.status();
            let body = response.bytes().await?;

            tracing::debug!("Search responded with {}: {} bytes", status, body.len());

            match SearchBody::parse(status, &body)? {
                SearchBody::RateLimited(limit) => {
                    self.config.retry.wait(attempts, limit.retry_after).await?;
                }
                SearchBody::Page(dto) => {
                    let page = Page::from_dto(dto, &self.config.channel_id);
                    tracing::debug!(
                        "Found {} candidates at offset {} ({} total results)",
                        page.candidates.len(),
                        offset,
                        page.total_results
                    );
                    return Ok(page);
                }
            }
        }
    }
}
