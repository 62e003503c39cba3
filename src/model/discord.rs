//! Wire types for the Discord message search and delete endpoints.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::api::ApiError;

/// Successful response of `GET .../messages/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponseDto {
    pub total_results: u64,
    /// Result groups; the first message of each group is the hit, the rest is context.
    #[serde(default)]
    pub messages: Vec<Vec<SearchMessageDto>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchMessageDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub embeds: Vec<serde_json::Value>,
    #[serde(default)]
    pub attachments: Vec<AttachmentDto>,
    #[serde(default)]
    pub sticker_items: Vec<serde_json::Value>,
    #[serde(default)]
    pub poll: Option<serde_json::Value>,
    #[serde(default)]
    pub message_snapshots: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct AttachmentDto {
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Body of a rate-limited response.
#[derive(Debug, Deserialize)]
pub struct RateLimitDto {
    /// Seconds to wait before retrying, possibly fractional.
    pub retry_after: f64,
}

/// Body of a Discord error response.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyDto {
    #[serde(default)]
    pub code: Option<i64>,
}

/// Classified search response.
///
/// Discord signals rate limits (and a not-yet-built search index) with a `retry_after`
/// field in the body, regardless of the status code, so the body is inspected first.
#[derive(Debug)]
pub enum SearchBody {
    RateLimited(RateLimitDto),
    Page(SearchResponseDto),
}

impl SearchBody {
    /// Classifies a search response body.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the response
    /// - `body` - Raw response body
    ///
    /// # Returns
    /// - `Ok(SearchBody::RateLimited)` - Body carries `retry_after`
    /// - `Ok(SearchBody::Page)` - Successful search page
    /// - `Err(ApiError::Parse)` - Successful status but not a search page
    /// - `Err(ApiError::Http)` - Non-success status without `retry_after`
    pub fn parse(status: StatusCode, body: &[u8]) -> Result<Self, ApiError> {
        let http_error = || ApiError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        };

        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) if !status.is_success() => return Err(http_error()),
            Err(err) => return Err(ApiError::parse("search")(err)),
        };

        if value.get("retry_after").is_some() {
            let limit = serde_json::from_value(value).map_err(ApiError::parse("rate limit"))?;
            return Ok(Self::RateLimited(limit));
        }

        if !status.is_success() {
            return Err(http_error());
        }

        let page = serde_json::from_value(value).map_err(ApiError::parse("search"))?;
        Ok(Self::Page(page))
    }
}
