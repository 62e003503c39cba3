//! JSON bodies as returned by the Discord API.

use serde_json::{json, Value};

use crate::fixture;

/// A search hit in the fixture channel.
///
/// # Arguments
/// - `id` - Message ID
/// - `kind` - Discord message type
pub fn message(id: &str, kind: i32) -> Value {
    message_in(id, kind, fixture::CHANNEL_ID)
}

/// A search hit in the given channel or thread.
pub fn message_in(id: &str, kind: i32, channel_id: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "channel_id": channel_id,
        "content": "",
        "author": { "id": fixture::SENDER_ID },
        "attachments": [],
        "embeds": [],
        "pinned": false
    })
}

/// A search response with one group per message.
///
/// # Arguments
/// - `total_results` - Server-side total to report
/// - `messages` - Hits, each wrapped into its own result group
pub fn search_page(total_results: u64, messages: Vec<Value>) -> Value {
    let groups: Vec<Value> = messages.into_iter().map(|m| json!([m])).collect();

    json!({
        "total_results": total_results,
        "messages": groups
    })
}

/// A rate-limit body.
pub fn rate_limit(retry_after: f64) -> Value {
    json!({
        "message": "You are being rate limited.",
        "retry_after": retry_after,
        "global": false
    })
}

/// A Discord error body with the given JSON error code.
pub fn error_code(code: i64, message: &str) -> Value {
    json!({
        "code": code,
        "message": message
    })
}

/// Error body for a delete inside an archived thread.
pub fn archived_thread() -> Value {
    error_code(50083, "Thread is archived")
}
