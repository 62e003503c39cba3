//! Domain models for messages returned by the search endpoint.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::model::discord::{SearchMessageDto, SearchResponseDto};

/// Kind of content a message can carry and the user can ask to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Link,
    Embed,
    Poll,
    File,
    Image,
    Video,
    Audio,
    Sticker,
    Forward,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Link => "link",
            Self::Embed => "embed",
            Self::Poll => "poll",
            Self::File => "file",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Sticker => "sticker",
            Self::Forward => "forward",
        };
        f.write_str(name)
    }
}

/// Set of content kinds.
///
/// Used both for what a message contains and for what the user wants to keep, so the
/// filter only has to intersect the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentKinds {
    pub link: bool,
    pub embed: bool,
    pub poll: bool,
    pub file: bool,
    pub image: bool,
    pub video: bool,
    pub audio: bool,
    pub sticker: bool,
    pub forward: bool,
}

impl ContentKinds {
    fn entries(&self) -> [(ContentKind, bool); 9] {
        [
            (ContentKind::Link, self.link),
            (ContentKind::Embed, self.embed),
            (ContentKind::Poll, self.poll),
            (ContentKind::File, self.file),
            (ContentKind::Image, self.image),
            (ContentKind::Video, self.video),
            (ContentKind::Audio, self.audio),
            (ContentKind::Sticker, self.sticker),
            (ContentKind::Forward, self.forward),
        ]
    }

    /// Returns the first kind present in both sets, if any.
    pub fn first_shared(&self, other: &ContentKinds) -> Option<ContentKind> {
        self.entries()
            .into_iter()
            .zip(other.entries())
            .find(|((_, ours), (_, theirs))| *ours && *theirs)
            .map(|((kind, _), _)| kind)
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, present)| !present)
    }
}

/// A message observed in a search result.
///
/// Identity is `(id, kind, channel_id)`; equality and hashing ignore `content`, which
/// only records what the search payload showed at observation time.
#[derive(Debug, Clone)]
pub struct Message {
    /// Discord snowflake ID of the message.
    pub id: String,
    /// Discord message type (0 for a regular message).
    pub kind: i32,
    /// Channel (or thread) the message lives in, used for the delete endpoint.
    pub channel_id: String,
    /// Content kinds detected in the message.
    pub content: ContentKinds,
}

impl Message {
    pub fn new(id: impl Into<String>, kind: i32, channel_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            channel_id: channel_id.into(),
            content: ContentKinds::default(),
        }
    }

    pub fn with_content(mut self, content: ContentKinds) -> Self {
        self.content = content;
        self
    }

    /// Converts a search result message at the API boundary.
    ///
    /// # Arguments
    /// - `dto` - Message as returned by the search endpoint
    /// - `fallback_channel_id` - Channel searched in, used when the payload omits `channel_id`
    ///
    /// # Returns
    /// - `Message` - Domain message with detected content kinds
    pub fn from_dto(dto: SearchMessageDto, fallback_channel_id: &str) -> Self {
        let mut content = ContentKinds {
            link: dto.content.contains("http://") || dto.content.contains("https://"),
            embed: !dto.embeds.is_empty(),
            poll: dto.poll.is_some(),
            sticker: !dto.sticker_items.is_empty(),
            forward: !dto.message_snapshots.is_empty(),
            ..Default::default()
        };

        for attachment in &dto.attachments {
            match attachment.content_type.as_deref() {
                Some(mime) if mime.starts_with("image/") => content.image = true,
                Some(mime) if mime.starts_with("video/") => content.video = true,
                Some(mime) if mime.starts_with("audio/") => content.audio = true,
                _ => content.file = true,
            }
        }

        Self {
            id: dto.id,
            kind: dto.kind,
            channel_id: dto
                .channel_id
                .unwrap_or_else(|| fallback_channel_id.to_string()),
            content,
        }
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind && self.channel_id == other.channel_id
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
        self.channel_id.hash(state);
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Server-side count of all matching messages, including ones not paged through yet.
    ///
    /// Lags behind deletions; never treat it as exact.
    pub total_results: u64,
    /// Primary message of each result group, in server order.
    pub candidates: Vec<Message>,
}

impl Page {
    /// Converts a search response, keeping only the primary message of each group.
    ///
    /// The search endpoint returns each hit as a group whose first element is the
    /// matching message; any further elements are surrounding context.
    pub fn from_dto(dto: SearchResponseDto, fallback_channel_id: &str) -> Self {
        let candidates = dto
            .messages
            .into_iter()
            .filter_map(|group| group.into_iter().next())
            .map(|message| Message::from_dto(message, fallback_channel_id))
            .collect();

        Self {
            total_results: dto.total_results,
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::factory;

    fn parse_page(value: serde_json::Value) -> Page {
        let dto: SearchResponseDto = serde_json::from_value(value).unwrap();
        Page::from_dto(dto, "fallback")
    }

    /// Tests that only the first message of each group becomes a candidate.
    ///
    /// Expected: two candidates, context messages dropped
    #[test]
    fn keeps_primary_message_of_each_group() {
        let page = parse_page(serde_json::json!({
            "total_results": 2,
            "messages": [
                [factory::message("1", 0), factory::message("ctx-1", 0)],
                [factory::message("2", 19)]
            ]
        }));

        assert_eq!(page.total_results, 2);
        let ids: Vec<&str> = page.candidates.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    /// Tests that a missing `channel_id` falls back to the searched channel.
    ///
    /// Expected: payload channel used when present, fallback otherwise
    #[test]
    fn falls_back_to_searched_channel() {
        let page = parse_page(serde_json::json!({
            "total_results": 2,
            "messages": [
                [factory::message_in("1", 0, "thread")],
                [{ "id": "2", "type": 0 }]
            ]
        }));

        assert_eq!(page.candidates[0].channel_id, "thread");
        assert_eq!(page.candidates[1].channel_id, "fallback");
    }

    /// Tests content kind detection from the search payload.
    ///
    /// Expected: link, image, file, sticker and forward detected; others absent
    #[test]
    fn detects_content_kinds() {
        let dto: SearchMessageDto = serde_json::from_value(serde_json::json!({
            "id": "1",
            "type": 0,
            "content": "see https://example.com",
            "attachments": [
                { "content_type": "image/png" },
                { "content_type": "application/zip" }
            ],
            "sticker_items": [{ "id": "5" }],
            "message_snapshots": [{ "message": {} }]
        }))
        .unwrap();

        let content = Message::from_dto(dto, "c").content;

        assert!(content.link);
        assert!(content.image);
        assert!(content.file);
        assert!(content.sticker);
        assert!(content.forward);
        assert!(!content.embed && !content.poll && !content.video && !content.audio);
    }

    /// Tests that identity ignores detected content.
    ///
    /// Expected: messages with the same id, type and channel are equal
    #[test]
    fn identity_ignores_content() {
        let plain = Message::new("1", 0, "c");
        let with_link = Message::new("1", 0, "c").with_content(ContentKinds {
            link: true,
            ..Default::default()
        });

        assert_eq!(plain, with_link);
        assert_ne!(plain, Message::new("1", 0, "other"));
    }

    #[test]
    fn first_shared_kind() {
        let message = ContentKinds {
            embed: true,
            video: true,
            ..Default::default()
        };
        let keep = ContentKinds {
            video: true,
            ..Default::default()
        };

        assert_eq!(message.first_shared(&keep), Some(ContentKind::Video));
        assert_eq!(message.first_shared(&ContentKinds::default()), None);
        assert!(ContentKinds::default().is_empty());
    }
}
