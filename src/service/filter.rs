use crate::{
    config::RemovalConfig,
    model::{
        message::{ContentKinds, Message},
        outcome::SkipReason,
    },
};

/// Whether Discord refuses to delete messages of this type.
///
/// Types 0 and 6 through 21 are regular messages; every other type, including unknown
/// and negative ones, is treated as a system message.
pub fn is_system_message(kind: i32) -> bool {
    (kind < 6 || kind > 21) && kind != 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Deletable,
    Skip(SkipReason),
}

/// Decides which candidates the engine may delete.
pub struct FilterPolicy {
    excluded: ContentKinds,
}

impl FilterPolicy {
    pub fn new(excluded: ContentKinds) -> Self {
        Self { excluded }
    }

    pub fn from_config(config: &RemovalConfig) -> Self {
        Self::new(config.excluded)
    }

    /// Classifies a candidate.
    ///
    /// # Returns
    /// - `Classification::Skip(System)` - Undeletable message type
    /// - `Classification::Skip(Excluded(kind))` - Carries content the user keeps
    /// - `Classification::Deletable` - Otherwise
    pub fn classify(&self, message: &Message) -> Classification {
        if is_system_message(message.kind) {
            return Classification::Skip(SkipReason::System);
        }

        match message.content.first_shared(&self.excluded) {
            Some(kind) => Classification::Skip(SkipReason::Excluded(kind)),
            None => Classification::Deletable,
        }
    }
}
