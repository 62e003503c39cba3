use std::collections::HashSet;

use crate::model::message::Message;

/// Messages that will not be deleted in this session.
///
/// Only ever grows: a message recorded once stays skipped until the session ends.
#[derive(Debug, Default)]
pub struct SkipTracker {
    skipped: HashSet<Message>,
}

impl SkipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message, returning `false` if it was already recorded.
    pub fn record(&mut self, message: Message) -> bool {
        self.skipped.insert(message)
    }

    pub fn contains(&self, message: &Message) -> bool {
        self.skipped.contains(message)
    }

    pub fn len(&self) -> usize {
        self.skipped.len()
    }
}
