use std::collections::VecDeque;

use crate::core::message::Message;
use crate::core::seed::{HistoryEntry, Profile, SeedData};

/// In-memory conversation state for one running view. The seed fills it at
/// startup and submissions append to it; nothing is ever persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub title: String,
    pub messages: VecDeque<Message>,
    /// Past-conversation list shown in the sidebar. Read-only reference data.
    pub history: Vec<HistoryEntry>,
    pub profile: Profile,
}

impl SessionState {
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            title: seed.title,
            messages: seed.messages.into_iter().collect(),
            history: seed.history,
            profile: seed.profile,
        }
    }

    /// Append a message to the transcript. This is the only mutation the
    /// session supports; messages are never edited or removed.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push_back(message);
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.back()
    }
}
