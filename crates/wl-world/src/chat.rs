//! Conversation persistence, one JSON file per participant pair.

use std::path::PathBuf;

use wl_core::chat::Conversation;

use crate::error::WorldResult;
use crate::persist;

/// Loads and saves pairwise conversations.
///
/// Files live under one directory and are named for their sorted
/// participant pair, so the same two entities always share one log no
/// matter who starts talking.
#[derive(Debug, Clone)]
pub struct ChatManager {
    dir: PathBuf,
}

impl ChatManager {
    /// A manager storing conversations under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The conversation between two entities: the persisted log when one
    /// exists, otherwise a fresh empty conversation. Unreadable files
    /// count as absent.
    pub fn conversation(&self, a: i32, b: i32) -> Conversation {
        let fresh = Conversation::new(a, b);
        persist::read_json(&self.dir.join(fresh.file_name())).unwrap_or(fresh)
    }

    /// Persist a conversation under its pair file.
    pub fn save(&self, conversation: &Conversation) -> WorldResult<()> {
        persist::write_json(&self.dir.join(conversation.file_name()), conversation)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use wl_core::chat::Message;

    use super::*;

    #[test]
    fn fresh_pair_gets_an_empty_conversation() {
        let dir = TempDir::new().unwrap();
        let manager = ChatManager::new(dir.path());
        let conversation = manager.conversation(7, 9);
        assert_eq!(conversation.participants, [7, 9]);
        assert!(conversation.messages.is_empty());
    }

    #[test]
    fn saved_conversations_come_back_in_either_order() {
        let dir = TempDir::new().unwrap();
        let manager = ChatManager::new(dir.path());

        let mut conversation = manager.conversation(9, 7);
        conversation.add_message(Message {
            sender_id: 9,
            message: "hello".to_string(),
            time: "1/1/1  9:00 AM".to_string(),
        });
        manager.save(&conversation).unwrap();

        let reloaded = manager.conversation(7, 9);
        assert_eq!(reloaded, conversation);
        assert!(dir.path().join("7-9.json").exists());
    }

    #[test]
    fn corrupt_logs_read_as_fresh() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("7-9.json"), "{broken").unwrap();
        let manager = ChatManager::new(dir.path());
        assert!(manager.conversation(7, 9).messages.is_empty());
    }
}
