use serde::{Deserialize, Serialize};

/// Conversation state carried by chat-capable entities.
///
/// Never persisted: entities always come back from disk idle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChatState {
    /// Not in a conversation.
    #[default]
    Idle,
    /// In a conversation; the value is this side's copy of the log.
    Talking(Conversation),
}

impl ChatState {
    /// Whether this side is currently in a conversation.
    pub fn is_talking(&self) -> bool {
        matches!(self, ChatState::Talking(_))
    }

    /// The conversation, when talking.
    pub fn conversation(&self) -> Option<&Conversation> {
        match self {
            ChatState::Talking(conversation) => Some(conversation),
            ChatState::Idle => None,
        }
    }
}

/// A message log between exactly two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// The two participant ids, smallest first.
    pub participants: [i32; 2],
    /// Messages in send order.
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation between two entities.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            participants: [a.min(b), a.max(b)],
            messages: Vec::new(),
        }
    }

    /// File name this conversation persists under.
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.participants[0], self.participants[1])
    }

    /// The participant that is not `id`.
    pub fn other_participant(&self, id: i32) -> Option<i32> {
        self.participants.iter().copied().find(|&p| p != id)
    }

    /// Append a message to the log.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Id of the sending entity.
    pub sender_id: i32,
    /// Message text.
    pub message: String,
    /// In-world timestamp string captured at send time.
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_are_stored_ascending() {
        assert_eq!(Conversation::new(9, 3).participants, [3, 9]);
        assert_eq!(Conversation::new(3, 9).participants, [3, 9]);
        assert_eq!(Conversation::new(-1, 5).participants, [-1, 5]);
    }

    #[test]
    fn file_name_uses_the_ascending_pair() {
        assert_eq!(Conversation::new(9, 3).file_name(), "3-9.json");
        assert_eq!(Conversation::new(-1, 5).file_name(), "-1-5.json");
    }

    #[test]
    fn other_participant_returns_the_peer() {
        let conversation = Conversation::new(3, 9);
        assert_eq!(conversation.other_participant(3), Some(9));
        assert_eq!(conversation.other_participant(9), Some(3));
    }

    #[test]
    fn add_message_keeps_send_order() {
        let mut conversation = Conversation::new(1, 2);
        conversation.add_message(Message {
            sender_id: 1,
            message: "hello".into(),
            time: "1/1/1  9:00 AM".into(),
        });
        conversation.add_message(Message {
            sender_id: 2,
            message: "hi".into(),
            time: "1/1/1  9:00 AM".into(),
        });
        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages[0].sender_id, 1);
        assert_eq!(conversation.messages[1].sender_id, 2);
    }

    #[test]
    fn chat_state_defaults_to_idle() {
        let state = ChatState::default();
        assert!(!state.is_talking());
        assert!(state.conversation().is_none());
    }
}
