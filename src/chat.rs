//! Append-only chat state.
//!
//! The log is seeded with the assistant greeting. Sending appends the user
//! message immediately; the (constant) assistant reply is appended by the
//! view after a fixed delay. Nothing is ever edited or removed, so after N
//! sends the history holds exactly 2N + 1 messages.

use crate::mocks::{AI_GREETING, AI_REPLY};
use crate::types::{Message, Sender};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.append(AI_GREETING, Sender::Ai);
        log
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a user message. Blank input is rejected and leaves the log
    /// untouched.
    pub fn push_user(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.append(trimmed, Sender::User);
        true
    }

    /// Appends the canned assistant reply. Input content never influences it.
    pub fn push_ai_reply(&mut self) {
        self.append(AI_REPLY, Sender::Ai);
    }

    fn append(&mut self, text: &str, sender: Sender) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id: id.to_string(),
            text: text.to_string(),
            sender,
            timestamp: Some(OffsetDateTime::now_utc()),
        });
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Ai);
        assert_eq!(log.messages()[0].text, AI_GREETING);
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut log = ChatLog::new();
        assert!(!log.push_user("   "));
        assert!(!log.push_user(""));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn history_is_2n_plus_1_after_n_sends() {
        let mut log = ChatLog::new();
        for n in 1..=4 {
            assert!(log.push_user(&format!("question {n}")));
            log.push_ai_reply();
            assert_eq!(log.len(), 2 * n + 1);
        }
    }

    #[test]
    fn user_text_is_trimmed_and_reply_is_constant() {
        let mut log = ChatLog::new();
        log.push_user("  what is backprop?  ");
        log.push_ai_reply();
        assert_eq!(log.messages()[1].text, "what is backprop?");
        assert_eq!(log.messages()[2].text, AI_REPLY);
    }
}
