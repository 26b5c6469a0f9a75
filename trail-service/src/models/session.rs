//! Chat session model held in the per-browser session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message in a conversation. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role: user or assistant.
    pub role: Role,

    /// Message content.
    pub content: String,

    /// When the turn was recorded.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// A conversation scoped to one browser session.
///
/// The sequence of turns is append-only; insertion order is display order.
/// Created on first interaction and discarded when the session layer expires
/// the entry. Nothing is persisted across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier.
    session_id: String,

    /// Turns in insertion order.
    turns: Vec<ChatTurn>,

    /// Total input tokens consumed.
    total_input_tokens: i32,

    /// Total output tokens generated.
    total_output_tokens: i32,

    /// When the session was created.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,

    /// When the session was last updated.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    updated_at: DateTime<Utc>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            turns: Vec::new(),
            total_input_tokens: 0,
            total_output_tokens: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Record a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into());
    }

    /// Record an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    fn push(&mut self, role: Role, content: String) {
        self.turns.push(ChatTurn {
            role,
            content,
            timestamp: Utc::now(),
        });
        self.updated_at = Utc::now();
    }

    /// Update token usage totals.
    pub fn add_usage(&mut self, input_tokens: i32, output_tokens: i32) {
        self.total_input_tokens += input_tokens;
        self.total_output_tokens += output_tokens;
        self.updated_at = Utc::now();
    }

    pub fn total_input_tokens(&self) -> i32 {
        self.total_input_tokens
    }

    pub fn total_output_tokens(&self) -> i32 {
        self.total_output_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_grows_by_two_per_exchange() {
        let mut session = ChatSession::new();
        for i in 0..5 {
            session.push_user(format!("prompt {}", i));
            session.push_assistant(format!("reply {}", i));
        }
        assert_eq!(session.turns().len(), 10);
    }

    #[test]
    fn turns_keep_insertion_order() {
        let mut session = ChatSession::new();
        session.push_user("easy loop near a creek");
        session.push_assistant("Try the Willow Creek loop.");

        let turns = session.turns();
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[0].content, "easy loop near a creek");
    }

    #[test]
    fn failed_exchange_leaves_only_the_user_turn() {
        let mut session = ChatSession::new();
        session.push_user("waterfall hike");
        // No assistant turn recorded when generation fails.
        assert_eq!(session.turns().len(), 1);
        assert!(session.turns()[0].is_user());
    }

    #[test]
    fn usage_accumulates() {
        let mut session = ChatSession::new();
        session.add_usage(10, 20);
        session.add_usage(5, 7);
        assert_eq!(session.total_input_tokens(), 15);
        assert_eq!(session.total_output_tokens(), 27);
    }

    #[test]
    fn roundtrips_through_serde() {
        let mut session = ChatSession::new();
        session.push_user("hello");
        let json = serde_json::to_string(&session).unwrap();
        let restored: ChatSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.turns().len(), 1);
        assert_eq!(restored.session_id(), session.session_id());
    }
}
