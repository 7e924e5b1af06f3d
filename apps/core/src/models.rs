use serde::{Deserialize, Serialize};
use std::fmt;

/// The sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message typed by the user.
    User,
    /// A message produced by the reply engine (or remote backend).
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "nova"),
        }
    }
}

/// A single message in the on-screen transcript.
///
/// Kept in memory for the duration of one run, for display only. Nothing is
/// written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message (UUID).
    pub id: String,
    /// The sender of the message.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
    /// Unix timestamp of when the message was created.
    pub created_at: i64,
}

impl Message {
    /// Creates a new message stamped with the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_new_message_has_id_and_timestamp() {
        let msg = Message::new(Role::User, "hello");
        assert!(!msg.id.is_empty());
        assert_eq!(msg.content, "hello");
        assert!(msg.created_at > 0);
    }
}
