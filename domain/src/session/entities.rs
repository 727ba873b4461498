//! Session domain entities

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Flattens `(user, assistant)` exchange pairs into alternating turns.
    ///
    /// Empty sides are skipped so a pending exchange with no reply yet
    /// contributes only its user turn.
    pub fn history_from_pairs<U, A>(pairs: impl IntoIterator<Item = (U, A)>) -> Vec<Message>
    where
        U: Into<String>,
        A: Into<String>,
    {
        let mut history = Vec::new();
        for (user, assistant) in pairs {
            let user = user.into();
            let assistant = assistant.into();
            if !user.is_empty() {
                history.push(Message::user(user));
            }
            if !assistant.is_empty() {
                history.push(Message::assistant(assistant));
            }
        }
        history
    }
}
