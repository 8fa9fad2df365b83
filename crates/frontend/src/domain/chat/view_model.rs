//! Chat section - view model.

use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

/// One transcript entry. The transcript is append-only and purely client
/// side; it is never persisted or replayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    /// True while a query is in flight; shows the thinking placeholder and
    /// guards against overlapping sends.
    pub is_thinking: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            is_thinking: RwSignal::new(false),
        }
    }

    pub fn push(&self, message: ChatMessage) {
        self.messages.update(|msgs| msgs.push(message));
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}
