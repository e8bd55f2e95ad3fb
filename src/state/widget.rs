//! Message list and presentation flags for the chat window.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::ui::{UiEvent, UiMode};
use crate::consent;
use crate::typing::{self, TypingEvent};

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// A single rendered message. Bot messages grow while they are typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub paragraphs: Vec<String>,
}

impl Message {
    /// Displayed text with paragraphs separated by blank lines.
    #[must_use]
    pub fn text(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}

/// Complete widget state for one page session.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub open: bool,
    pub mode: UiMode,
    pub messages: Vec<Message>,
    pub input_disabled: bool,
    pub typing_visible: bool,
    pub input_focus_seq: u64,
    pub form_focus_seq: u64,
    next_id: u64,
}

impl WidgetState {
    /// State with a static bot greeting already in the list.
    #[must_use]
    pub fn with_greeting(greeting: &[String]) -> Self {
        let mut state = Self::default();
        if !greeting.is_empty() {
            let id = state.alloc_id();
            state.messages.push(Message { id, sender: Sender::Bot, paragraphs: greeting.to_vec() });
        }
        state
    }

    pub fn open(&mut self) {
        self.open = true;
        self.input_focus_seq += 1;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Append a user message immediately. Marker text is stripped here too.
    pub fn push_user(&mut self, raw: &str) -> u64 {
        let id = self.alloc_id();
        let paragraphs = vec![consent::strip_for_display(raw)];
        self.messages.push(Message { id, sender: Sender::User, paragraphs });
        id
    }

    /// Append an empty bot message to be filled by typing events.
    pub fn push_bot_placeholder(&mut self) -> u64 {
        let id = self.alloc_id();
        self.messages.push(Message { id, sender: Sender::Bot, paragraphs: Vec::new() });
        id
    }

    /// Apply a typing event to message `id`. Unknown ids are ignored.
    pub fn apply_typing(&mut self, id: u64, event: TypingEvent) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            typing::apply_event(&mut message.paragraphs, event);
        }
    }

    /// Disable input and show the indicator while a request is pending.
    pub fn begin_wait(&mut self) {
        self.input_disabled = true;
        self.typing_visible = true;
    }

    pub fn end_wait(&mut self) {
        self.input_disabled = false;
        self.typing_visible = false;
    }

    /// Apply a state-machine event. Returns whether the mode changed.
    pub fn apply(&mut self, event: UiEvent) -> bool {
        let Some(next) = self.mode.transition(event) else {
            return false;
        };
        self.mode = next;
        if next.lead_form_visible() {
            self.form_focus_seq += 1;
        }
        true
    }

    pub fn text_input_visible(&self) -> bool {
        self.mode.text_input_visible()
    }

    pub fn lead_form_visible(&self) -> bool {
        self.mode.lead_form_visible()
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
