//! Leptos view components for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the `WidgetState` signal and the `Conversation` and
//! provides both through context; the other components read them to render
//! the message list, the text input row and the consent form.

pub mod chat_widget;
pub mod consent_form;
pub mod input_row;
pub mod message_list;
