//! Widget state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the input-surface state machine, `widget` holds the message
//! list and presentation flags. Both are plain data; the Leptos layer wraps
//! `WidgetState` in a single `RwSignal`.

pub mod ui;
pub mod widget;
