//! # lead-chat-widget
//!
//! Leptos + WASM chat widget for embedding in a website. A floating bubble
//! opens a conversation window; bot replies are typed out character by
//! character, and a consent marker in a reply swaps the text input for a
//! lead form whose data is forwarded to a separate storage endpoint.
//!
//! The browser layer (`components`, `HttpApi`, timers) is enabled by the
//! `csr` feature. Everything else builds and tests natively.

pub mod components;
pub mod config;
pub mod consent;
pub mod conversation;
pub mod lead;
pub mod net;
pub mod state;
pub mod typing;

/// Mount the widget into `document.body`. Runs once when the wasm module
/// loads; the widget lives until the page unloads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use components::chat_widget::ChatWidget;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <ChatWidget/> });
}
