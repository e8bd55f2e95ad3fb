//! Root widget: toggle bubble plus the conversation window.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, provide_meta_context};

use crate::components::consent_form::ConsentForm;
use crate::components::input_row::InputRow;
use crate::components::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::conversation::{Conversation, TimerPause};
use crate::net::api::HttpApi;
use crate::state::widget::WidgetState;

/// Conversation wired to `fetch`, the widget signal and browser timers.
pub type BrowserConversation = Conversation<HttpApi, RwSignal<WidgetState>, TimerPause>;

/// Context handle for the page's single conversation.
pub type ConversationHandle = StoredValue<Rc<BrowserConversation>, LocalStorage>;

/// Floating bubble that opens a chat window.
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let state = RwSignal::new(WidgetState::with_greeting(&config.copy.greeting));
    let conversation: ConversationHandle = StoredValue::new_local(Rc::new(Conversation::new(
        HttpApi::from_config(&config),
        state,
        TimerPause,
        &config,
    )));

    provide_context(state);
    provide_context(conversation);

    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                state.update(WidgetState::close);
            }
        });
    }

    let copy = config.copy;
    let title = copy.title.clone();

    view! {
        <Stylesheet id="lead-chat-widget" href=config.stylesheet_href/>

        <button
            class="chat-bubble"
            aria-label=copy.open_label.clone()
            on:click=move |_| state.update(WidgetState::toggle)
        >
            {copy.avatar.clone()}
        </button>

        <section class="chat-window" class:active=move || state.with(|s| s.open)>
            <header class="chat-header">
                <div class="chat-title">{title}</div>
                <button
                    class="chat-close"
                    aria-label=copy.close_label.clone()
                    on:click=move |_| state.update(WidgetState::close)
                >
                    "✕"
                </button>
            </header>

            <MessageList avatar=copy.avatar.clone()/>

            <div class="chat-input-area-wrapper">
                <InputRow placeholder=copy.input_placeholder.clone() send_label=copy.send_label.clone()/>
                <ConsentForm copy=copy/>
            </div>
        </section>
    }
}
