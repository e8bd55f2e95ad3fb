//! Scrollable message list with the typing indicator.

use leptos::prelude::*;

use crate::state::widget::{Sender, WidgetState};

/// Message history followed by the typing indicator.
///
/// Rows are keyed by message id so a bot message being typed re-renders only
/// its own paragraphs.
#[component]
pub fn MessageList(avatar: String) -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        state.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let rows = move || state.with(|s| s.messages.iter().map(|m| (m.id, m.sender)).collect::<Vec<_>>());
    let row_avatar = avatar.clone();

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            <For
                each=rows
                key=|(id, _)| *id
                children=move |(id, sender)| view! { <MessageRow id=id sender=sender avatar=row_avatar.clone()/> }
            />

            <div
                class="msg-row typing-row"
                style:display=move || if state.with(|s| s.typing_visible) { "flex" } else { "none" }
            >
                <div class="msg-avatar">{avatar}</div>
                <div class="typing-bubble">
                    <div class="dot"></div>
                    <div class="dot"></div>
                    <div class="dot"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageRow(id: u64, sender: Sender, avatar: String) -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let is_bot = sender == Sender::Bot;

    let paragraphs = move || {
        state.with(|s| {
            s.messages
                .iter()
                .find(|m| m.id == id)
                .map(|m| m.paragraphs.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="msg-row" class:msg-row--user=!is_bot>
            {is_bot.then(|| view! { <div class="msg-avatar">{avatar}</div> })}
            <div class="msg" class:bot=is_bot class:user=!is_bot>
                {move || paragraphs().into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        </div>
    }
}
