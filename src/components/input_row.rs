//! Text input row for conversational messages.

use leptos::prelude::*;

use crate::components::chat_widget::ConversationHandle;
use crate::state::widget::WidgetState;

/// Text field and send button. Hidden once the lead flow takes over.
#[component]
pub fn InputRow(placeholder: String, send_label: String) -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let conversation = expect_context::<ConversationHandle>();

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let seq = state.with(|s| s.input_focus_seq);
        if seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = input_ref.get_untracked() {
                let _ = input_el.focus();
            }
        }
    });

    let do_send = move || {
        if state.with_untracked(|s| s.input_disabled) {
            return;
        }
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());

        let conversation = conversation.get_value();
        leptos::task::spawn_local(async move {
            conversation.send_message(&text).await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            do_send();
        }
    };

    view! {
        <div
            class="chat-input"
            style:display=move || if state.with(|s| s.text_input_visible()) { "flex" } else { "none" }
        >
            <input
                type="text"
                placeholder=placeholder
                inputmode="text"
                autocomplete="off"
                node_ref=input_ref
                disabled=move || state.with(|s| s.input_disabled)
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button on:click=move |_| do_send()>{send_label}</button>
        </div>
    }
}
