//! Lead collection form shown after the backend asks for consent.

use leptos::prelude::*;

use crate::components::chat_widget::ConversationHandle;
use crate::config::WidgetCopy;
use crate::lead::LeadForm;
use crate::state::widget::WidgetState;

#[cfg(feature = "csr")]
const FORM_FOCUS_DELAY_MS: u32 = 100;

/// Name, email, optional phone and a required consent checkbox.
#[component]
pub fn ConsentForm(copy: WidgetCopy) -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let conversation = expect_context::<ConversationHandle>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let consent = RwSignal::new(false);
    let name_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let seq = state.with(|s| s.form_focus_seq);
        if seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        gloo_timers::callback::Timeout::new(FORM_FOCUS_DELAY_MS, move || {
            if let Some(input_el) = name_ref.get_untracked() {
                let _ = input_el.focus();
            }
        })
        .forget();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LeadForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            consent: consent.get_untracked(),
        };
        // Whitespace-only fields pass the browser's `required` check.
        if let Err(err) = form.validate() {
            alert(&err.to_string());
            return;
        }

        let conversation = conversation.get_value();
        leptos::task::spawn_local(async move {
            conversation.submit_lead(&form).await;
        });
    };

    view! {
        <form
            class="chat-consent-form"
            style:display=move || if state.with(|s| s.lead_form_visible()) { "flex" } else { "none" }
            on:submit=on_submit
        >
            <div class="form-title">{copy.form_title}</div>
            <input
                type="text"
                placeholder=copy.name_placeholder
                required=true
                node_ref=name_ref
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder=copy.email_placeholder
                required=true
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder=copy.phone_placeholder
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <label class="consent-checkbox-container">
                <input
                    type="checkbox"
                    prop:checked=move || consent.get()
                    on:change=move |ev| consent.set(event_target_checked(&ev))
                />
                <span class="checkmark"></span>
                {copy.consent_label}
                " "
                <a href=copy.privacy_policy_url target="_blank" rel="noopener">
                    {copy.privacy_policy_label}
                </a>
                "."
            </label>
            <button type="submit">{copy.submit_label}</button>
        </form>
    }
}

fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::warn!("{message}");
    }
}
