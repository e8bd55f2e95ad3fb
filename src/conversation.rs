//! Conversation orchestration: message send, lead submission, bot typing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each operation is one sequential `async fn` running on the browser's
//! single-threaded executor. Suspension points are the two HTTP calls and the
//! per-character pauses. Ordering:
//! - the user echo is appended before the chat request is issued;
//! - the typing indicator is hidden before a bot message starts rendering;
//! - the lead-storage call is issued only after the summary reply arrived,
//!   as a detached task; the closing animation and the end of the session
//!   never wait for it.
//!
//! Nothing here is cancellable and no request has a timeout; a request that
//! never settles leaves the input disabled.
//!
//! ERROR HANDLING
//! ==============
//! Chat failures become a generic bot message. Lead-storage failures are
//! logged only. Contact details and message contents are never logged.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::prelude::{RwSignal, Update, WithUntracked};
use time::OffsetDateTime;

use crate::config::{TypingCadence, WidgetConfig, WidgetCopy};
use crate::consent;
use crate::lead::{self, ContactDetails, LeadForm, LeadFormError, LeadRecord};
use crate::net::api::WidgetApi;
use crate::state::ui::UiEvent;
use crate::state::widget::WidgetState;
use crate::typing::TypingSchedule;

/// Shared access to `WidgetState`.
pub trait StateStore {
    fn update(&self, f: impl FnOnce(&mut WidgetState));
    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R;
}

impl StateStore for RwSignal<WidgetState> {
    fn update(&self, f: impl FnOnce(&mut WidgetState)) {
        Update::update(self, f);
    }

    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        self.with_untracked(f)
    }
}

impl StateStore for Rc<RefCell<WidgetState>> {
    fn update(&self, f: impl FnOnce(&mut WidgetState)) {
        f(&mut self.borrow_mut());
    }

    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        f(&self.borrow())
    }
}

/// Cooperative delay between typing steps.
#[async_trait(?Send)]
pub trait Pause {
    async fn pause(&self, duration: Duration);
}

/// `Pause` backed by browser timers. Returns immediately in native builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerPause;

#[async_trait(?Send)]
impl Pause for TimerPause {
    async fn pause(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "csr"))]
        let _ = duration;
    }
}

/// Result of a message send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank; nothing happened.
    Ignored,
    /// The reply was rendered.
    Replied { consent_requested: bool },
    /// The request failed and the error message was rendered.
    Failed,
}

/// Runs a task that the caller does not await.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Hand `task` to the browser executor. Native builds have no executor, so
/// the task is polled once and dropped if it is still pending.
fn spawn_detached(task: LocalBoxFuture<'static, ()>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    if task.now_or_never().is_none() {
        leptos::logging::warn!("detached task did not finish; dropped");
    }
}

/// Result of a lead form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadOutcome {
    /// The form is not accepting submissions.
    Ignored,
    /// Validation failed; the form stays visible.
    Rejected(LeadFormError),
    /// The closing reply was rendered and the session ended. The lead record
    /// may still be in flight.
    Completed,
    /// The summary request failed; the text input is back.
    Failed,
}

/// Drives one widget session.
pub struct Conversation<A, S, P> {
    api: A,
    state: S,
    pause: P,
    cadence: TypingCadence,
    copy: WidgetCopy,
    clock: fn() -> OffsetDateTime,
    spawner: Spawner,
}

impl<A, S, P> Conversation<A, S, P>
where
    A: WidgetApi + Clone + 'static,
    S: StateStore,
    P: Pause,
{
    pub fn new(api: A, state: S, pause: P, config: &WidgetConfig) -> Self {
        Self {
            api,
            state,
            pause,
            cadence: config.cadence,
            copy: config.copy.clone(),
            clock: OffsetDateTime::now_utc,
            spawner: Rc::new(spawn_detached),
        }
    }

    /// Replace the timestamp source used for lead records.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the executor used for the lead-storage call.
    #[must_use]
    pub fn with_spawner(mut self, spawner: impl Fn(LocalBoxFuture<'static, ()>) + 'static) -> Self {
        self.spawner = Rc::new(spawner);
        self
    }

    /// Send the text field contents to the chat endpoint and render the reply.
    pub async fn send_message(&self, raw_input: &str) -> SendOutcome {
        let text = raw_input.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        self.state.update(|s| {
            s.push_user(text);
            s.begin_wait();
        });

        match self.api.send_chat(text).await {
            Ok(reply) => {
                self.state.update(WidgetState::end_wait);
                let raw = self.type_bot_message(reply.text_or(&self.copy.no_reply_fallback)).await;
                let consent_requested = consent::contains_marker(&raw) && {
                    self.state.update(|s| {
                        s.apply(UiEvent::ConsentRequested);
                    });
                    self.state.read(WidgetState::lead_form_visible)
                };
                SendOutcome::Replied { consent_requested }
            }
            Err(e) => {
                leptos::logging::error!("chat request failed: {e}");
                self.state.update(WidgetState::end_wait);
                self.type_bot_message(&self.copy.chat_error).await;
                SendOutcome::Failed
            }
        }
    }

    /// Submit the consent form: summary to the chat endpoint, then the lead
    /// record to storage.
    pub async fn submit_lead(&self, form: &LeadForm) -> LeadOutcome {
        if !self.state.read(WidgetState::lead_form_visible) {
            return LeadOutcome::Ignored;
        }
        let contact = match form.validate() {
            Ok(contact) => contact,
            Err(e) => return LeadOutcome::Rejected(e),
        };

        self.state.update(|s| {
            s.apply(UiEvent::LeadSubmitted);
            s.typing_visible = true;
        });

        let summary = lead::summary_message(&contact);
        match self.api.send_chat(&summary).await {
            Ok(reply) => {
                self.state.update(|s| s.typing_visible = false);
                self.forward_lead(&contact, reply.history.clone());
                self.type_bot_message(reply.text_or(&self.copy.closing_fallback)).await;
                self.state.update(|s| {
                    s.apply(UiEvent::SummarySucceeded);
                });
                LeadOutcome::Completed
            }
            Err(e) => {
                leptos::logging::error!("lead summary request failed: {e}");
                self.state.update(|s| {
                    s.typing_visible = false;
                    s.apply(UiEvent::SummaryFailed);
                });
                self.type_bot_message(&self.copy.lead_error).await;
                LeadOutcome::Failed
            }
        }
    }

    /// Type out `raw` without marker text; returns `raw` unchanged so the
    /// caller can run marker detection once rendering is done.
    pub async fn type_bot_message(&self, raw: &str) -> String {
        let cleaned = consent::strip_for_display(raw);
        let mut id = 0;
        self.state.update(|s| id = s.push_bot_placeholder());

        for event in TypingSchedule::new(&cleaned, self.cadence) {
            self.state.update(|s| s.apply_typing(id, event));
            let delay = event.delay();
            if !delay.is_zero() {
                self.pause.pause(delay).await;
            }
        }
        raw.to_owned()
    }

    /// Issue the lead-storage call without awaiting it. Skipped when the
    /// summary reply carried no transcript.
    fn forward_lead(&self, contact: &ContactDetails, history: Option<serde_json::Value>) {
        let Some(history) = history else {
            leptos::logging::warn!("summary reply carried no history; lead not saved");
            return;
        };
        let record = match LeadRecord::new(contact, history, (self.clock)()) {
            Ok(record) => record,
            Err(e) => {
                leptos::logging::error!("lead timestamp formatting failed: {e}");
                return;
            }
        };
        let api = self.api.clone();
        (self.spawner)(
            async move {
                match api.save_lead(&record).await {
                    Ok(()) => leptos::logging::log!("lead saved"),
                    Err(e) => leptos::logging::error!("lead save failed: {e}"),
                }
            }
            .boxed_local(),
        );
    }
}
