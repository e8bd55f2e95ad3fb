//! Input-surface state machine.
//!
//! ```text
//! Conversing --marker--> CollectingLead{false} --submit--> CollectingLead{true}
//!     ^                                                     |           |
//!     +-------------------- summary failed -----------------+           |
//!                                                         summary ok -> Ended
//! ```
//!
//! `Ended` is terminal. Events that do not apply to the current mode are
//! rejected and leave it unchanged.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which input surface the widget shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Text input visible.
    #[default]
    Conversing,
    /// Lead form visible, or hidden while its summary request is in flight.
    CollectingLead { submitting: bool },
    /// Session finished; no input surface.
    Ended,
}

/// Inputs to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A bot reply contained the consent marker.
    ConsentRequested,
    /// The lead form passed validation and was submitted.
    LeadSubmitted,
    /// The summary request failed; conversation resumes.
    SummaryFailed,
    /// The summary exchange completed.
    SummarySucceeded,
}

impl UiMode {
    /// Next mode for `event`, or `None` when the event does not apply.
    #[must_use]
    pub fn transition(self, event: UiEvent) -> Option<Self> {
        match (self, event) {
            (Self::Conversing, UiEvent::ConsentRequested) => Some(Self::CollectingLead { submitting: false }),
            (Self::CollectingLead { submitting: false }, UiEvent::LeadSubmitted) => {
                Some(Self::CollectingLead { submitting: true })
            }
            (Self::CollectingLead { submitting: true }, UiEvent::SummaryFailed) => Some(Self::Conversing),
            (Self::CollectingLead { submitting: true }, UiEvent::SummarySucceeded) => Some(Self::Ended),
            _ => None,
        }
    }

    pub fn text_input_visible(self) -> bool {
        self == Self::Conversing
    }

    pub fn lead_form_visible(self) -> bool {
        self == Self::CollectingLead { submitting: false }
    }

    pub fn is_ended(self) -> bool {
        self == Self::Ended
    }
}
