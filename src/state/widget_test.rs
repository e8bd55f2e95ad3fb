use super::*;
use crate::config::TypingCadence;
use crate::typing::TypingSchedule;

// =============================================================
// Defaults and panel
// =============================================================

#[test]
fn default_state_is_closed_and_conversing() {
    let state = WidgetState::default();
    assert!(!state.open);
    assert_eq!(state.mode, UiMode::Conversing);
    assert!(state.messages.is_empty());
    assert!(!state.input_disabled);
    assert!(!state.typing_visible);
}

#[test]
fn greeting_is_first_bot_message() {
    let state = WidgetState::with_greeting(&["Cześć!".to_owned(), "W czym pomóc?".to_owned()]);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert_eq!(state.messages[0].text(), "Cześć!\n\nW czym pomóc?");
}

#[test]
fn empty_greeting_adds_nothing() {
    assert!(WidgetState::with_greeting(&[]).messages.is_empty());
}

#[test]
fn open_requests_input_focus() {
    let mut state = WidgetState::default();
    state.open();
    assert!(state.open);
    assert_eq!(state.input_focus_seq, 1);
    state.close();
    assert!(!state.open);
    state.toggle();
    assert!(state.open);
    assert_eq!(state.input_focus_seq, 2);
    state.toggle();
    assert!(!state.open);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn push_user_strips_marker_and_assigns_unique_ids() {
    let mut state = WidgetState::default();
    let a = state.push_user("hej [CONSENT]");
    let b = state.push_user("drugi");
    assert_ne!(a, b);
    assert_eq!(state.messages[0].text(), "hej");
    assert_eq!(state.messages[0].sender, Sender::User);
}

#[test]
fn typing_events_fill_placeholder() {
    let mut state = WidgetState::default();
    let id = state.push_bot_placeholder();
    for event in TypingSchedule::new("A.\n\nB!", TypingCadence::instant()) {
        state.apply_typing(id, event);
    }
    assert_eq!(state.messages[0].paragraphs, vec!["A.".to_owned(), "B!".to_owned()]);
}

#[test]
fn typing_into_unknown_id_is_ignored() {
    let mut state = WidgetState::default();
    state.push_user("x");
    state.apply_typing(999, TypingEvent::ParagraphStart);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].paragraphs.len(), 1);
}

// =============================================================
// Wait flags and mode
// =============================================================

#[test]
fn wait_toggles_input_and_indicator_together() {
    let mut state = WidgetState::default();
    state.begin_wait();
    assert!(state.input_disabled && state.typing_visible);
    state.end_wait();
    assert!(!state.input_disabled && !state.typing_visible);
}

#[test]
fn consent_event_shows_form_and_requests_focus() {
    let mut state = WidgetState::default();
    assert!(state.apply(UiEvent::ConsentRequested));
    assert!(state.lead_form_visible());
    assert!(!state.text_input_visible());
    assert_eq!(state.form_focus_seq, 1);
}

#[test]
fn rejected_event_leaves_state_untouched() {
    let mut state = WidgetState::default();
    assert!(!state.apply(UiEvent::SummarySucceeded));
    assert_eq!(state.mode, UiMode::Conversing);
    assert_eq!(state.form_focus_seq, 0);
}
