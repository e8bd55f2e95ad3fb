use super::*;

const ALL_MODES: [UiMode; 4] = [
    UiMode::Conversing,
    UiMode::CollectingLead { submitting: false },
    UiMode::CollectingLead { submitting: true },
    UiMode::Ended,
];

const ALL_EVENTS: [UiEvent; 4] =
    [UiEvent::ConsentRequested, UiEvent::LeadSubmitted, UiEvent::SummaryFailed, UiEvent::SummarySucceeded];

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_mode_is_conversing() {
    assert_eq!(UiMode::default(), UiMode::Conversing);
}

#[test]
fn consent_moves_conversing_to_collecting() {
    assert_eq!(
        UiMode::Conversing.transition(UiEvent::ConsentRequested),
        Some(UiMode::CollectingLead { submitting: false })
    );
}

#[test]
fn submit_hides_form_while_collecting() {
    assert_eq!(
        UiMode::CollectingLead { submitting: false }.transition(UiEvent::LeadSubmitted),
        Some(UiMode::CollectingLead { submitting: true })
    );
}

#[test]
fn summary_outcomes_from_submitting() {
    let submitting = UiMode::CollectingLead { submitting: true };
    assert_eq!(submitting.transition(UiEvent::SummaryFailed), Some(UiMode::Conversing));
    assert_eq!(submitting.transition(UiEvent::SummarySucceeded), Some(UiMode::Ended));
}

#[test]
fn second_submit_is_rejected() {
    assert_eq!(UiMode::CollectingLead { submitting: true }.transition(UiEvent::LeadSubmitted), None);
}

#[test]
fn nothing_leaves_ended() {
    for event in ALL_EVENTS {
        assert_eq!(UiMode::Ended.transition(event), None, "{event:?}");
    }
}

#[test]
fn exactly_four_transitions_are_defined() {
    let defined = ALL_MODES
        .iter()
        .flat_map(|mode| ALL_EVENTS.iter().map(move |event| mode.transition(*event)))
        .filter(Option::is_some)
        .count();
    assert_eq!(defined, 4);
}

// =============================================================
// Surface visibility
// =============================================================

#[test]
fn at_most_one_surface_visible_in_every_mode() {
    for mode in ALL_MODES {
        assert!(!(mode.text_input_visible() && mode.lead_form_visible()), "{mode:?}");
    }
}

#[test]
fn visibility_per_mode() {
    assert!(UiMode::Conversing.text_input_visible());
    assert!(!UiMode::Conversing.lead_form_visible());

    let collecting = UiMode::CollectingLead { submitting: false };
    assert!(!collecting.text_input_visible());
    assert!(collecting.lead_form_visible());

    let submitting = UiMode::CollectingLead { submitting: true };
    assert!(!submitting.text_input_visible());
    assert!(!submitting.lead_form_visible());

    assert!(!UiMode::Ended.text_input_visible());
    assert!(!UiMode::Ended.lead_form_visible());
    assert!(UiMode::Ended.is_ended());
}
