//! Consent marker detection and display cleanup.
//!
//! The backend appends `[CONSENT]` to a reply when the conversation is ready
//! for lead collection, usually followed by a fixed sentence describing the
//! form. Neither is ever shown to the user; the raw reply is kept around so
//! detection can run after the cleaned text has been typed out.
//!
//! Detection is a plain substring match with no anchoring, so a marker that
//! the backend echoes back from user content also triggers the form.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

/// Sentinel that switches the widget into lead collection.
pub const CONSENT_MARKER: &str = "[CONSENT]";

/// Instruction sentence the backend places next to the marker.
pub const CONSENT_INSTRUCTION: &str = "Formularz pozwoli Ci wpisać imię i nazwisko, adres e-mail oraz numer telefonu \
                                       (opcjonalnie). Po jego wysłaniu dane trafią bezpośrednio do naszego zespołu.";

/// Whether a raw reply asks the client to collect contact details.
#[must_use]
pub fn contains_marker(raw: &str) -> bool {
    raw.contains(CONSENT_MARKER)
}

/// Remove every marker and instruction sentence, then trim.
#[must_use]
pub fn strip_for_display(raw: &str) -> String {
    raw.replace(CONSENT_MARKER, "")
        .replace(CONSENT_INSTRUCTION, "")
        .trim()
        .to_owned()
}
