use super::*;

#[test]
fn marker_detected_anywhere_in_reply() {
    assert!(contains_marker("[CONSENT]"));
    assert!(contains_marker("Podaj dane. [CONSENT]"));
    assert!(contains_marker("[CONSENT]\n\nReszta"));
    assert!(contains_marker("a[CONSENT]b"));
}

#[test]
fn marker_absent_or_mangled_is_not_detected() {
    assert!(!contains_marker("Cena zależy od zakresu."));
    assert!(!contains_marker("[consent]"));
    assert!(!contains_marker("[CONSENT"));
    assert!(!contains_marker(""));
}

#[test]
fn strip_removes_trailing_marker() {
    assert_eq!(strip_for_display("Podaj dane. [CONSENT]"), "Podaj dane.");
}

#[test]
fn strip_removes_marker_and_instruction_paragraphs() {
    let raw = format!("Świetnie, przejdźmy dalej.\n\n{CONSENT_MARKER}\n\n{CONSENT_INSTRUCTION}");
    assert_eq!(strip_for_display(&raw), "Świetnie, przejdźmy dalej.");
}

#[test]
fn strip_removes_every_occurrence() {
    let raw = format!("{CONSENT_MARKER}A{CONSENT_MARKER} B {CONSENT_INSTRUCTION}{CONSENT_INSTRUCTION}");
    let cleaned = strip_for_display(&raw);
    assert_eq!(cleaned, "A B");
    assert!(!cleaned.contains(CONSENT_MARKER));
    assert!(!cleaned.contains(CONSENT_INSTRUCTION));
}

#[test]
fn strip_leaves_plain_text_untouched_except_trim() {
    assert_eq!(strip_for_display("  Cena zależy od zakresu.\n"), "Cena zależy od zakresu.");
}

#[test]
fn strip_of_marker_only_reply_is_empty() {
    assert_eq!(strip_for_display(" [CONSENT] "), "");
}
