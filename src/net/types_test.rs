use super::*;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest { message: "Ile kosztuje projekt?" }).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Ile kosztuje projekt?" }));
}

// =============================================================
// ChatReply
// =============================================================

#[test]
fn reply_prefers_response_key() {
    let reply: ChatReply =
        serde_json::from_str(r#"{"response":"Cena zależy od zakresu.","reply":"inne"}"#).unwrap();
    assert_eq!(reply.text(), Some("Cena zależy od zakresu."));
    assert!(reply.history.is_none());
}

#[test]
fn reply_falls_back_to_reply_key() {
    let reply: ChatReply = serde_json::from_str(r#"{"reply":"Witaj"}"#).unwrap();
    assert_eq!(reply.text(), Some("Witaj"));
}

#[test]
fn empty_response_counts_as_missing() {
    let reply: ChatReply = serde_json::from_str(r#"{"response":"","reply":"Witaj"}"#).unwrap();
    assert_eq!(reply.text(), Some("Witaj"));

    let empty: ChatReply = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.text(), None);
    assert_eq!(empty.text_or("Brak odpowiedzi."), "Brak odpowiedzi.");
}

#[test]
fn history_is_kept_opaque() {
    let reply: ChatReply = serde_json::from_str(
        r#"{"response":"ok","history":[{"role":"system","content":"x"},{"role":"user","content":"y"}]}"#,
    )
    .unwrap();
    let history = reply.history.unwrap();
    assert_eq!(history.as_array().map(Vec::len), Some(2));
}

#[test]
fn null_history_is_absent() {
    let reply: ChatReply = serde_json::from_str(r#"{"response":"ok","history":null}"#).unwrap();
    assert!(reply.history.is_none());
}

#[test]
fn rate_limit_body_still_decodes() {
    let reply: ChatReply = serde_json::from_str(
        r#"{"error":"rate_limit","response":"Przekroczyłeś limit zapytań. Spróbuj ponownie za chwilę."}"#,
    )
    .unwrap();
    assert_eq!(reply.text(), Some("Przekroczyłeś limit zapytań. Spróbuj ponownie za chwilę."));
}
