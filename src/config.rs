//! Widget configuration: endpoints, typing cadence and user-facing copy.
//!
//! DESIGN
//! ======
//! There is no runtime config file. Endpoint paths are deploy-time constants
//! that can be overridden when the wasm bundle is built, e.g.
//! `LEAD_WIDGET_CHAT_ENDPOINT=https://api.example.com/chat`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_LEAD_ENDPOINT: &str = "/wp-json/matyla/v1/save-lead";
pub const DEFAULT_STYLESHEET_HREF: &str = "/static/css/chat-widget.css";

pub const DEFAULT_CHAR_DELAY_MS: u64 = 18;
pub const DEFAULT_PUNCTUATION_DELAY_MS: u64 = 120;
pub const DEFAULT_SPACE_DELAY_MS: u64 = 10;
pub const DEFAULT_PARAGRAPH_PAUSE_MS: u64 = 400;

/// Per-character delays used by the typing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingCadence {
    pub char_delay: Duration,
    pub punctuation_delay: Duration,
    pub space_delay: Duration,
    pub paragraph_pause: Duration,
}

impl Default for TypingCadence {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(DEFAULT_CHAR_DELAY_MS),
            punctuation_delay: Duration::from_millis(DEFAULT_PUNCTUATION_DELAY_MS),
            space_delay: Duration::from_millis(DEFAULT_SPACE_DELAY_MS),
            paragraph_pause: Duration::from_millis(DEFAULT_PARAGRAPH_PAUSE_MS),
        }
    }
}

impl TypingCadence {
    /// A cadence with every delay set to zero. Renders text in one go.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            punctuation_delay: Duration::ZERO,
            space_delay: Duration::ZERO,
            paragraph_pause: Duration::ZERO,
        }
    }

    /// Delay to wait after revealing `ch`.
    #[must_use]
    pub fn delay_for(&self, ch: char) -> Duration {
        match ch {
            '.' | ',' | '!' | '?' => self.punctuation_delay,
            ' ' => self.space_delay,
            _ => self.char_delay,
        }
    }
}

/// All user-facing strings rendered or sent by the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetCopy {
    pub title: String,
    pub avatar: String,
    pub open_label: String,
    pub close_label: String,
    pub greeting: Vec<String>,
    pub input_placeholder: String,
    pub send_label: String,
    pub form_title: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub phone_placeholder: String,
    pub consent_label: String,
    pub privacy_policy_label: String,
    pub privacy_policy_url: String,
    pub submit_label: String,
    pub no_reply_fallback: String,
    pub closing_fallback: String,
    pub chat_error: String,
    pub lead_error: String,
}

impl Default for WidgetCopy {
    fn default() -> Self {
        Self {
            title: "Matyla Design Assistant".to_owned(),
            avatar: "M".to_owned(),
            open_label: "Otwórz czat".to_owned(),
            close_label: "Zamknij".to_owned(),
            greeting: vec![
                "Cześć! Jestem Matyla Design Assistant.".to_owned(),
                "Moja rola polega na zebraniu kluczowych informacji, aby nasz zespół mógł przygotować \
                 dedykowaną ofertę na podstawie naszej rozmowy."
                    .to_owned(),
                "W czym mogę Ci dzisiaj pomóc?".to_owned(),
            ],
            input_placeholder: "Napisz wiadomość…".to_owned(),
            send_label: "Wyślij".to_owned(),
            form_title: "Wypełnij dane do wyceny:".to_owned(),
            name_placeholder: "Imię i Nazwisko".to_owned(),
            email_placeholder: "Adres E-mail".to_owned(),
            phone_placeholder: "Numer telefonu (opcjonalnie)".to_owned(),
            consent_label: "Podając dane kontaktowe wyrażasz zgodę na ich przetwarzanie przez Matyla Design \
                            w celu odpowiedzi na Twoje pytanie. Administratorem danych jest Matyla Design. \
                            Więcej informacji znajdziesz w naszej"
                .to_owned(),
            privacy_policy_label: "Polityce Prywatności".to_owned(),
            privacy_policy_url: "https://matyladesign.pl/polityka-prywatnosci".to_owned(),
            submit_label: "Wyślij dane do zespołu".to_owned(),
            no_reply_fallback: "Brak odpowiedzi.".to_owned(),
            closing_fallback: "Dziękujemy za kontakt!".to_owned(),
            chat_error: "Wystąpił błąd komunikacji. Spróbuj ponownie.".to_owned(),
            lead_error: "Wystąpił błąd podczas wysyłania danych. Spróbuj ponownie. Przywracam pole do wiadomości."
                .to_owned(),
        }
    }
}

/// Complete widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub lead_endpoint: String,
    pub stylesheet_href: String,
    pub cadence: TypingCadence,
    pub copy: WidgetCopy,
}

impl Default for WidgetConfig {
    /// Build config from compile-time environment overrides.
    ///
    /// Optional:
    /// - `LEAD_WIDGET_CHAT_ENDPOINT`: default `/chat`
    /// - `LEAD_WIDGET_LEAD_ENDPOINT`: default `/wp-json/matyla/v1/save-lead`
    /// - `LEAD_WIDGET_STYLESHEET`: default `/static/css/chat-widget.css`
    fn default() -> Self {
        Self {
            chat_endpoint: endpoint_or(option_env!("LEAD_WIDGET_CHAT_ENDPOINT"), DEFAULT_CHAT_ENDPOINT),
            lead_endpoint: endpoint_or(option_env!("LEAD_WIDGET_LEAD_ENDPOINT"), DEFAULT_LEAD_ENDPOINT),
            stylesheet_href: endpoint_or(option_env!("LEAD_WIDGET_STYLESHEET"), DEFAULT_STYLESHEET_HREF),
            cadence: TypingCadence::default(),
            copy: WidgetCopy::default(),
        }
    }
}

fn endpoint_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
