//! Lead form validation and the payloads built from it.
//!
//! A submitted form becomes `ContactDetails`, which feeds two messages: the
//! summary instruction sent to the chat endpoint, and the `LeadRecord` sent to
//! the lead-storage endpoint once the summary reply carries a transcript.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Phone value recorded when the optional field is left empty.
pub const PHONE_FALLBACK: &str = "Brak";

/// Raw values from the consent form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub consent: bool,
}

/// Validated contact details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadFormError {
    #[error("Aby kontynuować, musisz wyrazić zgodę na kontakt.")]
    ConsentMissing,
    #[error("Podaj swoje imię.")]
    NameMissing,
    #[error("Podaj adres e-mail.")]
    EmailMissing,
}

impl LeadForm {
    /// Validate the form. Consent is checked first.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule; the form stays open in that case. The
/// error's `Display` text is shown to the user.
    pub fn validate(&self) -> Result<ContactDetails, LeadFormError> {
        if !self.consent {
            return Err(LeadFormError::ConsentMissing);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LeadFormError::NameMissing);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(LeadFormError::EmailMissing);
        }
        let phone = match self.phone.trim() {
            "" => PHONE_FALLBACK,
            phone => phone,
        };
        Ok(ContactDetails { name: name.to_owned(), email: email.to_owned(), phone: phone.to_owned() })
    }
}

/// Instruction sent to the chat endpoint after consent so the backend
/// produces its closing message.
#[must_use]
pub fn summary_message(contact: &ContactDetails) -> String {
    format!(
        "Klient wyraził zgodę i wysłał dane: Imię: {}, Email: {}, Telefon: {}.\n\
         PROŚBA O WYSŁANIE FINALNEJ WIADOMOŚCI KOŃCZĄCEJ ROZMOWĘ I DZIĘKOWANIE (Zgodnie z SYSTEM PROMPT).",
        contact.name, contact.email, contact.phone
    )
}

/// Payload for the lead-storage endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub chat_history: serde_json::Value,
    pub timestamp: String,
}

impl LeadRecord {
    /// Build a record stamped with `at` (RFC 3339, UTC).
    ///
    /// # Errors
    ///
    /// Returns an error if `at` cannot be expressed as RFC 3339.
    pub fn new(
        contact: &ContactDetails,
        chat_history: serde_json::Value,
        at: OffsetDateTime,
    ) -> Result<Self, time::error::Format> {
        let timestamp = at.to_offset(time::UtcOffset::UTC).format(&Rfc3339)?;
        Ok(Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            chat_history,
            timestamp,
        })
    }
}
