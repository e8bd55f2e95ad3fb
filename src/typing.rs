//! Typing animation as a pure event schedule.
//!
//! `TypingSchedule` turns display text and a `TypingCadence` into a lazy
//! sequence of `TypingEvent`s. A renderer applies each event and waits for
//! its delay. The schedule never touches the DOM, so the same sequence drives
//! the browser view and the native tests.
//!
//! The schedule is deterministic for a given text and cadence. It has no
//! pause/resume and is not cancellable; dropping the iterator simply stops
//! producing events.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

use crate::config::TypingCadence;

/// One incremental render step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingEvent {
    /// Start a new, empty paragraph.
    ParagraphStart,
    /// Append `ch` to the current paragraph, then wait `delay`.
    Char { ch: char, delay: Duration },
    /// Pause after a finished paragraph.
    ParagraphEnd { pause: Duration },
}

impl TypingEvent {
    /// Time to wait after applying this event.
    #[must_use]
    pub fn delay(&self) -> Duration {
        match self {
            Self::ParagraphStart => Duration::ZERO,
            Self::Char { delay, .. } => *delay,
            Self::ParagraphEnd { pause } => *pause,
        }
    }
}

/// Split text into paragraphs on blank-line boundaries.
///
/// A boundary is a newline, optional whitespace, and another newline; the
/// longest such run is consumed. Whitespace-only paragraphs are dropped.
/// Text inside a paragraph, including single newlines, is kept verbatim.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    let chars = text.char_indices().collect::<Vec<_>>();
    let mut out = Vec::new();
    let mut start = 0;
    let mut k = 0;

    while k < chars.len() {
        let (i, ch) = chars[k];
        k += 1;
        if ch != '\n' {
            continue;
        }
        let mut run = k;
        let mut last_newline = None;
        while run < chars.len() && chars[run].1.is_whitespace() {
            if chars[run].1 == '\n' {
                last_newline = Some(run);
            }
            run += 1;
        }
        if let Some(n) = last_newline {
            out.push(&text[start..i]);
            // Whitespace after the last newline belongs to the next paragraph.
            start = chars[n].0 + 1;
            k = n + 1;
        }
    }
    out.push(&text[start..]);
    out.retain(|p| !p.trim().is_empty());
    out
}

/// Lazy per-character render schedule for one message.
#[derive(Clone, Debug)]
pub struct TypingSchedule<'a> {
    cadence: TypingCadence,
    paragraphs: std::vec::IntoIter<&'a str>,
    current: Option<std::str::Chars<'a>>,
}

impl<'a> TypingSchedule<'a> {
    #[must_use]
    pub fn new(text: &'a str, cadence: TypingCadence) -> Self {
        Self { cadence, paragraphs: paragraphs(text).into_iter(), current: None }
    }
}

impl Iterator for TypingSchedule<'_> {
    type Item = TypingEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(chars) = self.current.as_mut() {
            if let Some(ch) = chars.next() {
                return Some(TypingEvent::Char { ch, delay: self.cadence.delay_for(ch) });
            }
            self.current = None;
            return Some(TypingEvent::ParagraphEnd { pause: self.cadence.paragraph_pause });
        }
        let paragraph = self.paragraphs.next()?;
        self.current = Some(paragraph.chars());
        Some(TypingEvent::ParagraphStart)
    }
}

/// Apply one event to a list of rendered paragraphs.
pub fn apply_event(rendered: &mut Vec<String>, event: TypingEvent) {
    match event {
        TypingEvent::ParagraphStart => rendered.push(String::new()),
        TypingEvent::Char { ch, .. } => match rendered.last_mut() {
            Some(last) => last.push(ch),
            None => rendered.push(ch.to_string()),
        },
        TypingEvent::ParagraphEnd { .. } => {}
    }
}
